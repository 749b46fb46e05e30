use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Canned dictionary bodies, keyed by lower-case word.
const DICTIONARY: &[(&str, &str)] = &[
    ("code", include_str!("../fixtures/code.json")),
    ("sun", include_str!("../fixtures/sun.json")),
    ("bright", include_str!("../fixtures/bright.json")),
    ("void", include_str!("../fixtures/void.json")),
];

/// Photos the search endpoint can return for a single query.
pub const PHOTOS_PER_QUERY: usize = 12;
pub const DEFAULT_PER_PAGE: usize = 15;
/// The photo with this id is served without a medium-size source.
pub const PHOTO_WITHOUT_MEDIUM: u64 = 3;
/// Photo searches for this query fail with 503.
pub const FAILING_PHOTO_QUERY: &str = "blackout";

#[derive(Debug, Deserialize)]
pub struct DefineParams {
    pub word: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub per_page: Option<usize>,
}

pub fn app() -> Router {
    Router::new()
        .route("/dictionary/v1/define", get(define))
        .route("/v1/search", get(search_photos))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn define(Query(params): Query<DefineParams>) -> Response {
    if params.key.as_deref().unwrap_or_default().is_empty() {
        return error(StatusCode::UNAUTHORIZED, "missing api key");
    }
    let word = params.word.unwrap_or_default().trim().to_lowercase();
    if word.is_empty() {
        return error(StatusCode::BAD_REQUEST, "missing word");
    }
    tracing::debug!(%word, "define");
    match DICTIONARY.iter().find(|(known, _)| *known == word) {
        Some((_, body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            *body,
        )
            .into_response(),
        None => error(StatusCode::NOT_FOUND, "Word not found"),
    }
}

async fn search_photos(headers: HeaderMap, Query(params): Query<SearchParams>) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.is_empty());
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "unauthorized");
    }
    let query = params.query.unwrap_or_default();
    if query == FAILING_PHOTO_QUERY {
        return error(StatusCode::SERVICE_UNAVAILABLE, "photo backend unavailable");
    }
    let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE).min(PHOTOS_PER_QUERY);
    tracing::debug!(%query, per_page, "photo search");
    let photos: Vec<Value> = (1..=per_page as u64).map(|id| photo(&query, id)).collect();
    Json(json!({ "page": 1, "per_page": per_page, "photos": photos })).into_response()
}

fn photo(query: &str, id: u64) -> Value {
    let mut src = json!({
        "original": format!("https://images.example/{query}/{id}.jpg"),
        "medium": format!("https://images.example/{query}/{id}-medium.jpg"),
    });
    if id == PHOTO_WITHOUT_MEDIUM {
        if let Some(src) = src.as_object_mut() {
            src.remove("medium");
        }
    }
    json!({
        "id": id,
        "url": format!("https://photos.example/{query}-{id}/"),
        "alt": format!("{query} photo {id}"),
        "src": src,
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
