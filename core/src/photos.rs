//! Photo list building.
//!
//! The photo API is best-effort decoration, so this never fails: a missing
//! `photos` array, a non-object body or an entry that does not deserialize all
//! just produce fewer photos.

use serde_json::Value;

use crate::types::{Photo, RawPhoto};

/// Maximum number of photos kept from a search response.
pub const MAX_PHOTOS: usize = 9;

pub fn build_photo_list_str(body: &str) -> Vec<Photo> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => build_photo_list(&value),
        Err(_) => Vec::new(),
    }
}

/// Keep photos that have a medium-size source, in source order, capped at
/// [`MAX_PHOTOS`].
pub fn build_photo_list(raw: &Value) -> Vec<Photo> {
    let Some(entries) = raw.get("photos").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<RawPhoto>(entry.clone()).ok())
        .filter_map(into_photo)
        .take(MAX_PHOTOS)
        .collect()
}

fn into_photo(raw: RawPhoto) -> Option<Photo> {
    let medium = raw.src?.medium.filter(|m| !m.is_empty())?;
    Some(Photo {
        id: raw.id.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
        alt: raw.alt.unwrap_or_default(),
        medium,
    })
}
