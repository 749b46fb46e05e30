//! Stateless request builders and response parsers for the two upstream APIs.
//!
//! # Design
//! `DictionaryClient` and `PhotoClient` hold only a base URL and a credential.
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the round-trip in between, which keeps this module free of
//! I/O and trivially testable.

use url::form_urlencoded;

use crate::config::Config;
use crate::error::LookupError;
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize::normalize_str;
use crate::photos::{build_photo_list_str, MAX_PHOTOS};
use crate::types::{LookupResult, Photo};

/// Builds dictionary lookups and normalizes their responses.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    base_url: String,
    key: String,
}

impl DictionaryClient {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.dictionary_url, &config.dictionary_key)
    }

    pub fn build_define(&self, word: &str) -> HttpRequest {
        let query = encode_query(&[("word", word), ("key", self.key.as_str())]);
        HttpRequest::get(format!("{}/dictionary/v1/define?{query}", self.base_url))
    }

    /// Non-success statuses fail before normalization is attempted.
    pub fn parse_define(&self, response: HttpResponse) -> Result<LookupResult, LookupError> {
        if !response.is_success() {
            return Err(LookupError::NetworkFailure {
                status: response.status,
                body: response.body,
            });
        }
        normalize_str(&response.body)
    }
}

/// Builds photo searches and turns their responses into a capped photo list.
#[derive(Debug, Clone)]
pub struct PhotoClient {
    base_url: String,
    key: String,
}

impl PhotoClient {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    /// `None` when the configuration carries no usable photo key.
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .photos_key()
            .map(|key| Self::new(&config.photos_url, key))
    }

    pub fn build_search(&self, word: &str) -> HttpRequest {
        let per_page = MAX_PHOTOS.to_string();
        let query = encode_query(&[("query", word), ("per_page", per_page.as_str())]);
        HttpRequest::get(format!("{}/v1/search?{query}", self.base_url))
            .with_header("Authorization", &self.key)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Photo>, LookupError> {
        if !response.is_success() {
            return Err(LookupError::ImageSearchFailure(format!(
                "HTTP {}",
                response.status
            )));
        }
        Ok(build_photo_list_str(&response.body))
    }
}

fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}
