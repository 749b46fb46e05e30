//! Endpoint and credential configuration.
//!
//! Values come from the process environment. `from_vars` takes the lookup as
//! a closure so tests never touch real environment variables.

use std::env;

pub const DICTIONARY_URL_VAR: &str = "WORDBOOK_DICTIONARY_URL";
pub const DICTIONARY_KEY_VAR: &str = "WORDBOOK_DICTIONARY_KEY";
pub const PHOTOS_URL_VAR: &str = "WORDBOOK_PHOTOS_URL";
pub const PHOTOS_KEY_VAR: &str = "WORDBOOK_PHOTOS_KEY";

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.shecodes.io";
pub const DEFAULT_PHOTOS_URL: &str = "https://api.pexels.com";

/// Keys starting with this prefix are template placeholders, not credentials.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_url: String,
    pub dictionary_key: String,
    pub photos_url: String,
    /// `None` disables the photo search.
    pub photos_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |name: &str| {
            var(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let dictionary_key = set(DICTIONARY_KEY_VAR).ok_or(ConfigError::Missing(DICTIONARY_KEY_VAR))?;
        Ok(Config {
            dictionary_url: set(DICTIONARY_URL_VAR)
                .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string()),
            dictionary_key,
            photos_url: set(PHOTOS_URL_VAR).unwrap_or_else(|| DEFAULT_PHOTOS_URL.to_string()),
            photos_key: set(PHOTOS_KEY_VAR),
        })
    }

    /// The usable photo API key, if any.
    pub fn photos_key(&self) -> Option<&str> {
        self.photos_key
            .as_deref()
            .filter(|key| !key.starts_with(PLACEHOLDER_PREFIX))
    }

    pub fn photos_enabled(&self) -> bool {
        self.photos_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_vars(vars(&[(DICTIONARY_KEY_VAR, "k")])).unwrap();
        assert_eq!(config.dictionary_url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.photos_url, DEFAULT_PHOTOS_URL);
        assert!(!config.photos_enabled());
    }

    #[test]
    fn dictionary_key_is_required() {
        let err = Config::from_vars(vars(&[(DICTIONARY_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(DICTIONARY_KEY_VAR)));
    }

    #[test]
    fn values_are_trimmed() {
        let config = Config::from_vars(vars(&[
            (DICTIONARY_KEY_VAR, " abc "),
            (DICTIONARY_URL_VAR, "http://localhost:3000\n"),
            (PHOTOS_KEY_VAR, "\treal "),
        ]))
        .unwrap();
        assert_eq!(config.dictionary_key, "abc");
        assert_eq!(config.dictionary_url, "http://localhost:3000");
        assert_eq!(config.photos_key(), Some("real"));
    }

    #[test]
    fn placeholder_photo_key_disables_photos() {
        let config = Config::from_vars(vars(&[
            (DICTIONARY_KEY_VAR, "k"),
            (PHOTOS_KEY_VAR, "YOUR_PEXELS_KEY"),
        ]))
        .unwrap();
        assert!(!config.photos_enabled());

        let config = Config::from_vars(vars(&[(DICTIONARY_KEY_VAR, "k"), (PHOTOS_KEY_VAR, "real")])).unwrap();
        assert_eq!(config.photos_key(), Some("real"));
    }
}
