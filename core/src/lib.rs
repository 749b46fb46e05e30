//! I/O-free core of the word lookup client.
//!
//! # Overview
//! Normalizes dictionary responses into a uniform [`LookupResult`], builds
//! capped photo lists, and builds/parses the HTTP exchanges with both upstream
//! APIs without touching the network (host-does-IO pattern). The caller plugs
//! a [`Transport`] into a [`Searcher`] to run actual searches.
//!
//! # Design
//! - The normalizer is a pure function; the two upstream response shapes are
//!   resolved in one place and never leak past it.
//! - Clients are stateless: base URL plus credential, `build_*` / `parse_*`.
//! - Credentials are injected through [`Config`], never compiled in.
//! - Photo search is best-effort; its failures never reach the user.

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod photos;
pub mod search;
pub mod types;

pub use audio::{play_pronunciation, AudioPlayer};
pub use client::{DictionaryClient, PhotoClient};
pub use config::{Config, ConfigError};
pub use error::{LookupError, NO_DEFINITION_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use normalize::{normalize, normalize_str};
pub use photos::{build_photo_list, build_photo_list_str, MAX_PHOTOS};
pub use search::{SearchOutcome, SearchSession, Searcher, Ticket};
pub use types::{DefinitionBlock, LookupResult, PartOfSpeech, Photo};
