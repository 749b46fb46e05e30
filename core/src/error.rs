//! Error types for dictionary lookups and photo searches.
//!
//! # Design
//! `MissingWord` and `MalformedResponse` come out of normalization; the
//! remaining variants come from the client and transport layers. Only the
//! dictionary-side variants ever reach the user, and even then only as the
//! generic [`NO_DEFINITION_MESSAGE`]. `ImageSearchFailure` is soft: the search
//! flow logs it and carries on with zero photos.

/// The single user-facing message shown for any failed dictionary lookup.
pub const NO_DEFINITION_MESSAGE: &str = "No definition found. Please try another word.";

/// Errors returned by the normalizer, the client parse methods and the search
/// flow.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// The query was empty after trimming; no request was built.
    #[error("query is empty")]
    EmptyQuery,

    /// The payload is an object but carries no usable `word` field.
    #[error("response has no word")]
    MissingWord,

    /// The payload is not a JSON object, or a field has the wrong type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    NetworkFailure { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The photo search failed. Never shown to the user.
    #[error("image search failed: {0}")]
    ImageSearchFailure(String),
}

impl LookupError {
    /// Whether this error counts as a network-level failure (bad status or
    /// transport fault) rather than a problem with the payload.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            LookupError::NetworkFailure { .. } | LookupError::Transport(_)
        )
    }
}
