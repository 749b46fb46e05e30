//! One user-initiated search: dictionary lookup, then photos.
//!
//! # Design
//! The two calls are sequential. The photo query is only issued once the
//! dictionary has confirmed the word, and its failures are swallowed. Any
//! dictionary failure collapses into [`SearchOutcome::Failed`], whose user
//! message is always [`NO_DEFINITION_MESSAGE`]; the actual error kind only
//! goes to the log.
//!
//! Overlapping searches are fenced by [`SearchSession`]: each search takes a
//! ticket up front and its outcome is dropped if a newer ticket was issued in
//! the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::client::{DictionaryClient, PhotoClient};
use crate::config::Config;
use crate::error::{LookupError, NO_DEFINITION_MESSAGE};
use crate::http::Transport;
use crate::types::{LookupResult, Photo};

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found {
        result: LookupResult,
        photos: Vec<Photo>,
    },
    Failed(LookupError),
}

impl SearchOutcome {
    /// Message to show in place of results, if any.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Found { .. } => None,
            SearchOutcome::Failed(_) => Some(NO_DEFINITION_MESSAGE),
        }
    }
}

/// Drives searches through a caller-supplied [`Transport`].
pub struct Searcher<T> {
    transport: T,
    dictionary: DictionaryClient,
    photos: Option<PhotoClient>,
}

impl<T: Transport> Searcher<T> {
    pub fn new(transport: T, dictionary: DictionaryClient, photos: Option<PhotoClient>) -> Self {
        Self {
            transport,
            dictionary,
            photos,
        }
    }

    pub fn from_config(transport: T, config: &Config) -> Self {
        Self::new(
            transport,
            DictionaryClient::from_config(config),
            PhotoClient::from_config(config),
        )
    }

    /// Disable the photo search regardless of configuration.
    pub fn without_photos(mut self) -> Self {
        self.photos = None;
        self
    }

    /// Run a full search. The only `Err` is `EmptyQuery`, returned before any
    /// request is built; every other failure is reported as an outcome.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let result = match self.lookup(query) {
            Ok(result) => result,
            Err(err) => {
                warn!(query, error = %err, "dictionary lookup failed");
                return Ok(SearchOutcome::Failed(err));
            }
        };
        info!(
            word = %result.word,
            meanings = result.meanings.len(),
            "dictionary lookup succeeded"
        );

        let photos = self.photos_for(query);
        Ok(SearchOutcome::Found { result, photos })
    }

    /// Run a search under `session`, publishing the outcome only if no newer
    /// search started meanwhile. Returns whether the outcome was kept.
    ///
    /// An empty query is rejected before a ticket is taken, so it never
    /// fences out a search that is still running.
    pub fn search_in(&self, session: &SearchSession, query: &str) -> Result<bool, LookupError> {
        if query.trim().is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        let ticket = session.begin();
        let outcome = self.search(query)?;
        Ok(session.complete(ticket, outcome))
    }

    /// Dictionary lookup only. `query` must already be trimmed and non-empty.
    pub fn lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        let request = self.dictionary.build_define(query);
        let response = self
            .transport
            .execute(&request)
            .map_err(LookupError::Transport)?;
        self.dictionary.parse_define(response)
    }

    /// Photo search. Never fails; errors degrade to an empty list.
    pub fn photos_for(&self, query: &str) -> Vec<Photo> {
        let Some(client) = &self.photos else {
            return Vec::new();
        };
        let request = client.build_search(query);
        let result = self
            .transport
            .execute(&request)
            .map_err(LookupError::ImageSearchFailure)
            .and_then(|response| client.parse_search(response));
        match result {
            Ok(photos) => photos,
            Err(err) => {
                debug!(query, error = %err, "photo search failed, showing no photos");
                Vec::new()
            }
        }
    }
}

/// Handle for one search started through [`SearchSession::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holds the latest published search outcome and fences out stale ones.
#[derive(Debug, Default)]
pub struct SearchSession {
    issued: AtomicU64,
    latest: Mutex<Option<(Ticket, SearchOutcome)>>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Publish `outcome` if `ticket` is still the newest one issued.
    pub fn complete(&self, ticket: Ticket, outcome: SearchOutcome) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        let newest = self.issued.load(Ordering::SeqCst);
        if ticket.0 != newest {
            debug!(ticket = ticket.0, newest, "dropping stale search outcome");
            return false;
        }
        *latest = Some((ticket, outcome));
        true
    }

    pub fn current(&self) -> Option<SearchOutcome> {
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        latest.as_ref().map(|(_, outcome)| outcome.clone())
    }
}
