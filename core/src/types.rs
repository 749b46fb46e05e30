//! Raw upstream DTOs and the normalized view model.
//!
//! # Design
//! The `Raw*` types mirror what the dictionary and photo APIs send, with every
//! field optional because neither API is trusted to be consistent. They are
//! only ever read by the normalizer and the photo list builder. Everything the
//! presentation layer touches (`LookupResult`, `DefinitionBlock`, `Photo`) is
//! owned, fully populated and serializable.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dictionary payload
// ---------------------------------------------------------------------------

/// Body of a dictionary lookup after the `word` field has been checked.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub phonetics: Option<Vec<RawPhonetic>>,
    /// Kept as raw values: a meaning is only deserialized into
    /// [`RawMeaning`] once it is selected for a part of speech.
    #[serde(default)]
    pub meanings: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

/// One meaning as sent upstream. Covers both the nested shape (a
/// `definitions` array) and the flat shape (`definition` on the meaning).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<RawDefinition>>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// The parts of speech a lookup result is keyed by.
///
/// Variant order is the rendering priority: noun, then adjective, then verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
}

impl PartOfSpeech {
    pub const PRIORITY: [PartOfSpeech; 3] =
        [PartOfSpeech::Noun, PartOfSpeech::Adjective, PartOfSpeech::Verb];

    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Verb => "verb",
        }
    }

    /// Case-insensitive substring match, so "Proper Noun" is a noun.
    pub fn matches(self, source_label: &str) -> bool {
        source_label.to_lowercase().contains(self.label())
    }
}

/// One sense: a definition with its optional example and synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionBlock {
    /// The label as the API spelled it, e.g. "proper noun".
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: BTreeSet<String>,
}

/// Normalized, UI-ready result of a single dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub word: String,
    /// Empty when the payload has no phonetic transcription.
    pub phonetic_text: String,
    /// Empty when the payload has no pronunciation audio.
    pub audio_url: String,
    pub meanings: BTreeMap<PartOfSpeech, DefinitionBlock>,
}

impl LookupResult {
    pub fn meaning(&self, pos: PartOfSpeech) -> Option<&DefinitionBlock> {
        self.meanings.get(&pos)
    }
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub src: Option<RawPhotoSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhotoSource {
    #[serde(default)]
    pub medium: Option<String>,
}

/// A related photo, ready to render as a linked thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    /// Page on the photo site.
    pub url: String,
    pub alt: String,
    /// Medium-size image URL.
    pub medium: String,
}
