//! Dictionary response normalization.
//!
//! # Design
//! The dictionary API answers in two shapes: meanings that nest a
//! `definitions` array, and flat meanings that carry `definition`, `example`
//! and `synonyms` directly. [`MeaningShape`] resolves which one a meaning uses
//! in exactly one place; everything after that works on `DefinitionBlock`.
//!
//! Normalization is a pure function of its input. Untrusted input never
//! panics: non-objects and type mismatches become `MalformedResponse`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;
use crate::types::{DefinitionBlock, LookupResult, PartOfSpeech, RawDefinition, RawEntry, RawMeaning};

/// Normalize a raw response body.
pub fn normalize_str(body: &str) -> Result<LookupResult, LookupError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;
    normalize(value)
}

/// Normalize an already-parsed dictionary response.
pub fn normalize(raw: Value) -> Result<LookupResult, LookupError> {
    let Some(object) = raw.as_object() else {
        return Err(LookupError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };
    match object.get("word") {
        None | Some(Value::Null) => return Err(LookupError::MissingWord),
        Some(Value::String(word)) if word.is_empty() => return Err(LookupError::MissingWord),
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(LookupError::MalformedResponse(format!(
                "word is not a string: {other}"
            )))
        }
    }

    let entry: RawEntry =
        serde_json::from_value(raw).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    let phonetics = entry.phonetics.as_deref().unwrap_or_default();
    let phonetic_text = non_empty(entry.phonetic.as_deref())
        .or_else(|| phonetics.iter().find_map(|p| non_empty(p.text.as_deref())))
        .unwrap_or_default()
        .to_string();
    let audio_url = non_empty(entry.audio.as_deref())
        .or_else(|| phonetics.iter().find_map(|p| non_empty(p.audio.as_deref())))
        .unwrap_or_default()
        .to_string();

    let raw_meanings = entry.meanings.as_deref().unwrap_or_default();
    let mut meanings = BTreeMap::new();
    for pos in PartOfSpeech::PRIORITY {
        // Only the first matching meaning is considered, even when it yields
        // no definition block. Meanings that are never selected are not
        // type-checked.
        let Some(selected) = raw_meanings.iter().find(|m| {
            m.get("partOfSpeech")
                .and_then(Value::as_str)
                .is_some_and(|label| pos.matches(label))
        }) else {
            continue;
        };
        let meaning = RawMeaning::deserialize(selected)
            .map_err(|e| LookupError::MalformedResponse(format!("{} meaning: {e}", pos.label())))?;
        if let Some(block) = definition_block(&meaning) {
            meanings.insert(pos, block);
        }
    }

    Ok(LookupResult {
        word: entry.word,
        phonetic_text,
        audio_url,
        meanings,
    })
}

/// Which of the two upstream layouts a meaning uses.
#[derive(Debug)]
enum MeaningShape<'a> {
    /// `{ partOfSpeech, definitions: [{ definition, example?, synonyms? }] }`
    Nested(&'a RawDefinition),
    /// `{ partOfSpeech, definition, example?, synonyms? }`
    Flat(&'a RawMeaning),
    /// Neither layout; the meaning is skipped.
    Empty,
}

impl<'a> MeaningShape<'a> {
    fn detect(meaning: &'a RawMeaning) -> Self {
        if let Some(first) = meaning.definitions.as_deref().and_then(|d| d.first()) {
            MeaningShape::Nested(first)
        } else if meaning.definition.is_some() {
            MeaningShape::Flat(meaning)
        } else {
            MeaningShape::Empty
        }
    }
}

fn definition_block(meaning: &RawMeaning) -> Option<DefinitionBlock> {
    let (definition, example, synonyms) = match MeaningShape::detect(meaning) {
        MeaningShape::Nested(d) => (&d.definition, &d.example, &d.synonyms),
        MeaningShape::Flat(m) => (&m.definition, &m.example, &m.synonyms),
        MeaningShape::Empty => return None,
    };
    let definition = non_empty(definition.as_deref())?;

    let synonyms = synonyms
        .as_deref()
        .unwrap_or_default()
        .iter()
        .chain(meaning.synonyms.as_deref().unwrap_or_default())
        .cloned()
        .collect();

    Some(DefinitionBlock {
        part_of_speech: meaning.part_of_speech.clone().unwrap_or_default(),
        definition: definition.to_string(),
        example: non_empty(example.as_deref()).map(str::to_string),
        synonyms,
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
