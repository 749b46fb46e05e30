//! Terminal rendering of a search outcome.

use std::fmt::Write;

use serde::Serialize;
use wordbook_core::{DefinitionBlock, LookupResult, Photo};

/// Coarse grouping of a source part-of-speech label, used for the section tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosCategory {
    Noun,
    Adverb,
    Verb,
    Adjective,
    Other,
}

impl PosCategory {
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("noun") {
            PosCategory::Noun
        } else if lower.contains("adverb") {
            PosCategory::Adverb
        } else if lower.contains("verb") {
            PosCategory::Verb
        } else if lower.contains("adjective") {
            PosCategory::Adjective
        } else {
            PosCategory::Other
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            PosCategory::Noun => "[n.]",
            PosCategory::Adverb => "[adv.]",
            PosCategory::Verb => "[v.]",
            PosCategory::Adjective => "[adj.]",
            PosCategory::Other => "[*]",
        }
    }
}

#[derive(Serialize)]
pub struct JsonView<'a> {
    pub result: &'a LookupResult,
    pub photos: &'a [Photo],
}

pub fn render(result: &LookupResult, photos: &[Photo]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", result.word);
    if !result.phonetic_text.is_empty() {
        let _ = write!(out, "  {}", result.phonetic_text);
    }
    out.push('\n');
    if !result.audio_url.is_empty() {
        out.push_str("  pronunciation available (--play)\n");
    }

    for block in result.meanings.values() {
        out.push('\n');
        render_block(&mut out, block);
    }

    if !photos.is_empty() {
        out.push_str("\nRelated images\n");
        for photo in photos {
            let alt = if photo.alt.is_empty() { "photo" } else { photo.alt.as_str() };
            let _ = writeln!(out, "  {alt}: {}", photo.url);
        }
    }
    out
}

fn render_block(out: &mut String, block: &DefinitionBlock) {
    let category = PosCategory::classify(&block.part_of_speech);
    let _ = writeln!(out, "{} {}", category.tag(), block.part_of_speech);
    let _ = writeln!(out, "  {}", block.definition);
    if let Some(example) = &block.example {
        let _ = writeln!(out, "  \"{example}\"");
    }
    if !block.synonyms.is_empty() {
        let synonyms: Vec<&str> = block.synonyms.iter().map(String::as_str).collect();
        let _ = writeln!(out, "  Synonyms: {}", synonyms.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use wordbook_core::PartOfSpeech;

    use super::*;

    fn block(pos: &str, definition: &str, example: Option<&str>, synonyms: &[&str]) -> DefinitionBlock {
        DefinitionBlock {
            part_of_speech: pos.to_string(),
            definition: definition.to_string(),
            example: example.map(str::to_string),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn classify_checks_adverb_before_verb() {
        assert_eq!(PosCategory::classify("Proper Noun"), PosCategory::Noun);
        assert_eq!(PosCategory::classify("adverb"), PosCategory::Adverb);
        assert_eq!(PosCategory::classify("verb"), PosCategory::Verb);
        assert_eq!(PosCategory::classify("adjective"), PosCategory::Adjective);
        assert_eq!(PosCategory::classify("interjection"), PosCategory::Other);
    }

    #[test]
    fn renders_sections_in_priority_order_then_photos() {
        let mut meanings = BTreeMap::new();
        meanings.insert(
            PartOfSpeech::Verb,
            block("verb", "To write programs", Some("I code every day."), &[]),
        );
        meanings.insert(
            PartOfSpeech::Noun,
            block("noun", "A system of symbols...", None, &["cipher", "codebook"]),
        );
        let result = LookupResult {
            word: "code".to_string(),
            phonetic_text: "/koʊd/".to_string(),
            audio_url: String::new(),
            meanings,
        };
        let photos = vec![Photo {
            id: 1,
            url: "https://photos.example/1".to_string(),
            alt: String::new(),
            medium: "https://img.example/1.jpg".to_string(),
        }];

        let text = render(&result, &photos);
        let expected = "\
code  /koʊd/

[n.] noun
  A system of symbols...
  Synonyms: cipher, codebook

[v.] verb
  To write programs
  \"I code every day.\"

Related images
  photo: https://photos.example/1
";
        assert_eq!(text, expected);
    }

    #[test]
    fn audio_hint_only_when_url_present() {
        let result = LookupResult {
            word: "sun".to_string(),
            phonetic_text: String::new(),
            audio_url: "https://a/sun.mp3".to_string(),
            meanings: BTreeMap::new(),
        };
        assert_eq!(render(&result, &[]), "sun\n  pronunciation available (--play)\n");
    }
}
