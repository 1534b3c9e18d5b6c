//! Sefaria lexicon API schema (`GET /api/words/{word}`).
//!
//! One unified entry type covers all lexicon variants (Jastrow, Klein, BDB,
//! BDB Augmented Strong); fields that only some lexicons emit are optional.
//! Missing or malformed optional fields deserialize to their absence rather
//! than failing the whole entry.

use serde::{Deserialize, Serialize};

/// Grammar information attached to a sense.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenseGrammar {
    pub verbal_stem: Option<String>,
    pub language_code: Option<String>,
    pub binyan_form: Option<Vec<String>>,
    pub morphology: Option<String>,
}

/// A single sense/definition. Recursive: `senses` nests sub-senses to
/// arbitrary depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub definition: Option<String>,
    pub number: Option<String>,
    pub num: Option<String>,
    pub pre_num: Option<String>,
    pub grammar: Option<SenseGrammar>,
    pub form: Option<String>,
    pub plural_form: Option<String>,
    pub note: Option<String>,
    pub notes: Option<String>,
    /// Spelled the way the API spells it.
    pub occurences: Option<String>,
    pub all_cited: bool,
    pub alternative: Option<String>,
    pub language_code: Option<String>,
    pub morphology: Option<String>,
    pub senses: Option<Vec<Sense>>,
}

/// The `content` object within an entry: morphology plus the sense tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryContent {
    pub morphology: Option<String>,
    pub senses: Vec<Sense>,
}

/// Metadata about the parent lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentLexiconDetails {
    pub name: String,
    pub language: Option<String>,
    pub to_language: Option<String>,
    pub text_categories: Vec<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub attribution: Option<String>,
    pub attribution_url: Option<String>,
    pub index_title: Option<String>,
    pub version_title: Option<String>,
    pub version_lang: Option<String>,
    pub should_autocomplete: bool,
}

/// Alternative headword: some lexicons emit bare strings, others objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AltHeadword {
    Word(String),
    Detailed {
        word: Option<String>,
        occurences: Option<String>,
    },
}

impl AltHeadword {
    pub fn word(&self) -> Option<&str> {
        match self {
            AltHeadword::Word(w) => Some(w),
            AltHeadword::Detailed { word, .. } => word.as_deref(),
        }
    }
}

/// A single dictionary entry from the lexicon endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryEntry {
    pub headword: String,
    pub headword_suffix: Option<String>,
    /// Name of the source lexicon, e.g. "Jastrow Dictionary".
    pub parent_lexicon: String,
    pub content: EntryContent,
    pub rid: Option<String>,
    pub refs: Vec<String>,
    /// HTML fragment describing derivative words.
    pub derivatives: Option<String>,
    pub prev_hw: Option<String>,
    pub next_hw: Option<String>,
    /// HTML fragment, often with embedded links.
    pub notes: Option<String>,
    pub parent_lexicon_details: Option<ParentLexiconDetails>,
    pub strong_number: Option<String>,
    pub strong_numbers: Vec<String>,
    pub transliteration: Option<String>,
    pub pronunciation: Option<String>,
    pub language_code: Option<String>,
    /// HTML fragment.
    pub language_reference: Option<String>,
    pub morphology: Option<String>,
    pub plural_form: Vec<String>,
    pub alt_headwords: Vec<AltHeadword>,
    pub quotes: Vec<String>,
    pub all_cited: bool,
    #[serde(rename = "GK")]
    pub gk: Vec<String>,
    #[serde(rename = "TWOT")]
    pub twot: Vec<String>,
    pub root: bool,
    pub peculiar: bool,
    pub ordinal: Option<String>,
    pub occurrences: Option<String>,
    pub brackets: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_entry() {
        let entry: DictionaryEntry = serde_json::from_value(serde_json::json!({
            "headword": "אֵב",
            "parent_lexicon": "Jastrow Dictionary",
            "content": { "senses": [{ "definition": "freshness" }] }
        }))
        .unwrap();
        assert_eq!(entry.headword, "אֵב");
        assert_eq!(entry.content.senses.len(), 1);
        assert!(entry.refs.is_empty());
        assert!(!entry.root);
    }

    #[test]
    fn deserializes_nested_senses() {
        let sense: Sense = serde_json::from_value(serde_json::json!({
            "number": "1",
            "senses": [
                { "definition": "outer", "senses": [{ "definition": "inner" }] }
            ]
        }))
        .unwrap();
        let outer = &sense.senses.unwrap()[0];
        let inner = &outer.senses.as_ref().unwrap()[0];
        assert_eq!(inner.definition.as_deref(), Some("inner"));
    }

    #[test]
    fn alt_headwords_accept_strings_and_objects() {
        let entry: DictionaryEntry = serde_json::from_value(serde_json::json!({
            "headword": "x",
            "parent_lexicon": "BDB Dictionary",
            "alt_headwords": ["plain", { "word": "detailed", "occurences": "3" }]
        }))
        .unwrap();
        let words: Vec<_> = entry.alt_headwords.iter().filter_map(AltHeadword::word).collect();
        assert_eq!(words, vec!["plain", "detailed"]);
    }
}
