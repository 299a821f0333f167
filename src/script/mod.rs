//! Writing-system labels for individual characters and whole strings.

pub mod classifier;
pub mod extractor;

pub use classifier::classify;
pub use extractor::{has_non_ascii_script, scripts_in_text};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Coarse script label of a character.
///
/// `Named` carries the first word of the formal Unicode name for characters outside
/// the fixed ranges (e.g. `GREEK`, `HEBREW`, `LATIN`). Labels compare and serialize
/// by their text, so two values with the same label are the same script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Script {
    BasicLatin,
    LatinDiacritics,
    Cyrillic,
    Arabic,
    Devanagari,
    Thai,
    Korean,
    Hiragana,
    Katakana,
    Cjk,
    Named(String),
    Other,
}

impl Script {
    pub fn as_str(&self) -> &str {
        match self {
            Self::BasicLatin => "Basic-Latin",
            Self::LatinDiacritics => "Latin-diacritics",
            Self::Cyrillic => "Cyrillic",
            Self::Arabic => "Arabic",
            Self::Devanagari => "Devanagari",
            Self::Thai => "Thai",
            Self::Korean => "Korean",
            Self::Hiragana => "Hiragana",
            Self::Katakana => "Katakana",
            Self::Cjk => "CJK",
            Self::Named(name) => name,
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Basic-Latin" => Self::BasicLatin,
            "Latin-diacritics" => Self::LatinDiacritics,
            "Cyrillic" => Self::Cyrillic,
            "Arabic" => Self::Arabic,
            "Devanagari" => Self::Devanagari,
            "Thai" => Self::Thai,
            "Korean" => Self::Korean,
            "Hiragana" => Self::Hiragana,
            "Katakana" => Self::Katakana,
            "CJK" => Self::Cjk,
            "Other" => Self::Other,
            name => Self::Named(name.to_string()),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Script {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Script> for String {
    fn from(script: Script) -> Self {
        match script {
            Script::Named(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl PartialEq for Script {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Script {}

impl PartialOrd for Script {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Script {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl std::hash::Hash for Script {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
