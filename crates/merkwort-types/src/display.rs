use crate::record::{Gender, WordCategory};

/// UI-facing projection of a word record. Derived on every aggregation
/// pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Noun {
        id: u64,
        word: String,
        translation: String,
        gender: Gender,
    },
    Verb {
        id: u64,
        word: String,
        translation: String,
        praeteritum: String,
        perfekt: String,
    },
    Adjective {
        id: u64,
        word: String,
        translation: String,
        komparativ: Option<String>,
        superlativ: Option<String>,
    },
}

impl DisplayItem {
    pub fn category(&self) -> WordCategory {
        match self {
            DisplayItem::Noun { .. } => WordCategory::Noun,
            DisplayItem::Verb { .. } => WordCategory::Verb,
            DisplayItem::Adjective { .. } => WordCategory::Adjective,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            DisplayItem::Noun { id, .. }
            | DisplayItem::Verb { id, .. }
            | DisplayItem::Adjective { id, .. } => *id,
        }
    }

    /// Primary display string. This is the field the list is sorted and
    /// searched by.
    pub fn word(&self) -> &str {
        match self {
            DisplayItem::Noun { word, .. }
            | DisplayItem::Verb { word, .. }
            | DisplayItem::Adjective { word, .. } => word,
        }
    }

    pub fn translation(&self) -> &str {
        match self {
            DisplayItem::Noun { translation, .. }
            | DisplayItem::Verb { translation, .. }
            | DisplayItem::Adjective { translation, .. } => translation,
        }
    }
}
