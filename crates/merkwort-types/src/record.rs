use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage category of a word record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordCategory::Noun => "noun",
            WordCategory::Verb => "verb",
            WordCategory::Adjective => "adjective",
        };
        f.write_str(name)
    }
}

impl FromStr for WordCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noun" | "n" => Ok(WordCategory::Noun),
            "verb" | "v" => Ok(WordCategory::Verb),
            "adjective" | "adj" | "a" => Ok(WordCategory::Adjective),
            _ => Err(()),
        }
    }
}

/// Grammatical gender of a German noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Der,
    Die,
    Das,
}

impl Gender {
    pub fn article(&self) -> &'static str {
        match self {
            Gender::Der => "der",
            Gender::Die => "die",
            Gender::Das => "das",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.article())
    }
}

/// A stored noun. `word` and `plural` are both optional; at least one is
/// expected to be present for the entry to be displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounRecord {
    pub id: u64,
    pub word: Option<String>,
    pub plural: Option<String>,
    pub translation: String,
    pub gender: Gender,
}

/// A stored verb, without its conjugation forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub id: u64,
    pub word: String,
    pub translation: String,
}

/// Conjugation forms paired 1:1 with a verb. `verb_id` equals the verb's
/// own id; the pair shares one lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForms {
    pub verb_id: u64,
    /// Präteritum, "sie/sie" person.
    pub praeteritum_sie: Option<String>,
    pub perfekt: Option<String>,
}

/// A verb joined with its conjugation forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbWithForms {
    pub verb: VerbRecord,
    pub forms: VerbForms,
}

/// A stored adjective with optional comparison forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveRecord {
    pub id: u64,
    pub word: String,
    pub translation: String,
    pub komparativ: Option<String>,
    pub superlativ: Option<String>,
}

/// Any word record, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordRecord {
    Noun(NounRecord),
    Verb(VerbWithForms),
    Adjective(AdjectiveRecord),
}

impl WordRecord {
    pub fn category(&self) -> WordCategory {
        match self {
            WordRecord::Noun(_) => WordCategory::Noun,
            WordRecord::Verb(_) => WordCategory::Verb,
            WordRecord::Adjective(_) => WordCategory::Adjective,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            WordRecord::Noun(noun) => noun.id,
            WordRecord::Verb(verb) => verb.verb.id,
            WordRecord::Adjective(adjective) => adjective.id,
        }
    }
}

/// A pending, one-shot opportunity to restore a just-deleted record.
/// Carries the full original record; consumed at most once.
#[derive(Debug, Clone)]
pub enum UndoEvent {
    ReturnNoun(NounRecord),
    ReturnVerb(VerbWithForms),
    ReturnAdjective(AdjectiveRecord),
}

impl UndoEvent {
    pub fn category(&self) -> WordCategory {
        match self {
            UndoEvent::ReturnNoun(_) => WordCategory::Noun,
            UndoEvent::ReturnVerb(_) => WordCategory::Verb,
            UndoEvent::ReturnAdjective(_) => WordCategory::Adjective,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            UndoEvent::ReturnNoun(noun) => noun.id,
            UndoEvent::ReturnVerb(verb) => verb.verb.id,
            UndoEvent::ReturnAdjective(adjective) => adjective.id,
        }
    }
}
