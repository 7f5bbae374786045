use merkwort_types::{AdjectiveRecord, DisplayItem, NounRecord, VerbWithForms, WordRecord};

/// Map a stored record into its display shape. Pure and total; lossy,
/// display-only.
pub fn project(record: &WordRecord) -> DisplayItem {
    match record {
        WordRecord::Noun(noun) => noun_item(noun),
        WordRecord::Verb(verb) => verb_item(verb),
        WordRecord::Adjective(adjective) => adjective_item(adjective),
    }
}

pub fn noun_item(noun: &NounRecord) -> DisplayItem {
    // Display word falls back to the plural when the singular is absent.
    let word = noun
        .word
        .clone()
        .or_else(|| noun.plural.clone())
        .unwrap_or_default();
    DisplayItem::Noun {
        id: noun.id,
        word,
        translation: noun.translation.clone(),
        gender: noun.gender,
    }
}

pub fn verb_item(verb: &VerbWithForms) -> DisplayItem {
    // Only the verb's own id is exposed; the paired forms share it.
    DisplayItem::Verb {
        id: verb.verb.id,
        word: verb.verb.word.clone(),
        translation: verb.verb.translation.clone(),
        praeteritum: verb.forms.praeteritum_sie.clone().unwrap_or_default(),
        perfekt: verb.forms.perfekt.clone().unwrap_or_default(),
    }
}

pub fn adjective_item(adjective: &AdjectiveRecord) -> DisplayItem {
    DisplayItem::Adjective {
        id: adjective.id,
        word: adjective.word.clone(),
        translation: adjective.translation.clone(),
        komparativ: adjective.komparativ.clone(),
        superlativ: adjective.superlativ.clone(),
    }
}
