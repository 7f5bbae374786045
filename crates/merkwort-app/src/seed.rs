use std::path::Path;

use merkwort_store::{MemoryStore, WordStore};
use merkwort_types::{
    AdjectiveRecord, Gender, NounRecord, VerbForms, VerbRecord, VerbWithForms,
};
use serde::Deserialize;

/// Word lists loaded from a JSON seed file. All sections are optional.
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub nouns: Vec<NounRecord>,
    #[serde(default)]
    pub verbs: Vec<VerbWithForms>,
    #[serde(default)]
    pub adjectives: Vec<AdjectiveRecord>,
}

pub fn load(path: &Path) -> anyhow::Result<SeedFile> {
    let text = std::fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&text)?;
    tracing::info!(
        nouns = seed.nouns.len(),
        verbs = seed.verbs.len(),
        adjectives = seed.adjectives.len(),
        "seed file loaded from {}",
        path.display()
    );
    Ok(seed)
}

/// A few starter words so the demo has something to show without a seed
/// file.
pub fn sample() -> SeedFile {
    let noun = |word: &str, plural: &str, translation: &str, gender| NounRecord {
        id: 0,
        word: Some(word.to_string()),
        plural: Some(plural.to_string()),
        translation: translation.to_string(),
        gender,
    };
    let verb = |word: &str, translation: &str, praeteritum: &str, perfekt: &str| VerbWithForms {
        verb: VerbRecord {
            id: 0,
            word: word.to_string(),
            translation: translation.to_string(),
        },
        forms: VerbForms {
            verb_id: 0,
            praeteritum_sie: Some(praeteritum.to_string()),
            perfekt: Some(perfekt.to_string()),
        },
    };
    let adjective = |word: &str, translation: &str, komparativ: &str, superlativ: &str| {
        AdjectiveRecord {
            id: 0,
            word: word.to_string(),
            translation: translation.to_string(),
            komparativ: Some(komparativ.to_string()),
            superlativ: Some(superlativ.to_string()),
        }
    };

    SeedFile {
        nouns: vec![
            noun("Apfel", "Äpfel", "apple", Gender::Der),
            noun("Hund", "Hunde", "dog", Gender::Der),
            noun("Katze", "Katzen", "cat", Gender::Die),
            noun("Haus", "Häuser", "house", Gender::Das),
        ],
        verbs: vec![
            verb("gehen", "to go", "gingen", "ist gegangen"),
            verb("lernen", "to learn", "lernten", "hat gelernt"),
            verb("sprechen", "to speak", "sprachen", "hat gesprochen"),
        ],
        adjectives: vec![
            adjective("schnell", "fast", "schneller", "am schnellsten"),
            adjective("gut", "good", "besser", "am besten"),
        ],
    }
}

pub async fn apply(store: &MemoryStore, seed: SeedFile) -> anyhow::Result<()> {
    for record in seed.nouns {
        store.insert_noun(record).await?;
    }
    for record in seed.verbs {
        store.insert_verb(record).await?;
    }
    for record in seed.adjectives {
        store.insert_adjective(record).await?;
    }
    Ok(())
}
