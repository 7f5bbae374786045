use std::sync::Arc;
use std::time::Duration;

use merkwort_store::{MemoryStore, WordStore};
use merkwort_types::{
    AdjectiveRecord, DisplayItem, Gender, NounRecord, VerbForms, VerbRecord, VerbWithForms,
};
use tokio::sync::watch;
use tokio::time::timeout;

mod aggregator_tests;

pub(crate) fn noun(word: &str, translation: &str, gender: Gender) -> NounRecord {
    NounRecord {
        id: 0,
        word: Some(word.to_string()),
        plural: None,
        translation: translation.to_string(),
        gender,
    }
}

pub(crate) fn verb(word: &str, translation: &str) -> VerbWithForms {
    VerbWithForms {
        verb: VerbRecord {
            id: 0,
            word: word.to_string(),
            translation: translation.to_string(),
        },
        forms: VerbForms {
            verb_id: 0,
            praeteritum_sie: Some(format!("{word}ten")),
            perfekt: None,
        },
    }
}

pub(crate) fn adjective(word: &str, translation: &str) -> AdjectiveRecord {
    AdjectiveRecord {
        id: 0,
        word: word.to_string(),
        translation: translation.to_string(),
        komparativ: None,
        superlativ: None,
    }
}

/// Store seeded with one word per category, as in the worked example:
/// Apfel / gehen / schnell.
pub(crate) async fn sample_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_noun(noun("Apfel", "apple", Gender::Der))
        .await
        .unwrap();
    store.insert_verb(verb("gehen", "to go")).await.unwrap();
    store
        .insert_adjective(adjective("schnell", "fast"))
        .await
        .unwrap();
    store
}

/// Wait until the published list satisfies `pred`, or fail after two
/// seconds. Robust against passes being skipped under latest-wins.
pub(crate) async fn wait_for_list(
    rx: &mut watch::Receiver<Vec<DisplayItem>>,
    pred: impl Fn(&[DisplayItem]) -> bool,
) -> Vec<DisplayItem> {
    timeout(Duration::from_secs(2), async {
        loop {
            {
                let list = rx.borrow_and_update();
                if pred(&list) {
                    return list.clone();
                }
            }
            rx.changed().await.expect("aggregator stopped");
        }
    })
    .await
    .expect("timed out waiting for display list")
}
