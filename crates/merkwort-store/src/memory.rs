use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use merkwort_types::{AdjectiveRecord, NounRecord, VerbForms, VerbRecord, VerbWithForms, WordCategory};
use tokio::sync::{RwLock, watch};

use crate::{StoreError, WordStore};

/// In-process reference implementation of [`WordStore`].
///
/// Identifier-preserving: inserting a record with a non-zero id keeps
/// that id, so an undo reinsertion restores the original identity.
/// Lock order is always verbs before verb_forms.
pub struct MemoryStore {
    next_id: AtomicU64,
    nouns: RwLock<BTreeMap<u64, NounRecord>>,
    verbs: RwLock<BTreeMap<u64, VerbRecord>>,
    verb_forms: RwLock<BTreeMap<u64, VerbForms>>,
    adjectives: RwLock<BTreeMap<u64, AdjectiveRecord>>,
    noun_tx: watch::Sender<Vec<NounRecord>>,
    verb_tx: watch::Sender<Vec<VerbWithForms>>,
    adjective_tx: watch::Sender<Vec<AdjectiveRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            nouns: RwLock::new(BTreeMap::new()),
            verbs: RwLock::new(BTreeMap::new()),
            verb_forms: RwLock::new(BTreeMap::new()),
            adjectives: RwLock::new(BTreeMap::new()),
            noun_tx: watch::Sender::new(Vec::new()),
            verb_tx: watch::Sender::new(Vec::new()),
            adjective_tx: watch::Sender::new(Vec::new()),
        }
    }

    fn claim_id(&self, requested: u64) -> u64 {
        if requested == 0 {
            self.next_id.fetch_add(1, Ordering::Relaxed)
        } else {
            // Keep the counter ahead of explicitly supplied ids.
            self.next_id.fetch_max(requested + 1, Ordering::Relaxed);
            requested
        }
    }

    /// Verbs are published joined with their forms; a half without its
    /// counterpart is not displayable and stays out of the snapshot.
    fn joined_verbs(
        verbs: &BTreeMap<u64, VerbRecord>,
        forms: &BTreeMap<u64, VerbForms>,
    ) -> Vec<VerbWithForms> {
        verbs
            .values()
            .filter_map(|verb| {
                forms.get(&verb.id).map(|forms| VerbWithForms {
                    verb: verb.clone(),
                    forms: forms.clone(),
                })
            })
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    fn observe_nouns(&self) -> watch::Receiver<Vec<NounRecord>> {
        self.noun_tx.subscribe()
    }

    fn observe_verbs(&self) -> watch::Receiver<Vec<VerbWithForms>> {
        self.verb_tx.subscribe()
    }

    fn observe_adjectives(&self) -> watch::Receiver<Vec<AdjectiveRecord>> {
        self.adjective_tx.subscribe()
    }

    async fn noun_by_id(&self, id: u64) -> Result<Option<NounRecord>, StoreError> {
        Ok(self.nouns.read().await.get(&id).cloned())
    }

    async fn verb_by_id(&self, id: u64) -> Result<Option<VerbWithForms>, StoreError> {
        let verbs = self.verbs.read().await;
        let forms = self.verb_forms.read().await;
        let joined = verbs.get(&id).and_then(|verb| {
            forms.get(&id).map(|forms| VerbWithForms {
                verb: verb.clone(),
                forms: forms.clone(),
            })
        });
        Ok(joined)
    }

    async fn adjective_by_id(&self, id: u64) -> Result<Option<AdjectiveRecord>, StoreError> {
        Ok(self.adjectives.read().await.get(&id).cloned())
    }

    async fn insert_noun(&self, mut record: NounRecord) -> Result<u64, StoreError> {
        let mut nouns = self.nouns.write().await;
        record.id = self.claim_id(record.id);
        let id = record.id;
        nouns.insert(id, record);
        self.noun_tx.send_replace(nouns.values().cloned().collect());
        tracing::debug!(id, "noun inserted");
        Ok(id)
    }

    async fn insert_verb(&self, mut record: VerbWithForms) -> Result<u64, StoreError> {
        let mut verbs = self.verbs.write().await;
        let mut forms = self.verb_forms.write().await;
        record.verb.id = self.claim_id(record.verb.id);
        let id = record.verb.id;
        record.forms.verb_id = id;
        verbs.insert(id, record.verb);
        forms.insert(id, record.forms);
        self.verb_tx.send_replace(Self::joined_verbs(&verbs, &forms));
        tracing::debug!(id, "verb inserted");
        Ok(id)
    }

    async fn insert_adjective(&self, mut record: AdjectiveRecord) -> Result<u64, StoreError> {
        let mut adjectives = self.adjectives.write().await;
        record.id = self.claim_id(record.id);
        let id = record.id;
        adjectives.insert(id, record);
        self.adjective_tx
            .send_replace(adjectives.values().cloned().collect());
        tracing::debug!(id, "adjective inserted");
        Ok(id)
    }

    async fn delete_noun(&self, id: u64) -> Result<(), StoreError> {
        let mut nouns = self.nouns.write().await;
        if nouns.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                category: WordCategory::Noun,
                id,
            });
        }
        self.noun_tx.send_replace(nouns.values().cloned().collect());
        tracing::debug!(id, "noun deleted");
        Ok(())
    }

    async fn delete_verb(&self, id: u64) -> Result<(), StoreError> {
        let mut verbs = self.verbs.write().await;
        let forms = self.verb_forms.read().await;
        if verbs.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                category: WordCategory::Verb,
                id,
            });
        }
        self.verb_tx.send_replace(Self::joined_verbs(&verbs, &forms));
        tracing::debug!(id, "verb deleted");
        Ok(())
    }

    async fn delete_verb_forms(&self, id: u64) -> Result<(), StoreError> {
        let verbs = self.verbs.read().await;
        let mut forms = self.verb_forms.write().await;
        if forms.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                category: WordCategory::Verb,
                id,
            });
        }
        self.verb_tx.send_replace(Self::joined_verbs(&verbs, &forms));
        tracing::debug!(id, "verb forms deleted");
        Ok(())
    }

    async fn delete_adjective(&self, id: u64) -> Result<(), StoreError> {
        let mut adjectives = self.adjectives.write().await;
        if adjectives.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                category: WordCategory::Adjective,
                id,
            });
        }
        self.adjective_tx
            .send_replace(adjectives.values().cloned().collect());
        tracing::debug!(id, "adjective deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use merkwort_types::Gender;

    use super::*;

    fn noun(id: u64, word: &str) -> NounRecord {
        NounRecord {
            id,
            word: Some(word.to_string()),
            plural: None,
            translation: String::new(),
            gender: Gender::Der,
        }
    }

    fn verb(id: u64, word: &str) -> VerbWithForms {
        VerbWithForms {
            verb: VerbRecord {
                id,
                word: word.to_string(),
                translation: String::new(),
            },
            forms: VerbForms {
                verb_id: id,
                praeteritum_sie: None,
                perfekt: None,
            },
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let store = MemoryStore::new();
        let first = store.insert_noun(noun(0, "Hund")).await.unwrap();
        let second = store.insert_noun(noun(0, "Katze")).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn insert_preserves_explicit_id() {
        let store = MemoryStore::new();
        let id = store.insert_noun(noun(42, "Hund")).await.unwrap();
        assert_eq!(id, 42);
        // Counter must not hand the preserved id out again.
        let next = store.insert_noun(noun(0, "Katze")).await.unwrap();
        assert!(next > 42);
    }

    #[tokio::test]
    async fn observe_pushes_snapshot_on_change() {
        let store = MemoryStore::new();
        let mut rx = store.observe_nouns();
        assert!(rx.borrow_and_update().is_empty());

        store.insert_noun(noun(0, "Hund")).await.unwrap();
        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].word.as_deref(), Some("Hund"));
    }

    #[tokio::test]
    async fn delete_missing_noun_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_noun(7).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn verb_snapshot_requires_both_halves() {
        let store = MemoryStore::new();
        let id = store.insert_verb(verb(0, "gehen")).await.unwrap();

        let mut rx = store.observe_verbs();
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.delete_verb_forms(id).await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());

        // The orphaned verb half no longer joins either.
        assert!(store.verb_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reinsert_with_same_id_overwrites() {
        let store = MemoryStore::new();
        let id = store.insert_noun(noun(0, "Hund")).await.unwrap();
        store.insert_noun(noun(id, "Hündin")).await.unwrap();

        let stored = store.noun_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.word.as_deref(), Some("Hündin"));
        assert_eq!(store.observe_nouns().borrow().len(), 1);
    }
}
