use async_trait::async_trait;
use merkwort_types::{AdjectiveRecord, NounRecord, VerbWithForms};
use tokio::sync::watch;

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

/// Per-category word storage. The store is the single writer of word
/// records; everything else observes snapshots or goes through these
/// operations.
///
/// Observation channels push a full snapshot on every change; the
/// current snapshot is available immediately on subscription. Inserts
/// with id 0 get a fresh identifier assigned; a non-zero id is kept,
/// overwriting any record already stored under it.
#[async_trait]
pub trait WordStore: Send + Sync {
    fn observe_nouns(&self) -> watch::Receiver<Vec<NounRecord>>;
    fn observe_verbs(&self) -> watch::Receiver<Vec<VerbWithForms>>;
    fn observe_adjectives(&self) -> watch::Receiver<Vec<AdjectiveRecord>>;

    async fn noun_by_id(&self, id: u64) -> Result<Option<NounRecord>, StoreError>;
    async fn verb_by_id(&self, id: u64) -> Result<Option<VerbWithForms>, StoreError>;
    async fn adjective_by_id(&self, id: u64) -> Result<Option<AdjectiveRecord>, StoreError>;

    async fn insert_noun(&self, record: NounRecord) -> Result<u64, StoreError>;
    async fn insert_verb(&self, record: VerbWithForms) -> Result<u64, StoreError>;
    async fn insert_adjective(&self, record: AdjectiveRecord) -> Result<u64, StoreError>;

    async fn delete_noun(&self, id: u64) -> Result<(), StoreError>;
    /// Deletes the verb row only; the paired forms are removed through
    /// [`WordStore::delete_verb_forms`].
    async fn delete_verb(&self, id: u64) -> Result<(), StoreError>;
    async fn delete_verb_forms(&self, id: u64) -> Result<(), StoreError>;
    async fn delete_adjective(&self, id: u64) -> Result<(), StoreError>;
}
