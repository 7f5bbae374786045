use merkwort_types::WordCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no {category} record with id {id}")]
    NotFound { category: WordCategory, id: u64 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
