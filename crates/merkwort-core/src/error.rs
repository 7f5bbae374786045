use merkwort_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeleteError {
    /// The verb row was removed but its paired forms were not. The store
    /// now holds an orphaned half; callers must surface this.
    #[error("verb {id} deleted but its forms were not: {source}")]
    PartialDelete { id: u64, source: StoreError },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("undo channel closed, event would be lost")]
    UndoChannelClosed,
}
