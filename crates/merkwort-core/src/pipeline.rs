use std::sync::Arc;

use kanal::AsyncReceiver;
use merkwort_store::WordStore;
use merkwort_types::{DisplayItem, UndoEvent};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::aggregator::{self, AggregatorInputs};
use crate::deletion::{DeleteOutcome, DeletionCoordinator};
use crate::error::DeleteError;

/// One word-list view: owns the aggregation task and the deletion
/// coordinator over a shared store handle.
pub struct WordListPipeline {
    coordinator: DeletionCoordinator,
    query_tx: watch::Sender<String>,
    list_rx: watch::Receiver<Vec<DisplayItem>>,
    cancel: CancellationToken,
}

impl WordListPipeline {
    /// Spawn the combine-latest task over the store's live collections.
    /// The pipeline starts with an empty search query.
    pub fn spawn(store: Arc<dyn WordStore>, undo_capacity: usize) -> Self {
        let (query_tx, query_rx) = watch::channel(String::new());
        let (list_tx, list_rx) = watch::channel(Vec::new());
        let cancel = CancellationToken::new();

        let inputs = AggregatorInputs {
            nouns: store.observe_nouns(),
            verbs: store.observe_verbs(),
            adjectives: store.observe_adjectives(),
            query: query_rx,
        };
        tokio::spawn(aggregator::aggregate_loop(
            inputs,
            list_tx,
            cancel.child_token(),
        ));
        tracing::info!("word list pipeline started");

        Self {
            coordinator: DeletionCoordinator::new(store, undo_capacity),
            query_tx,
            list_rx,
            cancel,
        }
    }

    /// Live, sorted, filtered display list. Consumers always observe the
    /// latest value; intermediate results may be skipped.
    pub fn display_list(&self) -> watch::Receiver<Vec<DisplayItem>> {
        self.list_rx.clone()
    }

    /// Replace the active search query. Triggers a recomputation.
    pub fn set_search_query(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!(query = %text, "search query updated");
        let _ = self.query_tx.send(text);
    }

    pub async fn request_delete(&self, item: &DisplayItem) -> Result<DeleteOutcome, DeleteError> {
        tracing::info!(category = %item.category(), id = item.id(), "delete requested");
        self.coordinator.request_delete(item).await
    }

    /// Pending undo opportunities, consume-once.
    pub fn undo_events(&self) -> AsyncReceiver<UndoEvent> {
        self.coordinator.undo_events()
    }

    pub async fn accept_undo(&self, event: UndoEvent) -> Result<(), DeleteError> {
        self.coordinator.accept_undo(event).await
    }

    /// Tear the pipeline down. The aggregation task stops and publishes
    /// nothing afterwards.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for WordListPipeline {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
