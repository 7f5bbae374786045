use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use merkwort_store::{StoreError, WordStore};
use merkwort_types::{DisplayItem, UndoEvent};

use crate::error::DeleteError;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and an undo event emitted.
    Removed,
    /// The record was already gone; completed as a no-op, no event.
    AlreadyGone,
}

/// Removes a displayed item from storage and offers a one-shot restore.
///
/// Per request: fetch the full record by (category, id), delete it from
/// the store, then emit an [`UndoEvent`] carrying the original record on
/// a bounded queue. A fetch miss finishes silently. Failures are
/// surfaced to the caller, never retried.
pub struct DeletionCoordinator {
    store: Arc<dyn WordStore>,
    undo_tx: AsyncSender<UndoEvent>,
    undo_rx: AsyncReceiver<UndoEvent>,
}

impl DeletionCoordinator {
    pub fn new(store: Arc<dyn WordStore>, undo_capacity: usize) -> Self {
        // Bounded queue, never an overwritable slot: a pending undo
        // opportunity must not be dropped.
        let (undo_tx, undo_rx) = kanal::bounded_async(undo_capacity.max(1));
        Self {
            store,
            undo_tx,
            undo_rx,
        }
    }

    /// Pending undo opportunities. Each event is delivered to exactly
    /// one receiver, once.
    pub fn undo_events(&self) -> AsyncReceiver<UndoEvent> {
        self.undo_rx.clone()
    }

    pub async fn request_delete(&self, item: &DisplayItem) -> Result<DeleteOutcome, DeleteError> {
        match item {
            DisplayItem::Noun { id, .. } => {
                let Some(record) = self.store.noun_by_id(*id).await? else {
                    tracing::debug!(id, "noun already gone, nothing to delete");
                    return Ok(DeleteOutcome::AlreadyGone);
                };
                already_satisfied(self.store.delete_noun(*id).await)?;
                tracing::info!(id, "noun deleted");
                self.emit_undo(UndoEvent::ReturnNoun(record)).await
            }
            DisplayItem::Verb { id, .. } => {
                let Some(record) = self.store.verb_by_id(*id).await? else {
                    tracing::debug!(id, "verb already gone, nothing to delete");
                    return Ok(DeleteOutcome::AlreadyGone);
                };
                already_satisfied(self.store.delete_verb(*id).await)?;
                // The forms share the verb's lifecycle. A half-deleted
                // pair is a consistency error and must reach the caller.
                if let Err(source) = self.store.delete_verb_forms(*id).await
                    && !source.is_not_found()
                {
                    tracing::error!(id, %source, "verb deleted but forms removal failed");
                    return Err(DeleteError::PartialDelete { id: *id, source });
                }
                tracing::info!(id, "verb and forms deleted");
                self.emit_undo(UndoEvent::ReturnVerb(record)).await
            }
            DisplayItem::Adjective { id, .. } => {
                let Some(record) = self.store.adjective_by_id(*id).await? else {
                    tracing::debug!(id, "adjective already gone, nothing to delete");
                    return Ok(DeleteOutcome::AlreadyGone);
                };
                already_satisfied(self.store.delete_adjective(*id).await)?;
                tracing::info!(id, "adjective deleted");
                self.emit_undo(UndoEvent::ReturnAdjective(record)).await
            }
        }
    }

    /// Restore a deleted record from its undo event. Consumes the
    /// one-shot opportunity; the store keeps the original identifier.
    pub async fn accept_undo(&self, event: UndoEvent) -> Result<(), DeleteError> {
        tracing::info!(category = %event.category(), id = event.id(), "undo accepted");
        match event {
            UndoEvent::ReturnNoun(record) => {
                self.store.insert_noun(record).await?;
            }
            UndoEvent::ReturnVerb(record) => {
                self.store.insert_verb(record).await?;
            }
            UndoEvent::ReturnAdjective(record) => {
                self.store.insert_adjective(record).await?;
            }
        }
        Ok(())
    }

    async fn emit_undo(&self, event: UndoEvent) -> Result<DeleteOutcome, DeleteError> {
        self.undo_tx
            .send(event)
            .await
            .map_err(|_| DeleteError::UndoChannelClosed)?;
        Ok(DeleteOutcome::Removed)
    }
}

/// A NotFound from a delete means someone else got there first; the
/// request is already satisfied.
fn already_satisfied(result: Result<(), StoreError>) -> Result<(), DeleteError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}
