use merkwort_types::{AdjectiveRecord, DisplayItem, NounRecord, VerbWithForms};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{projection, search};

/// The four live inputs of one aggregation pipeline.
pub struct AggregatorInputs {
    pub nouns: watch::Receiver<Vec<NounRecord>>,
    pub verbs: watch::Receiver<Vec<VerbWithForms>>,
    pub adjectives: watch::Receiver<Vec<AdjectiveRecord>>,
    pub query: watch::Receiver<String>,
}

/// Combine-latest loop: recomputes the full display list whenever any
/// input changes and publishes it on `list_tx`. One task per pipeline,
/// so passes never run concurrently; the watch channel gives consumers
/// latest-wins delivery. Exits on cancellation or when either side of
/// the pipeline is gone, publishing nothing afterwards.
pub async fn aggregate_loop(
    mut inputs: AggregatorInputs,
    list_tx: watch::Sender<Vec<DisplayItem>>,
    cancel: CancellationToken,
) {
    loop {
        let list = combine(
            &inputs.nouns.borrow_and_update(),
            &inputs.verbs.borrow_and_update(),
            &inputs.adjectives.borrow_and_update(),
            inputs.query.borrow_and_update().as_str(),
        );
        tracing::debug!(items = list.len(), "aggregation pass");
        if list_tx.send(list).is_err() {
            break;
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            changed = inputs.nouns.changed() => if changed.is_err() { break },
            changed = inputs.verbs.changed() => if changed.is_err() { break },
            changed = inputs.adjectives.changed() => if changed.is_err() { break },
            changed = inputs.query.changed() => if changed.is_err() { break },
        }
    }
    tracing::debug!("aggregator stopping");
}

/// One aggregation pass: project, filter, sort. Ordering is ascending by
/// the raw display word, locale-naive and case-sensitive.
pub fn combine(
    nouns: &[NounRecord],
    verbs: &[VerbWithForms],
    adjectives: &[AdjectiveRecord],
    query: &str,
) -> Vec<DisplayItem> {
    let mut items: Vec<DisplayItem> = nouns
        .iter()
        .map(projection::noun_item)
        .chain(verbs.iter().map(projection::verb_item))
        .chain(adjectives.iter().map(projection::adjective_item))
        .filter(|item| search::matches(item.word(), query))
        .collect();
    items.sort_by(|a, b| a.word().cmp(b.word()));
    items
}
