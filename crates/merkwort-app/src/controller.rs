use std::sync::Arc;

use merkwort_core::WordListPipeline;
use merkwort_store::MemoryStore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::commands::{input_loop, list_loop};
use crate::config::Config;

/// Task spawning and lifecycle for one word-list session.
pub struct AppController {
    pipeline: Arc<WordListPipeline>,
    cancel: CancellationToken,
}

impl AppController {
    pub fn new(store: Arc<MemoryStore>, config: &Config) -> Self {
        Self {
            pipeline: Arc::new(WordListPipeline::spawn(store, config.undo_capacity)),
            cancel: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(list_loop(
            self.pipeline.display_list(),
            self.cancel.child_token(),
        ));

        tasks.spawn(input_loop(
            Arc::clone(&self.pipeline),
            self.cancel.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
        self.pipeline.shutdown();
    }
}
