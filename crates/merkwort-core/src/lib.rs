pub mod aggregator;
pub mod deletion;
pub mod error;
pub mod pipeline;
pub mod projection;
pub mod search;

pub use deletion::{DeleteOutcome, DeletionCoordinator};
pub use error::DeleteError;
pub use pipeline::WordListPipeline;

#[cfg(test)]
mod tests;
