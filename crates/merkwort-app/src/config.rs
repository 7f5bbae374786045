use std::env;

/// Runtime configuration, read once from the environment.
pub struct Config {
    /// Capacity of the undo notification queue. Minimum 1; pending undo
    /// opportunities are queued, never overwritten.
    pub undo_capacity: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let undo_capacity = env::var("UNDO_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8); // a handful of stacked snackbars

        Self { undo_capacity }
    }
}
