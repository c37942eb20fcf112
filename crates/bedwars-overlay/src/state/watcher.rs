//! Log Watcher State

use std::path::PathBuf;

/// Lifecycle of the log watcher thread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WatcherStatus {
    #[default]
    Idle,
    Watching,
    /// Opening or reading the file failed; the watcher does not retry
    Failed(String),
}

/// Log watcher state
#[derive(Debug, Clone, Default)]
pub struct WatcherState {
    /// File being watched (or last attempted)
    pub path: Option<PathBuf>,
    pub status: WatcherStatus,
    /// Relevant lines received since the watcher started
    pub lines_seen: usize,
}
