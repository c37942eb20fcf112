//! Log watcher actions

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum WatcherAction {
    /// Start watching the configured log file
    Start,
    /// The file was opened; lines appended from now on are reported
    Started(PathBuf),
    /// A relevant line was appended to the watched file
    LineRead(String),
    /// Opening or reading the file failed; watching has stopped
    Failed { path: PathBuf, error: String },
}
