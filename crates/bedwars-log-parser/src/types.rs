//! Type definitions for classified log lines

/// A lobby event extracted from a single log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A player joined the lobby
    Joined(String),
    /// A player left the lobby
    Quit(String),
    /// Everyone currently present, in the order the client listed them
    Roster(Vec<String>),
}
