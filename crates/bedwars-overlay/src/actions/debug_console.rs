//! Debug Console actions

#[derive(Debug, Clone)]
pub enum DebugConsoleAction {
    /// Show or hide the console
    Toggle,
    /// Lines appended to our own log file
    LinesAppended(Vec<String>),
    /// Clear all lines from view
    Clear,
}
