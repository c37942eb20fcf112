//! Debug Console State

/// Lines kept in memory; older ones are dropped first
pub const MAX_CONSOLE_LINES: usize = 1_000;

/// Debug console state
#[derive(Debug, Clone, Default)]
pub struct DebugConsoleState {
    pub visible: bool,
    /// Log lines read from our own log file, oldest first
    pub lines: Vec<String>,
}

impl DebugConsoleState {
    /// Append lines, keeping at most `MAX_CONSOLE_LINES`
    pub fn append_lines(&mut self, new_lines: impl IntoIterator<Item = String>) {
        self.lines.extend(new_lines);
        let overflow = self.lines.len().saturating_sub(MAX_CONSOLE_LINES);
        if overflow > 0 {
            self.lines.drain(..overflow);
        }
    }
}
