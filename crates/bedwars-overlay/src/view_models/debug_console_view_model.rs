//! View model for the debug console

use crate::state::DebugConsoleState;

/// Severity parsed from a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Find the `[LEVEL]` tag simplelog writes after the timestamp
    ///
    /// The closing bracket is not matched, so padded tags like `[INFO ]` count.
    pub fn detect(line: &str) -> Option<Self> {
        const TAGS: [(&str, LogLevel); 5] = [
            ("[ERROR", LogLevel::Error),
            ("[WARN", LogLevel::Warn),
            ("[INFO", LogLevel::Info),
            ("[DEBUG", LogLevel::Debug),
            ("[TRACE", LogLevel::Trace),
        ];
        TAGS.iter()
            .filter_map(|(tag, level)| line.find(tag).map(|pos| (pos, *level)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, level)| level)
    }
}

/// Lines that fit the console, newest at the bottom
#[derive(Debug, Clone)]
pub struct DebugConsoleViewModel<'a> {
    pub lines: Vec<(Option<LogLevel>, &'a str)>,
}

impl<'a> DebugConsoleViewModel<'a> {
    pub fn from_state(state: &'a DebugConsoleState, visible_rows: usize) -> Self {
        let start = state.lines.len().saturating_sub(visible_rows);
        let lines = state.lines[start..]
            .iter()
            .map(|line| (LogLevel::detect(line), line.as_str()))
            .collect();
        Self { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_level() {
        assert_eq!(
            LogLevel::detect("2024-05-01T10:00:00+02:00 [WARN] bedwars_overlay: slow"),
            Some(LogLevel::Warn)
        );
        assert_eq!(LogLevel::detect("[ERROR] boom"), Some(LogLevel::Error));
        assert_eq!(LogLevel::detect("10:00:00 [INFO ] padded"), Some(LogLevel::Info));
        assert_eq!(LogLevel::detect("continuation line"), None);
    }

    #[test]
    fn test_first_tag_wins() {
        assert_eq!(
            LogLevel::detect("[INFO] message mentioning [ERROR]"),
            Some(LogLevel::Info)
        );
    }

    #[test]
    fn test_only_newest_lines_fit() {
        let state = DebugConsoleState {
            visible: true,
            lines: vec!["a".into(), "b".into(), "c".into()],
        };
        let vm = DebugConsoleViewModel::from_state(&state, 2);
        assert_eq!(vm.lines, vec![(None, "b"), (None, "c")]);
    }
}
