//! Chat line classification
//!
//! Three rules are tried in a fixed order (join, quit, roster) and only the
//! first match produces an event.

use crate::types::LineEvent;
use regex::Regex;
use std::sync::OnceLock;

/// Marker every chat line carries; used as the cheap relevance filter
pub const CHAT_MARKER: &str = "[CHAT]";

/// `[HH:MM:SS] [<thread> thread/INFO]: [CHAT] `
const CHAT_PREFIX: &str = r"\[\d{2}:\d{2}:\d{2}\] \[.*? thread/INFO\]: \[CHAT\] ";

/// Minecraft usernames: letters, digits and underscore
const NAME: &str = r"[A-Za-z0-9_]+";

fn join_regex() -> &'static Regex {
    static JOIN_REGEX: OnceLock<Regex> = OnceLock::new();
    JOIN_REGEX.get_or_init(|| {
        // Trailing "(3/8)!" metadata is optional and ignored
        Regex::new(&format!(r"{CHAT_PREFIX}({NAME}) has joined(?: \(.*\))?"))
            .expect("join pattern is valid")
    })
}

fn quit_regex() -> &'static Regex {
    static QUIT_REGEX: OnceLock<Regex> = OnceLock::new();
    QUIT_REGEX.get_or_init(|| {
        Regex::new(&format!(r"{CHAT_PREFIX}({NAME}) has quit!")).expect("quit pattern is valid")
    })
}

fn roster_regex() -> &'static Regex {
    static ROSTER_REGEX: OnceLock<Regex> = OnceLock::new();
    ROSTER_REGEX.get_or_init(|| {
        Regex::new(&format!(r"{CHAT_PREFIX}ONLINE: ((?:{NAME}, )*{NAME})"))
            .expect("roster pattern is valid")
    })
}

/// Classify a single log line
///
/// Returns `None` for every line that is not a join, quit or roster line.
pub fn classify(line: &str) -> Option<LineEvent> {
    if let Some(captures) = join_regex().captures(line) {
        let name = captures.get(1)?.as_str().to_string();
        log::trace!("classified join: {}", name);
        return Some(LineEvent::Joined(name));
    }

    if let Some(captures) = quit_regex().captures(line) {
        let name = captures.get(1)?.as_str().to_string();
        log::trace!("classified quit: {}", name);
        return Some(LineEvent::Quit(name));
    }

    if let Some(captures) = roster_regex().captures(line) {
        let names: Vec<String> = captures
            .get(1)?
            .as_str()
            .split(", ")
            .map(str::to_string)
            .collect();
        log::trace!("classified roster snapshot with {} names", names.len());
        return Some(LineEvent::Roster(names));
    }

    None
}

/// Relevance filter applied before lines are forwarded for classification
///
/// Only chat lines can ever classify, so everything else is noise.
pub fn is_relevant(line: &str) -> bool {
    line.contains(CHAT_MARKER)
}
