//! Lobby roster
//!
//! The ordered list of players currently shown in the table, plus the pure
//! decision function that turns a classified log line into roster changes.

use bedwars_log_parser::LineEvent;
use bedwars_overlay_config::AppConfig;
use bedwars_stats_client::PlayerStats;
use std::collections::HashSet;

/// Identity of a roster row, unique for the lifetime of the process
///
/// Fetch results carry the id of the row they were started for, so a result
/// that arrives after its row was removed can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Where a row's stats lookup stands
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Pending,
    Resolved(PlayerStats),
    /// Lookup gave up; the row shows the name only
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: EntryId,
    pub name: String,
    pub status: FetchStatus,
}

/// Players in the lobby, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Append a pending row
    pub fn add(&mut self, id: EntryId, name: impl Into<String>) {
        self.entries.push(RosterEntry {
            id,
            name: name.into(),
            status: FetchStatus::Pending,
        });
    }

    /// Remove the first row with `name`
    pub fn remove(&mut self, name: &str) -> Option<RosterEntry> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply a finished lookup to the row it was started for
    ///
    /// Returns false when the row is gone, in which case nothing changes.
    pub fn resolve(&mut self, id: EntryId, stats: Option<PlayerStats>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.status = match stats {
                    Some(stats) => FetchStatus::Resolved(stats),
                    None => FetchStatus::Failed,
                };
                true
            }
            None => false,
        }
    }
}

/// Who "you" are, as far as the roster is concerned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfIdentity {
    pub name: String,
    pub show_in_table: bool,
}

impl SelfIdentity {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            name: config.own_player_name.clone(),
            show_in_table: config.show_own_name,
        }
    }

    /// An empty configured name never matches
    pub fn is_self(&self, name: &str) -> bool {
        !self.name.is_empty() && self.name == name
    }

    fn hides(&self, name: &str) -> bool {
        !self.show_in_table && self.is_self(name)
    }
}

/// A single edit to the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    Clear,
    Add(String),
    Remove(String),
}

/// Decide how a classified log line changes the roster
///
/// Changes are meant to be applied in order. Adds are never planned for a
/// name that is already listed or for yourself while your name is hidden.
pub fn plan_changes(roster: &Roster, event: &LineEvent, me: &SelfIdentity) -> Vec<RosterChange> {
    match event {
        LineEvent::Joined(name) if me.is_self(name) => {
            let mut changes = vec![RosterChange::Clear];
            if !me.hides(name) {
                changes.push(RosterChange::Add(name.clone()));
            }
            changes
        }
        LineEvent::Joined(name) => {
            if roster.contains(name) {
                Vec::new()
            } else {
                vec![RosterChange::Add(name.clone())]
            }
        }
        LineEvent::Quit(name) => {
            if roster.contains(name) {
                vec![RosterChange::Remove(name.clone())]
            } else {
                Vec::new()
            }
        }
        LineEvent::Roster(names) => {
            let mut listed: HashSet<&str> = roster.names().into_iter().collect();
            names
                .iter()
                .filter(|name| !me.hides(name))
                .filter(|name| listed.insert(name.as_str()))
                .map(|name| RosterChange::Add(name.clone()))
                .collect()
        }
    }
}
