//! Roster actions

use crate::domain_models::EntryId;
use bedwars_stats_client::PlayerStats;

#[derive(Debug, Clone)]
pub enum RosterAction {
    // Roster edits (planned from log lines)
    /// A player was added; a stats lookup is started for the row
    Added { id: EntryId, name: String },
    /// A player left the lobby
    Removed(String),
    /// Every row was dropped (own join or manual clear)
    Cleared,
    /// A stats lookup finished; `None` means it failed
    StatsResolved {
        id: EntryId,
        stats: Option<PlayerStats>,
    },

    // Table navigation
    CursorNext,
    CursorPrevious,
    CursorToTop,
    CursorToBottom,
    /// Sort by the next column
    CycleSortColumn,
    /// Flip ascending/descending
    FlipSortOrder,
}
