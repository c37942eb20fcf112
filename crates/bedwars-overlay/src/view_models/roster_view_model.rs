//! View model for the roster table
//!
//! Pre-computes display text, sort order and colours so the view only has
//! to lay things out.

use crate::domain_models::{FetchStatus, RosterEntry};
use crate::state::{AppState, SortColumn, SortOrder, WatcherStatus};
use bedwars_overlay_theme::{fkdr_color, Theme};
use ratatui::style::{Color, Style};
use std::cmp::Ordering;

/// Column titles in display order
pub const COLUMN_TITLES: [&str; 7] = [
    "Username",
    "FKs",
    "FDs",
    "FKDR",
    "Wins",
    "W/L",
    "Beds Broken",
];

/// Index of the FKDR column
pub const FKDR_COLUMN: usize = 3;

/// Placeholder shown in stat cells while a lookup is running
const PENDING_CELL: &str = "…";

/// View model for the entire roster table
#[derive(Debug, Clone)]
pub struct RosterTableViewModel {
    pub header: RosterHeaderViewModel,
    /// Column titles, the sorted one marked with an arrow
    pub column_titles: Vec<String>,
    /// Rows in display order
    pub rows: Vec<RosterRowViewModel>,
    /// Cursor row, `None` when the table is empty
    pub selected_index: Option<usize>,
}

/// View model for the table header
#[derive(Debug, Clone)]
pub struct RosterHeaderViewModel {
    /// Watched file
    pub title: String,
    pub status_text: String,
    pub status_color: Color,
    /// "3 players", plus the sort column when sorted
    pub summary: String,
}

/// View model for a single row
#[derive(Debug, Clone)]
pub struct RosterRowViewModel {
    pub cells: [String; 7],
    pub fkdr_color: Color,
    /// Alternating row style, or the selection style on the cursor row
    pub style: Style,
}

impl RosterTableViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let view = &state.roster_view;

        let entries = sorted_entries(state.roster.entries(), view.sort_column, view.sort_order);
        let selected_index = (!entries.is_empty()).then(|| view.cursor.min(entries.len() - 1));

        let rows = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| build_row(entry, index, selected_index == Some(index), theme))
            .collect();

        Self {
            header: build_header(state),
            column_titles: column_titles(view.sort_column, view.sort_order),
            rows,
            selected_index,
        }
    }
}

fn build_header(state: &AppState) -> RosterHeaderViewModel {
    let theme = &state.theme;
    let title = match &state.watcher.path {
        Some(path) => format!(" {} ", path.display()),
        None => " Bedwars Overlay ".to_string(),
    };

    let (status_text, status_color) = match &state.watcher.status {
        WatcherStatus::Idle => ("Starting…".to_string(), theme.text_muted),
        WatcherStatus::Watching => ("Watching".to_string(), theme.status_success),
        WatcherStatus::Failed(error) => (format!("Failed: {}", error), theme.status_error),
    };

    let players = state.roster.len();
    let mut summary = format!(
        "{} player{}",
        players,
        if players == 1 { "" } else { "s" }
    );
    if let Some(index) = state.roster_view.sort_column.column_index() {
        summary.push_str(&format!(
            ", sorted by {} {}",
            COLUMN_TITLES[index],
            state.roster_view.sort_order.arrow()
        ));
    }

    RosterHeaderViewModel {
        title,
        status_text,
        status_color,
        summary,
    }
}

fn column_titles(column: SortColumn, order: SortOrder) -> Vec<String> {
    COLUMN_TITLES
        .iter()
        .enumerate()
        .map(|(index, title)| {
            if column.column_index() == Some(index) {
                format!("{} {}", title, order.arrow())
            } else {
                title.to_string()
            }
        })
        .collect()
}

fn build_row(entry: &RosterEntry, index: usize, is_cursor: bool, theme: &Theme) -> RosterRowViewModel {
    let (cells, fkdr) = match &entry.status {
        FetchStatus::Resolved(stats) => (stats.display_cells(), fkdr_color(stats.fkdr.value())),
        FetchStatus::Pending => (
            [
                entry.name.clone(),
                PENDING_CELL.to_string(),
                PENDING_CELL.to_string(),
                PENDING_CELL.to_string(),
                PENDING_CELL.to_string(),
                PENDING_CELL.to_string(),
                PENDING_CELL.to_string(),
            ],
            theme.text_muted,
        ),
        FetchStatus::Failed => (
            [
                entry.name.clone(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            fkdr_color(None),
        ),
    };

    let style = if is_cursor {
        Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
    } else {
        theme.table_row(index)
    };

    RosterRowViewModel {
        cells,
        fkdr_color: fkdr,
        style,
    }
}

/// Entries in display order
///
/// Rows without a value for the sort column go last in either direction;
/// ties keep insertion order.
fn sorted_entries(entries: &[RosterEntry], column: SortColumn, order: SortOrder) -> Vec<&RosterEntry> {
    let mut sorted: Vec<&RosterEntry> = entries.iter().collect();

    match column {
        SortColumn::Added => {
            if order == SortOrder::Descending {
                sorted.reverse();
            }
        }
        SortColumn::Name => {
            sorted.sort_by(|a, b| {
                let ordering = a.name.to_lowercase().cmp(&b.name.to_lowercase());
                apply_order(ordering, order)
            });
        }
        _ => {
            sorted.sort_by(|a, b| match (sort_value(a, column), sort_value(b, column)) {
                (Some(a), Some(b)) => apply_order(a.partial_cmp(&b).unwrap_or(Ordering::Equal), order),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }

    sorted
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Numeric value of `column` for a row, `None` when unknown or not loaded
fn sort_value(entry: &RosterEntry, column: SortColumn) -> Option<f64> {
    let FetchStatus::Resolved(stats) = &entry.status else {
        return None;
    };
    let counter = |stat: bedwars_stats_client::Stat| stat.value().map(|v| v as f64);

    match column {
        SortColumn::FinalKills => counter(stats.final_kills),
        SortColumn::FinalDeaths => counter(stats.final_deaths),
        SortColumn::Fkdr => stats.fkdr.value(),
        SortColumn::Wins => counter(stats.wins),
        SortColumn::Wlr => stats.wlr.value(),
        SortColumn::BedsBroken => counter(stats.beds_broken),
        SortColumn::Added | SortColumn::Name => None,
    }
}
