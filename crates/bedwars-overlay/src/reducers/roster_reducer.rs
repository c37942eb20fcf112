//! Roster Reducer
//!
//! Applies roster edits and stats results, and keeps the table cursor in
//! bounds.

use crate::actions::RosterAction;
use crate::domain_models::Roster;
use crate::state::RosterViewState;

pub fn reduce_roster(
    mut roster: Roster,
    mut view: RosterViewState,
    action: &RosterAction,
) -> (Roster, RosterViewState) {
    match action {
        RosterAction::Added { id, name } => {
            log::info!("Adding {} to the table", name);
            roster.add(*id, name.clone());
        }
        RosterAction::Removed(name) => {
            if roster.remove(name).is_some() {
                log::info!("Removing {} from the table", name);
            }
        }
        RosterAction::Cleared => {
            if !roster.is_empty() {
                log::info!("Resetting the table");
            }
            roster.clear();
        }
        RosterAction::StatsResolved { id, stats } => {
            if !roster.resolve(*id, stats.clone()) {
                log::debug!("Discarding stale stats result for entry {:?}", id);
            }
        }
        RosterAction::CursorNext => {
            view.cursor = view.cursor.saturating_add(1);
        }
        RosterAction::CursorPrevious => {
            view.cursor = view.cursor.saturating_sub(1);
        }
        RosterAction::CursorToTop => {
            view.cursor = 0;
        }
        RosterAction::CursorToBottom => {
            view.cursor = roster.len().saturating_sub(1);
        }
        RosterAction::CycleSortColumn => {
            view.sort_column = view.sort_column.next();
            view.sort_order = view.sort_column.default_order();
            log::debug!("Sorting by {:?} {:?}", view.sort_column, view.sort_order);
        }
        RosterAction::FlipSortOrder => {
            view.sort_order = view.sort_order.flip();
        }
    }

    view.cursor = view.cursor.min(roster.len().saturating_sub(1));
    (roster, view)
}
