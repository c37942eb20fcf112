//! Roster Middleware
//!
//! Classifies every line the watcher reads and turns the resulting lobby
//! event into roster edits. Each added row gets a fresh `EntryId`.

use crate::actions::{Action, RosterAction, WatcherAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{plan_changes, EntryId, RosterChange, SelfIdentity};
use crate::middleware::Middleware;
use crate::state::AppState;
use bedwars_log_parser::classify;

pub struct RosterMiddleware {
    next_id: EntryId,
}

impl RosterMiddleware {
    pub fn new() -> Self {
        Self {
            next_id: EntryId::new(0),
        }
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

impl Default for RosterMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for RosterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Watcher(WatcherAction::LineRead(line)) = action {
            let Some(event) = classify(line) else {
                return true;
            };
            log::debug!("Lobby event: {:?}", event);

            let me = SelfIdentity::from_config(&state.config);
            for change in plan_changes(&state.roster, &event, &me) {
                let roster_action = match change {
                    RosterChange::Clear => RosterAction::Cleared,
                    RosterChange::Add(name) => RosterAction::Added {
                        id: self.allocate_id(),
                        name,
                    },
                    RosterChange::Remove(name) => RosterAction::Removed(name),
                };
                dispatcher.dispatch(Action::Roster(roster_action));
            }
        }
        true
    }
}
