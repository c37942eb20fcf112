use crate::actions::{Action, ConfigAction, GlobalAction};
use crate::reducers::{
    debug_console_reducer, roster_reducer, settings_reducer, watcher_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // Translated by the keyboard middleware
        }
        Action::Watcher(watcher_action) => {
            state.watcher =
                watcher_reducer::reduce_watcher(state.watcher, watcher_action, &state.config);
        }
        Action::Roster(roster_action) => {
            let (roster, roster_view) =
                roster_reducer::reduce_roster(state.roster, state.roster_view, roster_action);
            state.roster = roster;
            state.roster_view = roster_view;
        }
        Action::Settings(settings_action) => {
            state.settings =
                settings_reducer::reduce_settings(state.settings, settings_action, &state.config);
        }
        Action::Config(ConfigAction::Applied(config)) => {
            log::info!("Applying new configuration");
            state.config = config.clone();
        }
        Action::DebugConsole(console_action) => {
            state.debug_console =
                debug_console_reducer::reduce_debug_console(state.debug_console, console_action);
        }
    }
    state
}
