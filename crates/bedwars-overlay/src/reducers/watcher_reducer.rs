//! Log Watcher Reducer

use crate::actions::WatcherAction;
use crate::state::{WatcherState, WatcherStatus};
use bedwars_overlay_config::AppConfig;

pub fn reduce_watcher(
    mut state: WatcherState,
    action: &WatcherAction,
    config: &AppConfig,
) -> WatcherState {
    match action {
        WatcherAction::Start => {
            state.path = Some(config.log_path());
            state.status = WatcherStatus::Idle;
            state.lines_seen = 0;
        }
        WatcherAction::Started(path) => {
            state.path = Some(path.clone());
            state.status = WatcherStatus::Watching;
        }
        WatcherAction::LineRead(_) => {
            state.lines_seen += 1;
        }
        WatcherAction::Failed { path, error } => {
            state.path = Some(path.clone());
            state.status = WatcherStatus::Failed(error.clone());
        }
    }
    state
}
