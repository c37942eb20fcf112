use crate::actions::{Action, ConfigAction, DebugConsoleAction, WatcherAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Console updates come from the log file itself; logging them would feed back
            Action::DebugConsole(DebugConsoleAction::LinesAppended(_)) => {}
            // High volume, and every relevant line is classified right after
            Action::Watcher(WatcherAction::LineRead(_)) => {}
            // Keep the API key out of the log
            Action::Config(ConfigAction::Applied(config)) => {
                log::debug!(
                    "Action: Config(Applied) log_path={} own_player_name={:?} show_own_name={}",
                    config.log_path,
                    config.own_player_name,
                    config.show_own_name
                );
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
