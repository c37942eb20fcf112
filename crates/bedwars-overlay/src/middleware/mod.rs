use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod app_config_middleware;
pub mod debug_console_middleware;
pub mod keyboard_middleware;
pub mod log_watcher_middleware;
pub mod logging;
pub mod roster_middleware;
pub mod stats_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the main thread, so anything slow (file polling, HTTP)
/// is handed to a thread or task that reports back over the app channel.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
