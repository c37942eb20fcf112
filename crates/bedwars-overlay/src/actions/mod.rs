//! Actions module
//!
//! All actions in the application, tagged by the part of the app they target.
//! Background producers (log watcher, stats lookups, debug console tail) send
//! actions over the app channel; middleware dispatches follow-up actions
//! through the `Dispatcher`.

pub mod config;
pub mod debug_console;
pub mod global;
pub mod roster;
pub mod settings;
pub mod watcher;

pub use config::ConfigAction;
pub use debug_console::DebugConsoleAction;
pub use global::GlobalAction;
pub use roster::RosterAction;
pub use settings::SettingsAction;
pub use watcher::WatcherAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions (quit, raw key presses)
    Global(GlobalAction),
    /// Log watcher lifecycle and the lines it reads
    Watcher(WatcherAction),
    /// Roster edits, stats results and table navigation
    Roster(RosterAction),
    /// Settings form actions
    Settings(SettingsAction),
    /// Configuration changes
    Config(ConfigAction),
    /// Debug Console actions
    DebugConsole(DebugConsoleAction),
}
