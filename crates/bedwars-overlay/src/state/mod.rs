//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod debug_console;
mod roster_view;
mod settings;
mod watcher;

pub use app::AppState;
pub use debug_console::DebugConsoleState;
pub use roster_view::{RosterViewState, SortColumn, SortOrder};
pub use settings::{SettingsField, SettingsFormState};
pub use watcher::{WatcherState, WatcherStatus};
