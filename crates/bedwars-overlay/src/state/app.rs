//! Application State

use crate::domain_models::Roster;
use bedwars_overlay_config::AppConfig;
use bedwars_overlay_theme::Theme;

use super::{DebugConsoleState, RosterViewState, SettingsFormState, WatcherState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Configuration currently in effect
    pub config: AppConfig,
    pub roster: Roster,
    pub roster_view: RosterViewState,
    pub watcher: WatcherState,
    pub settings: SettingsFormState,
    pub debug_console: DebugConsoleState,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            config,
            roster: Roster::default(),
            roster_view: RosterViewState::default(),
            watcher: WatcherState::default(),
            settings: SettingsFormState::default(),
            debug_console: DebugConsoleState::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
