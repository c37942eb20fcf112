//! App Config Middleware
//!
//! Applies the settings form: builds the new configuration from the form,
//! persists it and announces it with `Config::Applied`.

use crate::actions::{Action, ConfigAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Result;
use bedwars_overlay_config::AppConfig;
use std::path::PathBuf;

/// Middleware for applying and saving application configuration
pub struct AppConfigMiddleware {
    /// Fixed save location; `None` uses the file the config is loaded from
    config_path: Option<PathBuf>,
}

impl AppConfigMiddleware {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Save to `path` instead of the default config location
    #[cfg(test)]
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    fn persist(&self, config: &AppConfig) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => {
                config.save_to(path)?;
                Ok(path.clone())
            }
            None => config.save(),
        }
    }
}

impl Default for AppConfigMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AppConfigMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Settings(SettingsAction::Confirm) if state.settings.visible => {
                let new_config = state.settings.to_config(&state.config);
                if new_config == state.config {
                    log::debug!("AppConfigMiddleware: Settings unchanged");
                    return true;
                }

                // A failed save still applies the config for this session
                match self.persist(&new_config) {
                    Ok(path) => log::info!("AppConfigMiddleware: Saved config to {}", path.display()),
                    Err(e) => log::error!("AppConfigMiddleware: Failed to save config: {:#}", e),
                }
                dispatcher.dispatch(Action::Config(ConfigAction::Applied(new_config)));
                true
            }
            _ => true, // All other actions pass through
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SettingsFormState;

    fn state_with_form(edit: impl FnOnce(&mut SettingsFormState)) -> AppState {
        let mut state = AppState::default();
        state.settings = SettingsFormState::open_with(&state.config);
        edit(&mut state.settings);
        state
    }

    #[test]
    fn test_confirm_saves_and_applies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut middleware = AppConfigMiddleware::with_config_path(&path);
        let dispatcher = Dispatcher::new();
        let state = state_with_form(|form| form.own_player_name = "Steve".to_string());

        middleware.handle(&Action::Settings(SettingsAction::Confirm), &state, &dispatcher);

        match dispatcher.drain().as_slice() {
            [Action::Config(ConfigAction::Applied(config))] => {
                assert_eq!(config.own_player_name, "Steve");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("own_player_name = \"Steve\""));
    }

    #[test]
    fn test_unchanged_settings_are_not_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut middleware = AppConfigMiddleware::with_config_path(&path);
        let dispatcher = Dispatcher::new();
        let state = state_with_form(|_| {});

        middleware.handle(&Action::Settings(SettingsAction::Confirm), &state, &dispatcher);

        assert!(dispatcher.drain().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_save_still_applies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("config.toml");
        let mut middleware = AppConfigMiddleware::with_config_path(&path);
        let dispatcher = Dispatcher::new();
        let state = state_with_form(|form| form.api_key = "k".to_string());

        middleware.handle(&Action::Settings(SettingsAction::Confirm), &state, &dispatcher);

        assert_eq!(dispatcher.drain().len(), 1);
    }
}
