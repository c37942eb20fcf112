//! Settings Form State

use bedwars_overlay_config::AppConfig;

/// Form field for the settings dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    ApiKey,
    LogPath,
    OwnName,
    ShowOwnName,
}

impl SettingsField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::ApiKey => Self::LogPath,
            Self::LogPath => Self::OwnName,
            Self::OwnName => Self::ShowOwnName,
            Self::ShowOwnName => Self::ApiKey,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::ApiKey => Self::ShowOwnName,
            Self::LogPath => Self::ApiKey,
            Self::OwnName => Self::LogPath,
            Self::ShowOwnName => Self::OwnName,
        }
    }

    /// Whether the field takes typed text (the rest are toggles)
    pub fn is_text(self) -> bool {
        !matches!(self, Self::ShowOwnName)
    }
}

/// State for the settings form
///
/// Holds edits until they are applied; the config in `AppState` stays
/// untouched while the form is open.
#[derive(Debug, Clone, Default)]
pub struct SettingsFormState {
    pub visible: bool,
    pub api_key: String,
    pub log_path: String,
    pub own_player_name: String,
    pub show_own_name: bool,
    pub focused_field: SettingsField,
}

impl SettingsFormState {
    /// Open the form pre-filled with `config`
    pub fn open_with(config: &AppConfig) -> Self {
        Self {
            visible: true,
            api_key: config.api_key.clone(),
            log_path: config.log_path.clone(),
            own_player_name: config.own_player_name.clone(),
            show_own_name: config.show_own_name,
            focused_field: SettingsField::default(),
        }
    }

    /// Text buffer of the focused field, if it is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            SettingsField::ApiKey => Some(&mut self.api_key),
            SettingsField::LogPath => Some(&mut self.log_path),
            SettingsField::OwnName => Some(&mut self.own_player_name),
            SettingsField::ShowOwnName => None,
        }
    }

    /// Merge the edited values into `base`
    ///
    /// Surrounding whitespace is trimmed; fields the form does not edit are
    /// taken from `base`.
    pub fn to_config(&self, base: &AppConfig) -> AppConfig {
        AppConfig {
            api_key: self.api_key.trim().to_string(),
            log_path: self.log_path.trim().to_string(),
            own_player_name: self.own_player_name.trim().to_string(),
            show_own_name: self.show_own_name,
            ..base.clone()
        }
    }
}
