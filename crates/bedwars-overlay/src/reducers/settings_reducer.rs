//! Settings Form Reducer
//!
//! Handles state changes for the settings form. Applying the edits is done
//! by the config middleware, which sees the form before it is closed here.

use crate::actions::SettingsAction;
use crate::state::{SettingsField, SettingsFormState};
use bedwars_overlay_config::AppConfig;

pub fn reduce_settings(
    mut state: SettingsFormState,
    action: &SettingsAction,
    config: &AppConfig,
) -> SettingsFormState {
    match action {
        SettingsAction::Open => {
            state = SettingsFormState::open_with(config);
        }
        SettingsAction::Char(c) => {
            if let Some(text) = state.focused_text_mut() {
                text.push(*c);
            }
        }
        SettingsAction::Backspace => {
            if let Some(text) = state.focused_text_mut() {
                text.pop();
            }
        }
        SettingsAction::NextField => {
            state.focused_field = state.focused_field.next();
        }
        SettingsAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }
        SettingsAction::Toggle => {
            if state.focused_field == SettingsField::ShowOwnName {
                state.show_own_name = !state.show_own_name;
            }
        }
        SettingsAction::Confirm | SettingsAction::Cancel => {
            state = SettingsFormState::default();
        }
    }
    state
}
