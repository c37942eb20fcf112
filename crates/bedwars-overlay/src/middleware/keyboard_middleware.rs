//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! Keys are routed by what currently has focus:
//! 1. Ctrl+C always quits
//! 2. The settings form takes text input while it is open
//! 3. The debug console, while visible
//! 4. Otherwise the roster table

use crate::actions::{
    Action, DebugConsoleAction, GlobalAction, RosterAction, SettingsAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, SettingsField};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                if let Some(translated) = translate_key(*key, state) {
                    dispatcher.dispatch(translated);
                }
                // Raw key events never reach the reducer
                false
            }
            _ => true,
        }
    }
}

/// Map a key press to the action it means in the current state
pub fn translate_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        log::debug!("Ctrl+C - dispatching Quit");
        return Some(Action::Global(GlobalAction::Quit));
    }

    if state.settings.visible {
        return translate_settings_key(key, state.settings.focused_field).map(Action::Settings);
    }

    if state.debug_console.visible {
        let console_action = match key.code {
            KeyCode::Char('`') | KeyCode::Char('q') | KeyCode::Esc => DebugConsoleAction::Toggle,
            KeyCode::Char('c') => DebugConsoleAction::Clear,
            _ => return None,
        };
        return Some(Action::DebugConsole(console_action));
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
        KeyCode::Char(',') => Action::Settings(SettingsAction::Open),
        KeyCode::Char('`') => Action::DebugConsole(DebugConsoleAction::Toggle),
        KeyCode::Char('j') | KeyCode::Down => Action::Roster(RosterAction::CursorNext),
        KeyCode::Char('k') | KeyCode::Up => Action::Roster(RosterAction::CursorPrevious),
        KeyCode::Char('g') | KeyCode::Home => Action::Roster(RosterAction::CursorToTop),
        KeyCode::Char('G') | KeyCode::End => Action::Roster(RosterAction::CursorToBottom),
        KeyCode::Char('s') => Action::Roster(RosterAction::CycleSortColumn),
        KeyCode::Char('S') => Action::Roster(RosterAction::FlipSortOrder),
        KeyCode::Char('x') => Action::Roster(RosterAction::Cleared),
        _ => return None,
    };
    Some(action)
}

fn translate_settings_key(key: KeyEvent, focused: SettingsField) -> Option<SettingsAction> {
    let action = match key.code {
        KeyCode::Esc => SettingsAction::Cancel,
        KeyCode::Enter => SettingsAction::Confirm,
        KeyCode::BackTab => SettingsAction::PrevField,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => SettingsAction::PrevField,
        KeyCode::Tab | KeyCode::Down => SettingsAction::NextField,
        KeyCode::Up => SettingsAction::PrevField,
        KeyCode::Backspace => SettingsAction::Backspace,
        KeyCode::Char(' ') if !focused.is_text() => SettingsAction::Toggle,
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            SettingsAction::Char(c)
        }
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SettingsFormState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn settings_open(field: SettingsField) -> AppState {
        let mut state = AppState::default();
        state.settings = SettingsFormState {
            visible: true,
            focused_field: field,
            ..SettingsFormState::default()
        };
        state
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let state = settings_open(SettingsField::ApiKey);
        assert!(matches!(
            translate_key(ctrl_c, &state),
            Some(Action::Global(GlobalAction::Quit))
        ));
    }

    #[test]
    fn test_table_keys() {
        let state = AppState::default();
        assert!(matches!(
            translate_key(key(KeyCode::Char('q')), &state),
            Some(Action::Global(GlobalAction::Quit))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char(',')), &state),
            Some(Action::Settings(SettingsAction::Open))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Down), &state),
            Some(Action::Roster(RosterAction::CursorNext))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('x')), &state),
            Some(Action::Roster(RosterAction::Cleared))
        ));
        assert!(translate_key(key(KeyCode::Char('z')), &state).is_none());
    }

    #[test]
    fn test_settings_form_takes_text() {
        let state = settings_open(SettingsField::OwnName);
        assert!(matches!(
            translate_key(key(KeyCode::Char('q')), &state),
            Some(Action::Settings(SettingsAction::Char('q')))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char(' ')), &state),
            Some(Action::Settings(SettingsAction::Char(' ')))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Enter), &state),
            Some(Action::Settings(SettingsAction::Confirm))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Esc), &state),
            Some(Action::Settings(SettingsAction::Cancel))
        ));
    }

    #[test]
    fn test_space_toggles_checkbox_field() {
        let state = settings_open(SettingsField::ShowOwnName);
        assert!(matches!(
            translate_key(key(KeyCode::Char(' ')), &state),
            Some(Action::Settings(SettingsAction::Toggle))
        ));
    }

    #[test]
    fn test_shift_tab_goes_back() {
        let state = settings_open(SettingsField::LogPath);
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert!(matches!(
            translate_key(shift_tab, &state),
            Some(Action::Settings(SettingsAction::PrevField))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::BackTab), &state),
            Some(Action::Settings(SettingsAction::PrevField))
        ));
    }

    #[test]
    fn test_debug_console_keys() {
        let mut state = AppState::default();
        state.debug_console.visible = true;
        assert!(matches!(
            translate_key(key(KeyCode::Char('c')), &state),
            Some(Action::DebugConsole(DebugConsoleAction::Clear))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('q')), &state),
            Some(Action::DebugConsole(DebugConsoleAction::Toggle))
        ));
        assert!(translate_key(key(KeyCode::Char('j')), &state).is_none());
    }
}
