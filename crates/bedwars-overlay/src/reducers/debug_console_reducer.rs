//! Debug Console Reducer

use crate::actions::DebugConsoleAction;
use crate::state::DebugConsoleState;

/// Reducer for debug console state.
///
/// Accepts only DebugConsoleAction, making it type-safe and focused.
pub fn reduce_debug_console(
    mut state: DebugConsoleState,
    action: &DebugConsoleAction,
) -> DebugConsoleState {
    match action {
        DebugConsoleAction::Toggle => {
            state.visible = !state.visible;
        }
        DebugConsoleAction::LinesAppended(new_lines) => {
            state.append_lines(new_lines.iter().cloned());
        }
        DebugConsoleAction::Clear => {
            state.lines.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_clear() {
        let mut state = reduce_debug_console(DebugConsoleState::default(), &DebugConsoleAction::Toggle);
        assert!(state.visible);

        state = reduce_debug_console(
            state,
            &DebugConsoleAction::LinesAppended(vec!["a".into(), "b".into()]),
        );
        assert_eq!(state.lines, vec!["a", "b"]);

        state = reduce_debug_console(state, &DebugConsoleAction::Clear);
        assert!(state.lines.is_empty());
        assert!(state.visible);

        state = reduce_debug_console(state, &DebugConsoleAction::Toggle);
        assert!(!state.visible);
    }
}
