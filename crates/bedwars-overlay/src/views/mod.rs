//! Views
//!
//! The roster table is always drawn; the settings form and the debug console
//! are drawn on top of it while open.

mod debug_console_view;
mod roster_view;
mod settings_view;

use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Render the whole screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    roster_view::render(state, area, f);

    if state.settings.visible {
        settings_view::render(&state.settings, &state.theme, area, f);
    }

    if state.debug_console.visible {
        debug_console_view::render(&state.debug_console, &state.theme, area, f);
    }
}
