use crate::state::DebugConsoleState;
use crate::view_models::{DebugConsoleViewModel, LogLevel};
use bedwars_overlay_theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the debug console (Quake-style drop-down)
pub fn render(state: &DebugConsoleState, theme: &Theme, area: Rect, f: &mut Frame) {
    // Console takes the top 70% of the screen
    let console_height = (area.height * 70) / 100;
    let console_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: console_height.min(area.height),
    };

    f.render_widget(Clear, console_area);

    let block = Block::default()
        .title(" Debug Console (` to toggle, c to clear) ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let available_height = console_height.saturating_sub(2) as usize; // -2 for borders
    let vm = DebugConsoleViewModel::from_state(state, available_height);

    let visible_logs: Vec<Line> = vm
        .lines
        .iter()
        .map(|(level, line)| {
            let style = match level {
                Some(LogLevel::Error) => theme.log_error(),
                Some(LogLevel::Warn) => theme.log_warning(),
                Some(LogLevel::Info) => theme.log_info(),
                Some(LogLevel::Debug) | Some(LogLevel::Trace) => theme.log_debug(),
                None => theme.text(),
            };
            Line::from(Span::styled(*line, style))
        })
        .collect();

    let paragraph = Paragraph::new(visible_logs)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, console_area);
}
