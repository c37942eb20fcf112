//! Settings View
//!
//! A floating form for the API key, the watched log file and your own name.

use crate::state::{SettingsField, SettingsFormState};
use bedwars_overlay_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 14;

/// Render the settings popup as a centered floating window
pub fn render(form: &SettingsFormState, theme: &Theme, area: Rect, f: &mut Frame) {
    // Render dimmed overlay over the entire screen to create modal effect
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup_width = (area.width * 65 / 100).clamp(50, 90).min(area.width);
    let popup_height = 10.min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the popup area (removes the dim effect for the popup itself)
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Tab", theme.key_hint()),
        Span::styled("/", theme.muted()),
        Span::styled("S-Tab", theme.key_hint()),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled("Space", theme.key_hint()),
        Span::styled(" toggle  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" apply  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" cancel ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(ratatui::layout::Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // API key
            Constraint::Length(1), // Log file
            Constraint::Length(1), // Own name
            Constraint::Length(1), // Show own name
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let instructions = Line::from(Span::styled(
        "Changes take effect when applied and are saved to the config file.",
        theme.text_secondary(),
    ));
    f.render_widget(Paragraph::new(instructions), chunks[0]);

    let masked_key = "•".repeat(form.api_key.chars().count());
    render_text_field(
        f,
        chunks[2],
        "API key",
        &masked_key,
        form.focused_field == SettingsField::ApiKey,
        theme,
        Some("or set HYPIXEL_API_KEY"),
    );
    render_text_field(
        f,
        chunks[3],
        "Log file",
        &form.log_path,
        form.focused_field == SettingsField::LogPath,
        theme,
        None,
    );
    render_text_field(
        f,
        chunks[4],
        "Your name",
        &form.own_player_name,
        form.focused_field == SettingsField::OwnName,
        theme,
        Some("resets the table when you join"),
    );
    render_toggle_field(
        f,
        chunks[5],
        "Show own name",
        form.show_own_name,
        form.focused_field == SettingsField::ShowOwnName,
        theme,
    );
}

fn field_prefix(label: &str, focused: bool, theme: &Theme) -> [Span<'static>; 2] {
    let indicator = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    [
        Span::styled(indicator, theme.accent().bold()),
        Span::styled(
            format!("{:width$}", format!("{}:", label), width = LABEL_WIDTH),
            label_style,
        ),
    ]
}

/// Render a single text field
fn render_text_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
    placeholder: Option<&str>,
) {
    let mut spans = field_prefix(label, focused, theme).to_vec();

    match (value.is_empty(), placeholder) {
        (true, Some(placeholder)) => {
            if focused {
                spans.push(Span::styled("▌", theme.accent()));
            }
            spans.push(Span::styled(
                placeholder.to_string(),
                theme.muted().italic().add_modifier(Modifier::DIM),
            ));
        }
        _ => {
            let value_style = if focused {
                Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
            } else {
                theme.text()
            };
            spans.push(Span::styled(value.to_string(), value_style));
            if focused {
                spans.push(Span::styled("▌", theme.accent()));
            }
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a checkbox field
fn render_toggle_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = field_prefix(label, focused, theme).to_vec();
    let (mark, style) = if checked {
        ("[x]", theme.success())
    } else {
        ("[ ]", theme.muted())
    };
    spans.push(Span::styled(mark, style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
