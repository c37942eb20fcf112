//! Roster table view
//!
//! The main screen: one row per player in the lobby.

use crate::state::AppState;
use crate::view_models::{RosterTableViewModel, FKDR_COLUMN};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Row, Table, TableState},
    Frame,
};

/// Render the roster table with its header and key hints
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = RosterTableViewModel::from_state(state);

    let status_line = Line::from(vec![
        Span::styled(vm.header.summary.clone(), theme.text_secondary()),
        Span::styled("  ", theme.muted()),
        Span::styled(
            vm.header.status_text.clone(),
            Style::default().fg(vm.header.status_color),
        ),
        Span::raw(" "),
    ])
    .right_aligned();

    let footer_hint = Line::from(vec![
        Span::styled(" j/k", theme.key_hint()),
        Span::styled(" move  ", theme.key_description()),
        Span::styled("s", theme.key_hint()),
        Span::styled("/", theme.muted()),
        Span::styled("S", theme.key_hint()),
        Span::styled(" sort  ", theme.key_description()),
        Span::styled("x", theme.key_hint()),
        Span::styled(" clear  ", theme.key_description()),
        Span::styled(",", theme.key_hint()),
        Span::styled(" settings  ", theme.key_description()),
        Span::styled("`", theme.key_hint()),
        Span::styled(" console  ", theme.key_description()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit ", theme.key_description()),
    ]);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_primary))
        .title(Span::styled(vm.header.title.clone(), theme.panel_title()))
        .title(status_line)
        .title_bottom(footer_hint)
        .style(Style::default().bg(theme.bg_primary));

    let header_style = theme.table_header();
    let header = Row::new(
        vm.column_titles
            .iter()
            .map(|title| Cell::from(title.clone()).style(header_style)),
    )
    .style(header_style)
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row_vm| {
            let cells = row_vm.cells.iter().enumerate().map(|(index, text)| {
                if index == FKDR_COLUMN {
                    Cell::from(text.clone()).style(Style::default().fg(row_vm.fkdr_color))
                } else {
                    Cell::from(text.clone())
                }
            });
            Row::new(cells).style(row_vm.style).height(1)
        })
        .collect();

    let widths = [
        Constraint::Min(16),    // Username
        Constraint::Length(9),  // FKs
        Constraint::Length(9),  // FDs
        Constraint::Length(7),  // FKDR
        Constraint::Length(9),  // Wins
        Constraint::Length(7),  // W/L
        Constraint::Length(12), // Beds Broken
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(vm.selected_index);

    f.render_stateful_widget(table, area, &mut table_state);
}
