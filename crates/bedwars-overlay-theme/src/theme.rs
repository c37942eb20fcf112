use ratatui::{
    prelude::*,
    style::palette::tailwind,
};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::NEUTRAL.c950,
            bg_panel: tailwind::NEUTRAL.c800,

            // Text
            text_primary: tailwind::NEUTRAL.c100,
            text_secondary: tailwind::NEUTRAL.c300,
            text_muted: tailwind::NEUTRAL.c500,

            // Accents
            accent_primary: tailwind::ORANGE.c400,

            // Status
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            // Selection
            selected_bg: tailwind::NEUTRAL.c700,
            selected_fg: Color::White,

            // Table
            table_header_bg: tailwind::NEUTRAL.c800,
            table_header_fg: tailwind::NEUTRAL.c200,
            table_row_fg: tailwind::NEUTRAL.c200,
            table_row_bg_normal: tailwind::NEUTRAL.c950,
            table_row_bg_alt: tailwind::NEUTRAL.c900,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (settings, debug console)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for accent elements (focus indicator, text cursor)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for key hints (e.g., "Enter" in "Enter apply")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected table rows
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal table rows, alternating by index
    pub fn table_row(&self, index: usize) -> Style {
        let bg = if index % 2 == 0 {
            self.table_row_bg_normal
        } else {
            self.table_row_bg_alt
        };
        Style::default().fg(self.table_row_fg).bg(bg)
    }


    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }


    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn log_error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn log_warning(&self) -> Style {
        Style::default().fg(self.status_warning)
    }

    pub fn log_info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    pub fn log_debug(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
