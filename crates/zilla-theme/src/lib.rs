//! Rendering constants for zilla
//!
//! Everything the views need to know about colors, labels and the loading
//! spinner lives in one immutable [`Theme`] value that is passed into the
//! render functions.

use ratatui::{prelude::*, style::palette::tailwind};

/// Braille "dot" spinner frames
pub const DOT_SPINNER: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Application theme - centralized color, style and label management
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
    pub accent_secondary: Color,

    // Status colors
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Frames cycled by the loading indicator
    pub spinner_frames: &'static [&'static str],

    /// Title of the issue list pane
    pub list_title: &'static str,

    /// Title of the issue detail pane
    pub detail_title: &'static str,

    /// Prompt shown above the query input
    pub prompt: &'static str,
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
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            // Status
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            // Selection
            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            spinner_frames: DOT_SPINNER,
            list_title: "Issues",
            detail_title: "Ticket details",
            prompt: "Enter location:",
        }
    }

    /// Spinner glyph for the given frame counter (wraps around)
    pub fn spinner_frame(&self, frame: usize) -> &'static str {
        if self.spinner_frames.is_empty() {
            return "";
        }
        self.spinner_frames[frame % self.spinner_frames.len()]
    }

    // Prebuilt styles for common use cases

    /// Style for full-screen backgrounds
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Esc" in "Esc back")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the selected list row
    pub fn list_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for issue keys in list rows
    pub fn issue_key(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    /// Style for the spinner glyph
    pub fn spinner(&self) -> Style {
        Style::default().fg(self.status_warning)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
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
}
