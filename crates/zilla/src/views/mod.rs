//! Views
//!
//! Rendering is a pure function of the session: each mode has one view that
//! draws the whole screen. Views read from the session (or its view model)
//! and the theme, and never change state.

use crate::state::{Mode, Session};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};
use zilla_theme::Theme;

pub mod browsing_view;
pub mod error_view;
pub mod loading_view;
pub mod typing_view;

/// Render the screen for the session's current mode
pub fn render(session: &Session, theme: &Theme, area: Rect, f: &mut Frame) {
    match session.mode {
        Mode::Typing => typing_view::render(session, theme, area, f),
        Mode::Loading => loading_view::render(session, theme, area, f),
        Mode::Browsing => browsing_view::render(session, theme, area, f),
        Mode::Error => error_view::render(session, theme, area, f),
    }
}

/// Build a key hint line: "Enter submit · Esc back"
pub(crate) fn key_hints(theme: &Theme, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (index, (key, description)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" · ", theme.muted()));
        }
        spans.push(Span::styled(*key, theme.key_hint()));
        spans.push(Span::styled(format!(" {}", description), theme.key_description()));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Render the session into a test terminal and return its text, one line per row
    pub fn render_to_text(session: &Session, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| render(session, &theme, f.area(), f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
