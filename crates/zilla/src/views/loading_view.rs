use crate::state::Session;
use crate::views::key_hints;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use zilla_theme::Theme;

/// Spinner and a waiting message, vertically centered
pub fn render(session: &Session, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.panel_background()), area);

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![Line::from(vec![
        Span::styled(theme.spinner_frame(session.spinner_frame), theme.spinner()),
        Span::styled(" fetching issues… please wait.", theme.text()),
    ])];
    if let Some(query) = &session.submitted_query {
        lines.push(Line::from(Span::styled(format!("for \"{}\"", query), theme.muted())));
    } else {
        lines.push(Line::default());
    }
    lines.push(key_hints(theme, &[("Esc", "cancel"), ("Ctrl+C", "quit")]));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
}
