use crate::state::Session;
use crate::views::key_hints;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use zilla_theme::Theme;

pub fn render(session: &Session, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .title(Span::styled(" Error ", theme.error()))
        .title_bottom(key_hints(
            theme,
            &[("Esc/Enter/r", "back"), ("q", "quit")],
        ))
        .border_style(theme.error())
        .style(theme.panel_background());

    let error = session.last_error.as_deref().unwrap_or("unknown error");
    let lines = vec![
        Line::from(Span::styled(
            format!("Could not fetch issues: {}", error),
            theme.error(),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Check your Jira credentials and connection, then try again.",
            theme.muted(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
