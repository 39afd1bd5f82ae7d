use crate::state::Session;
use crate::views::key_hints;
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use zilla_theme::Theme;

/// Query prompt with the input line and a cursor at its end
pub fn render(session: &Session, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .title(Span::styled(" zilla ", theme.panel_title()))
        .title_bottom(key_hints(
            theme,
            &[("Enter", "submit"), ("Ctrl+U", "clear"), ("Ctrl+C", "quit")],
        ))
        .border_style(theme.panel_border())
        .style(theme.panel_background());

    let inner = block.inner(area);
    let input = Line::from(vec![
        Span::styled("> ", theme.key_hint()),
        Span::styled(session.query_text.clone(), theme.text()),
    ]);
    let input_width = input.width() as u16;

    let lines = vec![
        Line::from(Span::styled(theme.prompt, theme.text())),
        input,
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);

    // Cursor after the last typed character, as long as it fits
    if inner.height >= 2 && input_width < inner.width {
        f.set_cursor_position(Position::new(inner.x + input_width, inner.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use crate::state::Session;
    use crate::views::test_support::render_to_text;

    #[test]
    fn test_shows_query_line() {
        let session = Session {
            query_text: "my query".to_string(),
            ..Session::default()
        };
        let text = render_to_text(&session, 50, 6);
        assert!(text.contains("> my query"));
        assert!(text.contains("Enter submit"));
    }
}
