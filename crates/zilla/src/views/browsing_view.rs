use crate::state::{Session, Viewport};
use crate::view_models::{BrowsingViewModel, IssueDetailViewModel};
use crate::views::key_hints;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use zilla_theme::Theme;

/// Issue list on the left third, details of the selected issue on the right
pub fn render(session: &Session, theme: &Theme, area: Rect, f: &mut Frame) {
    let vm = BrowsingViewModel::from_session(session, theme);

    let panes = Viewport {
        width: area.width,
        height: area.height,
        ..session.viewport
    };
    let [list_area, detail_area] = Layout::horizontal([
        Constraint::Length(panes.list_width()),
        Constraint::Length(panes.detail_width()),
    ])
    .areas(area);

    render_list(&vm, theme, list_area, f);
    render_detail(vm.detail.as_ref(), theme, detail_area, f);
}

fn render_list(vm: &BrowsingViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .title(Span::styled(vm.list_title.clone(), theme.panel_title()))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", vm.status_text),
            theme.muted(),
        )))
        .border_style(theme.panel_border())
        .style(theme.panel_background());

    let lines: Vec<Line> = vm
        .rows
        .iter()
        .map(|row| {
            let line = Line::from(vec![
                Span::styled(row.key.clone(), theme.issue_key()),
                Span::raw(" "),
                Span::styled(row.title.clone(), theme.text()),
            ]);
            if row.is_selected {
                line.patch_style(theme.list_selected())
            } else {
                line
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(
    detail: Option<&IssueDetailViewModel>,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let block = Block::bordered()
        .title(Span::styled(
            format!(" {} ", theme.detail_title),
            theme.panel_title(),
        ))
        .title_bottom(key_hints(
            theme,
            &[
                ("j/k", "move"),
                ("g/G", "top/bottom"),
                ("PgUp/PgDn", "page"),
                ("Esc", "back"),
                ("q", "quit"),
            ],
        ))
        .border_style(theme.panel_border())
        .style(theme.panel_background());

    let Some(detail) = detail else {
        let empty = Line::from(Span::styled("No issues assigned to you.", theme.muted()));
        f.render_widget(Paragraph::new(empty).block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(detail.key.clone(), theme.issue_key()),
            Span::raw(" "),
            Span::styled(detail.title.clone(), theme.text().bold()),
        ]),
        Line::default(),
    ];

    if !detail.metadata.is_empty() {
        for (label, value) in &detail.metadata {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<9}", format!("{}:", label)), theme.muted()),
                Span::styled(value.clone(), theme.text()),
            ]));
        }
        lines.push(Line::default());
    }

    lines.extend(
        detail
            .description
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.text())
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::state::{Mode, Session};
    use crate::views::test_support::render_to_text;
    use jira_client::Issue;

    fn session() -> Session {
        let mut session = Session {
            mode: Mode::Browsing,
            issues: vec![
                Issue::new("A-1", "First", "one"),
                Issue::new("A-2", "Second", "the second description"),
                Issue::new("A-3", "Third", "three"),
            ],
            selected: 1,
            ..Session::default()
        };
        session.viewport.width = 90;
        session.viewport.height = 12;
        session
    }

    #[test]
    fn test_list_and_detail() {
        let text = render_to_text(&session(), 90, 12);
        assert!(text.contains("A-1 First"));
        assert!(text.contains("A-3 Third"));
        assert!(text.contains("A-2 Second"));
        assert!(text.contains("the second description"));
        assert!(!text.contains("three"));
        assert!(text.contains("2/3"));
    }

    #[test]
    fn test_list_takes_a_third_of_the_width() {
        let text = render_to_text(&session(), 90, 12);
        let first_row: Vec<char> = text.lines().next().unwrap().chars().collect();
        // List pane spans columns 0..30, detail pane starts at 30
        assert_eq!(first_row[0], '┌');
        assert_eq!(first_row[29], '┐');
        assert_eq!(first_row[30], '┌');
        assert_eq!(first_row[89], '┐');
    }
}
