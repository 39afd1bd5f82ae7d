//! View model for the list/detail browsing screen
//!
//! Separates presentation logic from the session and from view rendering.
//! Pre-computes all display text so it can be tested without a terminal.

use crate::state::Session;
use chrono::{DateTime, FixedOffset, Local};
use jira_client::Issue;
use zilla_theme::Theme;

/// Placeholder for issues without a description
const NO_DESCRIPTION: &str = "(no description)";

/// View model for the whole browsing screen
#[derive(Debug, Clone, PartialEq)]
pub struct BrowsingViewModel {
    /// List pane title: "Issues (3) · my query"
    pub list_title: String,
    /// Position and freshness: "2/3 · fetched 14:03:22"
    pub status_text: String,
    /// Rows visible in the list pane, top to bottom
    pub rows: Vec<IssueRowViewModel>,
    /// Content of the detail pane (None when there are no issues)
    pub detail: Option<IssueDetailViewModel>,
}

/// View model for a single list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRowViewModel {
    pub key: String,   // "A-2"
    pub title: String, // "Fix login redirect"
    pub is_selected: bool,
}

/// View model for the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDetailViewModel {
    pub key: String,
    pub title: String,
    /// Label/value pairs for the metadata that is present
    pub metadata: Vec<(&'static str, String)>,
    pub description: String,
}

impl BrowsingViewModel {
    /// Transform the session into a display-ready view model
    pub fn from_session(session: &Session, theme: &Theme) -> Self {
        let list_title = match &session.submitted_query {
            Some(query) => format!(" {} ({}) · {} ", theme.list_title, session.issues.len(), query),
            None => format!(" {} ({}) ", theme.list_title, session.issues.len()),
        };

        let start = session.viewport.scroll_offset.min(session.issues.len());
        let rows = session
            .issues
            .iter()
            .enumerate()
            .skip(start)
            .take(session.viewport.list_rows())
            .map(|(index, issue)| IssueRowViewModel {
                key: issue.key.clone(),
                title: issue.title.clone(),
                is_selected: index == session.selected,
            })
            .collect();

        Self {
            list_title,
            status_text: Self::build_status(session),
            rows,
            detail: session.selected_issue().map(Self::build_detail),
        }
    }

    fn build_status(session: &Session) -> String {
        let position = if session.issues.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", session.selected + 1, session.issues.len())
        };

        match session.fetched_at {
            Some(at) => format!(
                "{} · fetched {}",
                position,
                at.with_timezone(&Local).format("%H:%M:%S")
            ),
            None => position,
        }
    }

    fn build_detail(issue: &Issue) -> IssueDetailViewModel {
        let mut metadata = Vec::new();
        let named = [
            ("Status", &issue.status),
            ("Type", &issue.issue_type),
            ("Priority", &issue.priority),
            ("Reporter", &issue.reporter),
            ("Assignee", &issue.assignee),
        ];
        for (label, value) in named {
            if let Some(value) = value {
                metadata.push((label, value.clone()));
            }
        }
        for (label, time) in [("Created", &issue.created), ("Updated", &issue.updated)] {
            if let Some(time) = time {
                metadata.push((label, format_time(time)));
            }
        }

        let description = if issue.description.trim().is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            issue.description.clone()
        };

        IssueDetailViewModel {
            key: issue.key.clone(),
            title: issue.title.clone(),
            metadata,
            description,
        }
    }
}

fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;
    use pretty_assertions::assert_eq;

    fn session(count: usize, height: u16) -> Session {
        let mut session = Session {
            mode: Mode::Browsing,
            submitted_query: Some("my query".to_string()),
            issues: (1..=count)
                .map(|n| Issue::new(format!("A-{}", n), format!("Issue {}", n), ""))
                .collect(),
            ..Session::default()
        };
        session.viewport.width = 90;
        session.viewport.height = height;
        session
    }

    #[test]
    fn test_rows_follow_scroll_window() {
        let mut session = session(10, 6); // 4 rows
        session.selected = 5;
        session.viewport.scroll_offset = 3;

        let vm = BrowsingViewModel::from_session(&session, &Theme::default());
        let keys: Vec<_> = vm.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["A-4", "A-5", "A-6", "A-7"]);
        assert!(vm.rows[2].is_selected);
        assert_eq!(vm.rows.iter().filter(|r| r.is_selected).count(), 1);
        assert_eq!(vm.status_text, "6/10");
        assert_eq!(vm.list_title, " Issues (10) · my query ");
    }

    #[test]
    fn test_detail_tracks_selection() {
        let mut session = session(3, 20);
        session.issues[1] = Issue {
            status: Some("In Progress".to_string()),
            priority: Some("High".to_string()),
            created: DateTime::parse_from_rfc3339("2018-05-25T04:18:06-05:00").ok(),
            ..Issue::new("A-2", "Second", "Some *details*")
        };
        session.selected = 1;

        let detail = BrowsingViewModel::from_session(&session, &Theme::default())
            .detail
            .unwrap();
        assert_eq!(detail.key, "A-2");
        assert_eq!(detail.description, "Some *details*");
        assert_eq!(
            detail.metadata,
            vec![
                ("Status", "In Progress".to_string()),
                ("Priority", "High".to_string()),
                ("Created", "2018-05-25 04:18".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_description_placeholder() {
        let session = session(1, 20);
        let detail = BrowsingViewModel::from_session(&session, &Theme::default())
            .detail
            .unwrap();
        assert_eq!(detail.description, NO_DESCRIPTION);
        assert!(detail.metadata.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let vm = BrowsingViewModel::from_session(&session(0, 20), &Theme::default());
        assert!(vm.rows.is_empty());
        assert_eq!(vm.detail, None);
        assert_eq!(vm.status_text, "0/0");
    }
}
