//! Session state

use super::Viewport;
use chrono::{DateTime, Utc};
use jira_client::Issue;

/// UI mode of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Composing the query (initial mode)
    #[default]
    Typing,
    /// A fetch is outstanding
    Loading,
    /// Issues are shown in the list/detail view
    Browsing,
    /// The last fetch failed
    Error,
}

/// Root application state
///
/// Only the reducer produces new values of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub running: bool,
    pub mode: Mode,
    /// Text in the query line
    pub query_text: String,
    /// Query as it was submitted for the current or last fetch
    pub submitted_query: Option<String>,
    pub issues: Vec<Issue>,
    /// Index into `issues`
    pub selected: usize,
    /// Display text of the last fetch failure
    pub last_error: Option<String>,
    pub viewport: Viewport,
    /// Incremented on every submit; tags the tasks started for it
    pub episode: u64,
    pub spinner_frame: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            running: true,
            mode: Mode::default(),
            query_text: String::new(),
            submitted_query: None,
            issues: Vec::new(),
            selected: 0,
            last_error: None,
            viewport: Viewport::default(),
            episode: 0,
            spinner_frame: 0,
            fetched_at: None,
        }
    }
}

impl Session {
    /// The issue under the cursor, if any
    pub fn selected_issue(&self) -> Option<&Issue> {
        self.issues.get(self.selected)
    }

    /// Whether a task result tagged with `episode` may still be applied
    pub fn accepts_episode(&self, episode: u64) -> bool {
        self.mode == Mode::Loading && self.episode == episode
    }
}
