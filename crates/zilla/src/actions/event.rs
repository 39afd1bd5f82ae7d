//! Event types
//!
//! Events are facts reported by background tasks. Each task delivers exactly
//! one event into the store's queue, tagged with the loading episode it was
//! started for. The reducer applies an event only while that episode is
//! still the current one.
//!
//! ## Naming Convention
//!
//! Events use past tense names indicating something has happened:
//! - `IssuesLoaded` (not `LoadIssues`)
//! - `SpinnerTicked` (not `TickSpinner`)

use chrono::{DateTime, Utc};
use jira_client::Issue;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The assigned-issues fetch succeeded
    IssuesLoaded {
        episode: u64,
        issues: Vec<Issue>,
        fetched_at: DateTime<Utc>,
    },

    /// The assigned-issues fetch failed; `error` is the display text
    IssuesFailed { episode: u64, error: String },

    /// The spinner interval elapsed
    SpinnerTicked { episode: u64 },
}

impl Event {
    /// Episode the originating task was started for
    pub fn episode(&self) -> u64 {
        match self {
            Event::IssuesLoaded { episode, .. }
            | Event::IssuesFailed { episode, .. }
            | Event::SpinnerTicked { episode } => *episode,
        }
    }
}
