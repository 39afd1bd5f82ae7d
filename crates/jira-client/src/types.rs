//! Jira data types
//!
//! [`Issue`] is the record handed to the application. The `wire` module
//! mirrors the JSON returned by the Jira REST API (v2) and is converted into
//! [`Issue`] values right after decoding, so the rest of the program never
//! sees the wire format.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A single Jira ticket
///
/// Immutable once fetched; a new fetch replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable identifier (e.g., "COM-2156")
    pub key: String,

    /// Issue summary
    pub title: String,

    /// Free-text description (empty when Jira returns null)
    #[serde(default)]
    pub description: String,

    /// Workflow status name (e.g., "In Progress")
    #[serde(default)]
    pub status: Option<String>,

    /// Issue type name (e.g., "Bug", "Story")
    #[serde(default)]
    pub issue_type: Option<String>,

    /// Priority name (e.g., "Medium")
    #[serde(default)]
    pub priority: Option<String>,

    /// Reporter display name
    #[serde(default)]
    pub reporter: Option<String>,

    /// Assignee display name
    #[serde(default)]
    pub assignee: Option<String>,

    #[serde(default)]
    pub created: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub updated: Option<DateTime<FixedOffset>>,
}

impl Issue {
    /// Create an issue with only the required fields set
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            status: None,
            issue_type: None,
            priority: None,
            reporter: None,
            assignee: None,
            created: None,
            updated: None,
        }
    }
}

/// Result of one successful fetch: the issues and when they were fetched
///
/// A cached answer carries the time of the original fetch, not the time it
/// was served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedIssues {
    pub issues: Vec<Issue>,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedIssues {
    /// Issues fetched just now
    pub fn now(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            fetched_at: Utc::now(),
        }
    }
}

/// Jira REST API wire format
pub mod wire {
    use super::Issue;
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer};

    /// Timestamp format used by Jira, e.g. `2018-05-25T04:18:06.836-0500`
    pub const JIRA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

    /// Response of `GET /rest/api/2/search`
    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub issues: Vec<WireIssue>,
        #[serde(default)]
        pub total: Option<u64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct WireIssue {
        #[serde(default)]
        pub id: String,
        pub key: String,
        pub fields: IssueFields,
    }

    #[derive(Debug, Deserialize)]
    pub struct IssueFields {
        #[serde(default)]
        pub summary: String,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub status: Option<Named>,
        #[serde(default)]
        pub issuetype: Option<Named>,
        #[serde(default)]
        pub priority: Option<Named>,
        #[serde(default)]
        pub reporter: Option<User>,
        #[serde(default)]
        pub assignee: Option<User>,
        #[serde(default, deserialize_with = "deserialize_jira_time")]
        pub created: Option<DateTime<FixedOffset>>,
        #[serde(default, deserialize_with = "deserialize_jira_time")]
        pub updated: Option<DateTime<FixedOffset>>,
    }

    /// Any Jira object that is identified by a `name` (status, type, priority)
    #[derive(Debug, Deserialize)]
    pub struct Named {
        pub name: String,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct User {
        #[serde(default)]
        pub display_name: String,
    }

    /// Parse a Jira timestamp, `null` becomes `None`
    fn deserialize_jira_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => DateTime::parse_from_str(&s, JIRA_TIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }

    impl From<WireIssue> for Issue {
        fn from(wire: WireIssue) -> Self {
            let fields = wire.fields;
            Issue {
                key: wire.key,
                title: fields.summary,
                description: fields.description.unwrap_or_default(),
                status: fields.status.map(|s| s.name),
                issue_type: fields.issuetype.map(|t| t.name),
                priority: fields.priority.map(|p| p.name),
                reporter: fields.reporter.map(|u| u.display_name),
                assignee: fields.assignee.map(|u| u.display_name),
                created: fields.created,
                updated: fields.updated,
            }
        }
    }

    impl SearchResponse {
        /// Convert the response into application issues, keeping server order
        pub fn into_issues(self) -> Vec<Issue> {
            self.issues.into_iter().map(Issue::from).collect()
        }
    }
}
