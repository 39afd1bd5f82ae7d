//! Errors returned by issue sources

use thiserror::Error;

/// Longest response body excerpt kept in a [`FetchError::Status`]
const MAX_BODY_EXCERPT: usize = 200;

/// Failure to fetch issues
///
/// Callers only rely on the `Display` text; the variants exist for logging
/// and for tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No Jira endpoint is configured
    #[error("no Jira endpoint configured (set jira.orgname or jira.customDomain)")]
    NotConfigured,

    /// The server could not be reached or the connection failed
    #[error("there was a problem making the request to the Jira API: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("the Jira API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A response arrived but could not be read as issue data
    #[error("there was a problem parsing the Jira API response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build a status error, keeping only a short excerpt of the body
    pub fn status(status: u16, body: &str) -> Self {
        let excerpt: String = body.trim().chars().take(MAX_BODY_EXCERPT).collect();
        FetchError::Status {
            status,
            body: excerpt,
        }
    }

    /// Whether the failure happened before any usable response arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::NotConfigured | FetchError::Transport(_) | FetchError::Status { .. }
        )
    }

    /// Whether a response arrived but could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_is_truncated() {
        let body = "x".repeat(1000);
        match FetchError::status(500, &body) {
            FetchError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.len(), MAX_BODY_EXCERPT);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_classification() {
        assert!(FetchError::NotConfigured.is_transport());
        assert!(FetchError::Transport("refused".into()).is_transport());
        assert!(FetchError::status(401, "Unauthorized").is_transport());
        assert!(FetchError::Decode("eof".into()).is_decode());
        assert!(!FetchError::Decode("eof".into()).is_transport());
    }

    #[test]
    fn test_display_text() {
        let err = FetchError::status(401, "  Unauthorized  ");
        assert_eq!(err.to_string(), "the Jira API responded with HTTP 401: Unauthorized");

        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err
            .to_string()
            .starts_with("there was a problem parsing the Jira API response"));
    }
}
