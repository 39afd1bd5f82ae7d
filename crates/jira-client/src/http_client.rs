//! Reqwest-based Jira API client
//!
//! Direct implementation of the `IssueSource` trait against the Jira REST
//! API (v2). This client makes real API calls without any caching.

use crate::client::IssueSource;
use crate::error::FetchError;
use crate::types::{wire::SearchResponse, FetchedIssues};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

/// JQL used to list the current user's issues
pub const ASSIGNED_JQL: &str = "assignee=currentuser() order by status asc";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How requests are authenticated
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic auth with an Atlassian API key
    Basic { username: String, api_key: String },
    /// Bearer access token
    Bearer(String),
    /// Unauthenticated requests (only useful for public instances)
    Anonymous,
}

impl Credentials {
    /// Pick the credentials from configured values
    ///
    /// An API key wins over an access token; with neither, requests are
    /// sent unauthenticated.
    pub fn from_parts(username: &str, api_key: &str, access_token: &str) -> Self {
        if !api_key.is_empty() {
            Credentials::Basic {
                username: username.to_string(),
                api_key: api_key.to_string(),
            }
        } else if !access_token.is_empty() {
            Credentials::Bearer(access_token.to_string())
        } else {
            Credentials::Anonymous
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("api_key", &"***")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"***").finish(),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}

/// Direct Jira API client
///
/// This is the base implementation that makes actual API calls.
/// It can be wrapped by `CachedIssueSource` to add caching behavior.
#[derive(Debug, Clone)]
pub struct JiraHttpClient {
    http: reqwest::Client,
    base_url: Option<String>,
    credentials: Credentials,
}

impl JiraHttpClient {
    /// Create a new client
    ///
    /// `base_url` of `None` produces a client whose every fetch fails with
    /// [`FetchError::NotConfigured`].
    pub fn new(base_url: Option<String>, credentials: Credentials) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            credentials,
        })
    }

    /// URL of the search endpoint
    pub fn search_url(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/rest/api/2/search", base))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::Basic { username, api_key } => request.basic_auth(username, Some(api_key)),
            Credentials::Bearer(token) => request.bearer_auth(token),
            Credentials::Anonymous => request,
        }
    }
}

#[async_trait]
impl IssueSource for JiraHttpClient {
    async fn fetch_assigned_issues(&self) -> Result<FetchedIssues, FetchError> {
        let url = self.search_url().ok_or(FetchError::NotConfigured)?;
        debug!("Fetching assigned issues from {}", url);

        let request = self
            .http
            .get(&url)
            .query(&[("jql", ASSIGNED_JQL), ("expand", "fields")]);

        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let issues = parsed.into_issues();
        debug!("Fetched {} assigned issues", issues.len());
        Ok(FetchedIssues::now(issues))
    }
}
