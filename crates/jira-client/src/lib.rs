//! Jira API client with caching support
//!
//! This crate provides a trait-based client for the issues assigned to the
//! current Jira user, with optional caching. The design follows the decorator
//! pattern, allowing caching behavior to be composed with the base client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               IssueSource trait                  │
//! │  - fetch_assigned_issues()                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ JiraHttpClient  │         │ CachedIssueSource   │
//! │ (direct API)    │◄────────│ (decorator)         │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use jira_client::{CacheMode, CachedIssueSource, Credentials, IssueCache, IssueSource, JiraHttpClient};
//! use std::sync::{Arc, Mutex};
//!
//! # async fn example() -> Result<(), jira_client::FetchError> {
//! let direct = JiraHttpClient::new(
//!     Some("https://acme.atlassian.net".to_string()),
//!     Credentials::from_parts("me@acme.io", "api-key", ""),
//! )?;
//!
//! let cache = Arc::new(Mutex::new(IssueCache::in_memory(300)));
//! let cached = CachedIssueSource::new(direct, cache, CacheMode::ReadWrite);
//!
//! let fetched = cached.fetch_assigned_issues().await?;
//! println!("{} issues as of {}", fetched.issues.len(), fetched.fetched_at);
//! # Ok(())
//! # }
//! ```

pub mod cached_client;
pub mod client;
pub mod error;
pub mod http_client;
pub mod issue_cache;
pub mod types;

pub use cached_client::CachedIssueSource;
pub use client::{CacheMode, IssueSource};
pub use error::FetchError;
pub use http_client::{Credentials, JiraHttpClient, ASSIGNED_JQL};
pub use issue_cache::IssueCache;
pub use types::{wire, FetchedIssues, Issue};
