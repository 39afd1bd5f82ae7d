//! Issue source trait and cache mode definitions
//!
//! This module defines the core `IssueSource` trait that all client
//! implementations must satisfy, as well as the `CacheMode` enum for
//! controlling caching behavior.

use crate::error::FetchError;
use crate::types::FetchedIssues;
use async_trait::async_trait;
use std::sync::Arc;

/// Cache behavior mode for issue sources
///
/// Controls how the client interacts with the cache layer.
/// This is set at client construction time, not per-request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// No caching - neither read nor write
    None,

    /// Write-only - skip cache reads, but write responses to cache
    /// Use for "force refresh" to get fresh data while populating cache
    WriteOnly,

    /// Read-only - read from cache, but don't update it
    /// Use for offline mode or when preserving cache state
    ReadOnly,

    /// Full caching - read from cache, write to cache
    #[default]
    ReadWrite,
}

impl CacheMode {
    /// Should we attempt to read from cache before making an API call?
    pub fn should_read(&self) -> bool {
        matches!(self, CacheMode::ReadOnly | CacheMode::ReadWrite)
    }

    /// Should we write API responses to cache?
    pub fn should_write(&self) -> bool {
        matches!(self, CacheMode::WriteOnly | CacheMode::ReadWrite)
    }
}

/// Source of the issues assigned to the current user
///
/// Implementations can be direct (hitting the Jira API) or decorated
/// with caching. Credentials are bound at construction time.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single source can be shared
/// by background tasks.
///
/// # Example
///
/// ```rust,ignore
/// use jira_client::IssueSource;
///
/// async fn count(source: &dyn IssueSource) -> usize {
///     source
///         .fetch_assigned_issues()
///         .await
///         .map(|fetched| fetched.issues.len())
///         .unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch every issue assigned to the current user
    ///
    /// Returns issues in server order together with the time they were
    /// fetched, or an error if the request or the decoding of the response
    /// failed.
    async fn fetch_assigned_issues(&self) -> Result<FetchedIssues, FetchError>;
}

#[async_trait]
impl<S: IssueSource + ?Sized> IssueSource for Arc<S> {
    async fn fetch_assigned_issues(&self) -> Result<FetchedIssues, FetchError> {
        (**self).fetch_assigned_issues().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_mode_flags() {
        assert!(!CacheMode::None.should_read());
        assert!(!CacheMode::None.should_write());
        assert!(!CacheMode::WriteOnly.should_read());
        assert!(CacheMode::WriteOnly.should_write());
        assert!(CacheMode::ReadOnly.should_read());
        assert!(!CacheMode::ReadOnly.should_write());
        assert!(CacheMode::ReadWrite.should_read());
        assert!(CacheMode::ReadWrite.should_write());
    }

    #[test]
    fn test_cache_mode_default_is_read_write() {
        assert_eq!(CacheMode::default(), CacheMode::ReadWrite);
    }
}
