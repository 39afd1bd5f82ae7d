//! Cached issue source (decorator pattern)
//!
//! Wraps any `IssueSource` implementation to add caching behavior.
//! The cache mode determines whether to read from cache, write to cache, or both.

use crate::client::{CacheMode, IssueSource};
use crate::error::FetchError;
use crate::issue_cache::IssueCache;
use crate::types::FetchedIssues;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::{Arc, Mutex};

/// Cached issue source using the decorator pattern
///
/// Wraps an inner `IssueSource` and adds caching behavior based on the
/// configured `CacheMode`. Cache failures are logged and never turn into
/// fetch failures.
///
/// # Cache Modes
///
/// - `CacheMode::None` - Pass through to inner source (no caching)
/// - `CacheMode::WriteOnly` - Skip cache reads, but write responses (force refresh)
/// - `CacheMode::ReadOnly` - Read from cache only, don't update cache
/// - `CacheMode::ReadWrite` - Full caching (default)
///
/// # Example
///
/// ```rust,ignore
/// use jira_client::{CacheMode, CachedIssueSource, Credentials, IssueCache, JiraHttpClient};
/// use std::sync::{Arc, Mutex};
///
/// let inner = JiraHttpClient::new(Some(base_url), Credentials::Anonymous)?;
/// let cache = Arc::new(Mutex::new(IssueCache::open(path, 300)));
/// let source = CachedIssueSource::new(inner, cache, CacheMode::ReadWrite);
/// ```
#[derive(Debug, Clone)]
pub struct CachedIssueSource<S: IssueSource> {
    inner: S,
    cache: Arc<Mutex<IssueCache>>,
    mode: CacheMode,
}

impl<S: IssueSource> CachedIssueSource<S> {
    /// Create a new cached source
    ///
    /// # Arguments
    ///
    /// * `inner` - The inner source to delegate fetches to
    /// * `cache` - Shared cache instance
    /// * `mode` - Cache behavior mode
    pub fn new(inner: S, cache: Arc<Mutex<IssueCache>>, mode: CacheMode) -> Self {
        Self { inner, cache, mode }
    }

    fn try_cache_get(&self) -> Option<FetchedIssues> {
        if !self.mode.should_read() {
            return None;
        }

        match self.cache.lock() {
            Ok(cache) => cache.get(Utc::now()).cloned(),
            Err(e) => {
                warn!("Issue cache lock poisoned: {}", e);
                None
            }
        }
    }

    fn cache_set(&self, fetched: &FetchedIssues) {
        if !self.mode.should_write() {
            return;
        }

        match self.cache.lock() {
            Ok(mut cache) => {
                if let Err(e) = cache.set(fetched) {
                    debug!("Failed to write to issue cache: {}", e);
                }
            }
            Err(e) => warn!("Issue cache lock poisoned: {}", e),
        }
    }
}

#[async_trait]
impl<S: IssueSource> IssueSource for CachedIssueSource<S> {
    async fn fetch_assigned_issues(&self) -> Result<FetchedIssues, FetchError> {
        if let Some(cached) = self.try_cache_get() {
            debug!(
                "Cache HIT for assigned issues: {} issues fetched at {}",
                cached.issues.len(),
                cached.fetched_at
            );
            return Ok(cached);
        }

        let fetched = self.inner.fetch_assigned_issues().await?;
        self.cache_set(&fetched);
        Ok(fetched)
    }
}
