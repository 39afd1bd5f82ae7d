//! File-backed cache of the last assigned-issues response
//!
//! The cache holds a single entry: the issues from the most recent successful
//! fetch plus the time they were fetched. It is persisted as JSON so the next
//! start of the application can show issues without waiting on the network.

use crate::types::FetchedIssues;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};

/// Single-entry issue cache with a time-to-live
#[derive(Debug, Default)]
pub struct IssueCache {
    path: Option<PathBuf>,
    ttl_secs: i64,
    entry: Option<FetchedIssues>,
}

impl IssueCache {
    /// Open the cache stored at `path`, loading any existing entry
    ///
    /// A missing or unreadable file results in an empty cache.
    pub fn open(path: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let path = path.into();
        let entry = load_entry(&path);
        Self {
            path: Some(path),
            ttl_secs: ttl_to_secs(ttl_secs),
            entry,
        }
    }

    /// Cache that lives only in memory
    pub fn in_memory(ttl_secs: u64) -> Self {
        Self {
            path: None,
            ttl_secs: ttl_to_secs(ttl_secs),
            entry: None,
        }
    }

    /// Cached entry, if one exists and is younger than the TTL at `now`
    pub fn get(&self, now: DateTime<Utc>) -> Option<&FetchedIssues> {
        let entry = self.entry.as_ref()?;
        let age = now.signed_duration_since(entry.fetched_at).num_seconds();
        if age < 0 || age >= self.ttl_secs {
            debug!("Issue cache entry is stale ({}s old)", age);
            return None;
        }
        Some(entry)
    }

    /// Replace the cached entry and persist it
    pub fn set(&mut self, fetched: &FetchedIssues) -> io::Result<()> {
        if let Some(path) = &self.path {
            let json = serde_json::to_vec_pretty(fetched).map_err(io::Error::other)?;
            std::fs::write(path, json)?;
            debug!(
                "Wrote {} issues to cache {}",
                fetched.issues.len(),
                path.display()
            );
        }

        self.entry = Some(fetched.clone());
        Ok(())
    }
}

/// TTLs beyond `i64::MAX` seconds saturate instead of wrapping negative
fn ttl_to_secs(ttl_secs: u64) -> i64 {
    i64::try_from(ttl_secs).unwrap_or(i64::MAX)
}

fn load_entry(path: &Path) -> Option<FetchedIssues> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read issue cache {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_slice(&content) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Ignoring corrupt issue cache {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Issue;
    use chrono::Duration;

    fn fetched_at(at: DateTime<Utc>) -> FetchedIssues {
        FetchedIssues {
            issues: vec![Issue::new("A-1", "x", "first"), Issue::new("A-2", "y", "second")],
            fetched_at: at,
        }
    }

    #[test]
    fn test_fresh_entry_is_returned() {
        let now = Utc::now();
        let mut cache = IssueCache::in_memory(60);
        cache.set(&fetched_at(now)).unwrap();

        let cached = cache.get(now + Duration::seconds(30)).unwrap();
        assert_eq!(cached.issues.len(), 2);
        assert_eq!(cached.issues[0].key, "A-1");
        assert_eq!(cached.fetched_at, now);
    }

    #[test]
    fn test_stale_entry_is_ignored() {
        let now = Utc::now();
        let mut cache = IssueCache::in_memory(60);
        cache.set(&fetched_at(now)).unwrap();

        assert!(cache.get(now + Duration::seconds(60)).is_none());
        assert!(cache.get(now - Duration::seconds(1)).is_none());
    }

    #[test]
    fn test_huge_ttl_does_not_disable_cache() {
        let now = Utc::now();
        let mut cache = IssueCache::in_memory(u64::MAX);
        cache.set(&fetched_at(now)).unwrap();

        assert!(cache.get(now + Duration::days(365)).is_some());
    }

    #[test]
    fn test_entry_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        let now = Utc::now();

        let mut cache = IssueCache::open(&path, 300);
        assert!(cache.get(now).is_none());
        cache.set(&fetched_at(now)).unwrap();

        let reopened = IssueCache::open(&path, 300);
        assert_eq!(reopened.get(now), Some(&fetched_at(now)));
    }

    #[test]
    fn test_corrupt_file_yields_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cache = IssueCache::open(&path, 300);
        assert!(cache.get(Utc::now()).is_none());
    }
}
