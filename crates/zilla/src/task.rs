//! Background tasks requested by the reducer
//!
//! The reducer never performs side effects itself. It returns the tasks it
//! wants started, and the store hands them to a [`TaskRunner`](crate::runner::TaskRunner).

/// One-shot unit of work that reports back with exactly one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTask {
    /// Fetch the assigned issues once
    FetchIssues { episode: u64 },
    /// Wait one spinner interval, then report a tick
    SpinnerTick { episode: u64 },
}
