//! Task execution
//!
//! The store hands every [`BackgroundTask`] the reducer asks for to a
//! [`TaskRunner`]. A runner reports the outcome of each task as exactly one
//! event through the dispatcher and never touches the session directly.

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::task::BackgroundTask;
use jira_client::IssueSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Starts background tasks
pub trait TaskRunner {
    /// Start `task`; its completion must be delivered through `dispatcher`
    fn spawn(&mut self, task: BackgroundTask, dispatcher: &Dispatcher);
}

/// Runs tasks on a multi-threaded tokio runtime
pub struct TokioTaskRunner {
    runtime: Runtime,
    source: Arc<dyn IssueSource>,
    spinner_interval: Duration,
}

impl TokioTaskRunner {
    pub fn new(source: Arc<dyn IssueSource>, spinner_interval: Duration) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("zilla-worker")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            source,
            spinner_interval,
        })
    }

    /// Stop the runtime without waiting for outstanding tasks
    pub fn shutdown(self) {
        log::debug!("Shutting down task runtime");
        self.runtime.shutdown_background();
    }
}

impl TaskRunner for TokioTaskRunner {
    fn spawn(&mut self, task: BackgroundTask, dispatcher: &Dispatcher) {
        let dispatcher = dispatcher.clone();
        match task {
            BackgroundTask::FetchIssues { episode } => {
                let source = Arc::clone(&self.source);
                self.runtime.spawn(async move {
                    let event = fetch_issues(source.as_ref(), episode).await;
                    dispatcher.dispatch(Action::event(event));
                });
            }
            BackgroundTask::SpinnerTick { episode } => {
                let interval = self.spinner_interval;
                self.runtime.spawn(async move {
                    tokio::time::sleep(interval).await;
                    dispatcher.dispatch(Action::event(Event::SpinnerTicked { episode }));
                });
            }
        }
    }
}

/// Call the issue source once and wrap the outcome into an event
pub async fn fetch_issues(source: &dyn IssueSource, episode: u64) -> Event {
    match source.fetch_assigned_issues().await {
        Ok(fetched) => Event::IssuesLoaded {
            episode,
            issues: fetched.issues,
            fetched_at: fetched.fetched_at,
        },
        Err(e) => {
            if e.is_decode() {
                log::warn!("Jira response could not be decoded: {:?}", e);
            } else {
                log::warn!("Jira request failed: {:?}", e);
            }
            Event::IssuesFailed {
                episode,
                error: e.to_string(),
            }
        }
    }
}
