use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::Session;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &Session, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Issue payloads can be large, log their size only
            Action::Event(Event::IssuesLoaded {
                episode, issues, ..
            }) => log::debug!(
                "Action: IssuesLoaded {{ episode: {}, issues: {} }} (mode {:?})",
                episode,
                issues.len(),
                state.mode
            ),
            _ => log::debug!("Action: {:?} (mode {:?})", action, state.mode),
        }

        true // Always pass action through
    }
}
