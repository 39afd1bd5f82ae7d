use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::runner::TaskRunner;
use crate::state::Session;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Store - holds the session and runs the Redux loop
///
/// The store owns the receiving end of the only action queue. Everything else
/// (input thread, background tasks, middleware) sends into it through cloned
/// [`Dispatcher`]s.
pub struct Store<R: TaskRunner> {
    state: Session,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    inbox: Receiver<Action>,
    runner: R,
}

impl<R: TaskRunner> Store<R> {
    pub fn new(initial_state: Session, runner: R) -> Self {
        let (action_tx, inbox) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            inbox,
            runner,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &Session {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[cfg(test)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Give back the task runner, e.g. to shut it down
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Tasks returned by the reducer are handed to the runner right away.
    pub fn dispatch(&mut self, action: Action) {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        let (state, tasks) = reduce(state, &action);
        self.state = state;

        for task in tasks {
            log::debug!("Starting task {:?}", task);
            self.runner.spawn(task, &self.dispatcher);
        }
    }

    /// Wait up to `timeout` for a queued action, then process everything queued
    ///
    /// Returns the number of actions processed.
    pub fn process_pending(&mut self, timeout: Duration) -> usize {
        let first = match self.inbox.recv_timeout(timeout) {
            Ok(action) => action,
            Err(RecvTimeoutError::Timeout) => return 0,
            // The store holds a sender itself, so the queue never disconnects
            Err(RecvTimeoutError::Disconnected) => return 0,
        };
        self.dispatch(first);
        1 + self.drain()
    }

    /// Process every action currently queued, including ones queued meanwhile
    pub fn drain(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.inbox.try_recv() {
            self.dispatch(action);
            processed += 1;
        }
        processed
    }
}
