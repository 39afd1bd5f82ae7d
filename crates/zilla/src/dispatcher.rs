//! Dispatcher for queuing actions into the store
//!
//! Every producer (the input thread, background tasks, middleware) holds a
//! clone of the Dispatcher. Actions sent through it land in the store's single
//! queue and are processed one at a time, in arrival order, through the full
//! middleware chain.

use crate::actions::Action;
use std::sync::mpsc::{SendError, Sender};

/// Dispatcher for sending actions to the store
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; a closed queue is logged and otherwise ignored
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.try_dispatch(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }

    /// Queue an action, reporting whether the store is still listening
    pub fn try_dispatch(&self, action: Action) -> Result<(), SendError<Action>> {
        self.action_tx.send(action)
    }
}
