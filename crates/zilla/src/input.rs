//! Terminal input thread
//!
//! Reads crossterm events on a dedicated thread and queues them as actions.
//! The thread ends on its own once the store stops listening.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::thread;
use std::time::Duration;

/// How long a single poll waits before checking again
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn spawn_input_thread(dispatcher: Dispatcher) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("zilla-input".to_string())
        .spawn(move || input_loop(dispatcher))
}

fn input_loop(dispatcher: Dispatcher) {
    log::debug!("Input thread started");
    loop {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(e) => {
                log::error!("Failed to poll terminal events: {}", e);
                break;
            }
        };
        if !ready {
            continue;
        }

        let action = match event::read() {
            Ok(event) => to_action(event),
            Err(e) => {
                log::error!("Failed to read terminal event: {}", e);
                break;
            }
        };

        if let Some(action) = action {
            if dispatcher.try_dispatch(action).is_err() {
                break;
            }
        }
    }
    log::debug!("Input thread stopped");
}

/// Translate a terminal event into an action, if it is one we care about
fn to_action(event: Event) -> Option<Action> {
    match event {
        // Only process key press events (ignore key release)
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Action::Global(GlobalAction::KeyPressed(key)))
        }
        Event::Resize(width, height) => Some(Action::Global(GlobalAction::Resize { width, height })),
        _ => None,
    }
}
