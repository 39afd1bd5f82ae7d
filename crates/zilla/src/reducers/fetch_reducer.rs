//! Fetch Reducer
//!
//! Applies background task completions. A completion is applied only while
//! the session is still loading the episode it was started for; anything
//! else is a stale result and gets dropped.

use crate::actions::Event;
use crate::state::{Mode, Session};
use crate::task::BackgroundTask;

pub fn reduce_event(mut state: Session, event: &Event) -> (Session, Vec<BackgroundTask>) {
    if !state.accepts_episode(event.episode()) {
        match event {
            // Ticks outliving their episode are the normal end of the timer chain
            Event::SpinnerTicked { .. } => {}
            _ => log::info!(
                "Discarding stale fetch result for episode {} (current episode {}, mode {:?})",
                event.episode(),
                state.episode,
                state.mode
            ),
        }
        return (state, vec![]);
    }

    match event {
        Event::IssuesLoaded {
            issues, fetched_at, ..
        } => {
            log::debug!("Loaded {} issues, entering Browsing", issues.len());
            state.mode = Mode::Browsing;
            state.issues = issues.clone();
            state.selected = 0;
            state.viewport.scroll_offset = 0;
            state.fetched_at = Some(*fetched_at);
            (state, vec![])
        }
        Event::IssuesFailed { error, .. } => {
            log::error!("Fetching issues failed: {}", error);
            state.mode = Mode::Error;
            state.last_error = Some(error.clone());
            (state, vec![])
        }
        Event::SpinnerTicked { episode } => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            (state, vec![BackgroundTask::SpinnerTick { episode: *episode }])
        }
    }
}
