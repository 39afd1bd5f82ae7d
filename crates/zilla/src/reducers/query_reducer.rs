//! Query Reducer
//!
//! Editing and submitting the query line, and leaving Loading, Browsing or
//! Error mode again.

use crate::actions::{SessionAction, TextInputAction};
use crate::state::{Mode, Session};
use crate::task::BackgroundTask;

/// Reducer for the query line. Only acts in `Typing` mode.
pub fn reduce_text_input(
    mut state: Session,
    action: &TextInputAction,
) -> (Session, Vec<BackgroundTask>) {
    if state.mode != Mode::Typing {
        return (state, vec![]);
    }

    match action {
        TextInputAction::Char(c) => state.query_text.push(*c),
        TextInputAction::Backspace => {
            state.query_text.pop();
        }
        TextInputAction::ClearLine => state.query_text.clear(),
        TextInputAction::Confirm => return submit(state),
    }

    (state, vec![])
}

/// Start a new loading episode for a non-empty query
fn submit(mut state: Session) -> (Session, Vec<BackgroundTask>) {
    let query = state.query_text.trim();
    if query.is_empty() {
        log::debug!("Ignoring submit of empty query");
        return (state, vec![]);
    }

    state.submitted_query = Some(query.to_string());
    state.episode += 1;
    state.mode = Mode::Loading;
    state.spinner_frame = 0;
    state.last_error = None;
    log::debug!("Submitted query, entering Loading (episode {})", state.episode);

    let episode = state.episode;
    (
        state,
        vec![
            BackgroundTask::FetchIssues { episode },
            BackgroundTask::SpinnerTick { episode },
        ],
    )
}

/// Reducer for cancel and reset
pub fn reduce_session(mut state: Session, action: &SessionAction) -> Session {
    match (action, state.mode) {
        (SessionAction::Cancel, Mode::Loading) => {
            log::debug!("Cancelled episode {}, back to Typing", state.episode);
            state.mode = Mode::Typing;
        }
        (SessionAction::Reset, Mode::Browsing | Mode::Error) => {
            log::debug!("Reset from {:?}, back to Typing", state.mode);
            state.mode = Mode::Typing;
            state.query_text.clear();
            state.submitted_query = None;
            state.issues.clear();
            state.selected = 0;
            state.viewport.scroll_offset = 0;
            state.last_error = None;
            state.fetched_at = None;
        }
        _ => {}
    }
    state
}
