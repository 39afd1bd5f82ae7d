//! Navigation Reducer
//!
//! Selection movement in the issue list and viewport geometry.

use crate::actions::NavigationAction;
use crate::state::{Mode, Session};

/// Move the selection. Only acts in `Browsing` mode with a non-empty list.
///
/// The selection is clamped to the list; it never wraps around.
pub fn reduce_navigation(mut state: Session, action: &NavigationAction) -> Session {
    if state.mode != Mode::Browsing || state.issues.is_empty() {
        return state;
    }

    let last = state.issues.len() - 1;
    let page = state.viewport.list_rows();
    let current = state.selected.min(last);

    state.selected = match action {
        NavigationAction::Next => (current + 1).min(last),
        NavigationAction::Previous => current.saturating_sub(1),
        NavigationAction::ToTop => 0,
        NavigationAction::ToBottom => last,
        NavigationAction::PageUp => current.saturating_sub(page),
        NavigationAction::PageDown => (current + page).min(last),
    };
    state
        .viewport
        .scroll_to(state.selected, state.issues.len());
    state
}

/// Record a new terminal size. Applies in every mode.
pub fn reduce_resize(mut state: Session, width: u16, height: u16) -> Session {
    state.viewport.width = width;
    state.viewport.height = height;
    state
        .viewport
        .scroll_to(state.selected, state.issues.len());
    state
}
