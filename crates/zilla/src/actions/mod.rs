//! Actions module
//!
//! Every message that can reach the store is an [`Action`]. Actions are tagged
//! by domain:
//! - `Global`: raw terminal input and application-wide actions
//! - `TextInput` / `Navigate` / `Session`: semantic actions produced by the
//!   keyboard middleware from raw key presses
//! - `Event`: completions reported by background tasks

pub mod event;
pub mod global;
pub mod navigation;
pub mod session;
pub mod text_input;

pub use event::Event;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use session::SessionAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application-wide actions (raw keys, resize, quit)
    Global(GlobalAction),
    /// Editing of the query line
    TextInput(TextInputAction),
    /// Moving the selection in the issue list
    Navigate(NavigationAction),
    /// Leaving the current mode (cancel a fetch, back to typing)
    Session(SessionAction),
    /// Background task completions
    Event(Event),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Makes task completions visually distinct at the call site.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
