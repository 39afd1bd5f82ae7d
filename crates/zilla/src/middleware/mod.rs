use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::Session;

pub mod keyboard_middleware;
pub mod logging_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current session (read-only)
    /// - `dispatcher`: Use to queue actions that should re-enter the middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &Session, dispatcher: &Dispatcher) -> bool;
}
