//! Reducers
//!
//! Pure functions from `(Session, action)` to `(Session, tasks)`. The root
//! reducer routes each action to the reducer for its domain.

pub mod app_reducer;
pub mod fetch_reducer;
pub mod navigation_reducer;
pub mod query_reducer;

pub use app_reducer::reduce;
