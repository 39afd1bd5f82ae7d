//! Application State Module
//!
//! The whole session lives in one [`Session`] value owned by the store.

mod session;
mod viewport;

pub use session::{Mode, Session};
pub use viewport::Viewport;
