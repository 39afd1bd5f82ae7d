//! Session actions - leave the current mode

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Abandon the outstanding fetch and go back to typing (query is kept)
    Cancel,
    /// Drop results or error and start over with an empty query
    Reset,
}
