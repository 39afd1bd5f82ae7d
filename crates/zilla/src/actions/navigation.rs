//! Navigation actions for the issue list

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Navigate to top (g, Home)
    ToTop,
    /// Navigate to bottom (G, End)
    ToBottom,
    /// One page of list rows up
    PageUp,
    /// One page of list rows down
    PageDown,
}
