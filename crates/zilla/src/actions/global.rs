//! Global actions - not tied to any specific mode

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Terminal was resized to the given size (columns, rows)
    Resize { width: u16, height: u16 },
    /// Quit the application
    Quit,
}
