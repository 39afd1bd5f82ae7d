//! KeyboardMiddleware - translates keyboard events into mode-aware actions
//!
//! Raw key presses never reach the reducer. This middleware consumes them
//! and queues the semantic action the key stands for in the current mode:
//!
//! | Mode     | Keys                                                          |
//! |----------|---------------------------------------------------------------|
//! | Typing   | printable chars, Backspace, Ctrl+U (clear), Enter (submit)    |
//! | Loading  | Esc (cancel)                                                  |
//! | Browsing | j/k/↓/↑, g/G/Home/End, PgUp/PgDn, Esc (back), q (quit)        |
//! | Error    | Esc/Enter/r (back), q (quit)                                  |
//!
//! Ctrl+C quits in every mode.

use crate::actions::{Action, GlobalAction, NavigationAction, SessionAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{Mode, Session};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// Map a key to the action it triggers in `mode`
pub fn translate_key(key: KeyEvent, mode: Mode) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C: quit - always works
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }

    match mode {
        Mode::Typing => translate_typing(key, ctrl).map(Action::TextInput),
        Mode::Loading => match key.code {
            KeyCode::Esc => Some(Action::Session(SessionAction::Cancel)),
            _ => None,
        },
        Mode::Browsing => match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Esc => Some(Action::Session(SessionAction::Reset)),
            code => translate_navigation(code).map(Action::Navigate),
        },
        Mode::Error => match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('r') => {
                Some(Action::Session(SessionAction::Reset))
            }
            _ => None,
        },
    }
}

fn translate_typing(key: KeyEvent, ctrl: bool) -> Option<TextInputAction> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        // Ctrl+U - Unix line kill (clear line)
        KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
        KeyCode::Char(c) if !ctrl && !alt => Some(TextInputAction::Char(c)),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        _ => None,
    }
}

fn translate_navigation(code: KeyCode) -> Option<NavigationAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(NavigationAction::Next),
        KeyCode::Char('k') | KeyCode::Up => Some(NavigationAction::Previous),
        KeyCode::Char('g') | KeyCode::Home => Some(NavigationAction::ToTop),
        KeyCode::Char('G') | KeyCode::End => Some(NavigationAction::ToBottom),
        KeyCode::PageUp => Some(NavigationAction::PageUp),
        KeyCode::PageDown => Some(NavigationAction::PageDown),
        _ => None,
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &Session, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match translate_key(*key, state.mode) {
            Some(translated) => {
                log::debug!("Key {:?} in {:?} -> {:?}", key.code, state.mode, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("Unmapped key {:?} in {:?}", key.code, state.mode),
        }

        false // Raw keys never reach the reducer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        for mode in [Mode::Typing, Mode::Loading, Mode::Browsing, Mode::Error] {
            assert_eq!(
                translate_key(ctrl('c'), mode),
                Some(Action::Global(GlobalAction::Quit))
            );
        }
    }

    #[test]
    fn test_typing_keys() {
        assert_eq!(
            translate_key(key(KeyCode::Char('q')), Mode::Typing),
            Some(Action::TextInput(TextInputAction::Char('q')))
        );
        assert_eq!(
            translate_key(
                KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT),
                Mode::Typing
            ),
            Some(Action::TextInput(TextInputAction::Char('Q')))
        );
        assert_eq!(
            translate_key(ctrl('u'), Mode::Typing),
            Some(Action::TextInput(TextInputAction::ClearLine))
        );
        assert_eq!(
            translate_key(key(KeyCode::Enter), Mode::Typing),
            Some(Action::TextInput(TextInputAction::Confirm))
        );
        assert_eq!(translate_key(ctrl('x'), Mode::Typing), None);
        assert_eq!(translate_key(key(KeyCode::Esc), Mode::Typing), None);
    }

    #[test]
    fn test_loading_only_accepts_cancel() {
        assert_eq!(
            translate_key(key(KeyCode::Esc), Mode::Loading),
            Some(Action::Session(SessionAction::Cancel))
        );
        assert_eq!(translate_key(key(KeyCode::Enter), Mode::Loading), None);
        assert_eq!(translate_key(key(KeyCode::Char('q')), Mode::Loading), None);
    }

    #[test]
    fn test_browsing_keys() {
        let cases = [
            (KeyCode::Char('j'), NavigationAction::Next),
            (KeyCode::Down, NavigationAction::Next),
            (KeyCode::Char('k'), NavigationAction::Previous),
            (KeyCode::Up, NavigationAction::Previous),
            (KeyCode::Char('g'), NavigationAction::ToTop),
            (KeyCode::Char('G'), NavigationAction::ToBottom),
            (KeyCode::End, NavigationAction::ToBottom),
            (KeyCode::PageDown, NavigationAction::PageDown),
        ];
        for (code, nav) in cases {
            assert_eq!(
                translate_key(key(code), Mode::Browsing),
                Some(Action::Navigate(nav))
            );
        }
        assert_eq!(
            translate_key(key(KeyCode::Esc), Mode::Browsing),
            Some(Action::Session(SessionAction::Reset))
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('q')), Mode::Browsing),
            Some(Action::Global(GlobalAction::Quit))
        );
    }

    #[test]
    fn test_error_keys() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('r')] {
            assert_eq!(
                translate_key(key(code), Mode::Error),
                Some(Action::Session(SessionAction::Reset))
            );
        }
        assert_eq!(translate_key(key(KeyCode::Char('j')), Mode::Error), None);
    }

    #[test]
    fn test_consumes_raw_keys_and_queues_translation() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = Session::default();

        let raw = Action::Global(GlobalAction::KeyPressed(key(KeyCode::Char('a'))));
        assert!(!middleware.handle(&raw, &state, &dispatcher));
        assert_eq!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Char('a')))
        );

        // Unmapped keys are consumed without queuing anything
        let raw = Action::Global(GlobalAction::KeyPressed(key(KeyCode::F(5))));
        assert!(!middleware.handle(&raw, &state, &dispatcher));
        assert!(rx.try_recv().is_err());

        // Other actions pass through
        assert!(middleware.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
    }
}
