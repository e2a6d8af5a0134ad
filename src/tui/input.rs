//! Keyboard input handling
//!
//! Maps raw crossterm key events onto the calculator's button alphabet so
//! typing works exactly like clicking the panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{ButtonEvent, Operator};

/// Actions the keyboard can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a panel button
    Button(ButtonEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_to_action(c),
            KeyCode::Backspace => KeyAction::Button(ButtonEvent::Delete),
            KeyCode::Enter => KeyAction::Button(ButtonEvent::Equals),
            KeyCode::Esc => KeyAction::Button(ButtonEvent::Clear),
            _ => KeyAction::None,
        }
    }

    fn char_to_action(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Button(ButtonEvent::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(&c.to_string()) {
            return KeyAction::Button(ButtonEvent::Operator(op));
        }
        match c {
            '.' => KeyAction::Button(ButtonEvent::Decimal),
            '=' => KeyAction::Button(ButtonEvent::Equals),
            'c' | 'C' => KeyAction::Button(ButtonEvent::Clear),
            'q' | 'Q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
