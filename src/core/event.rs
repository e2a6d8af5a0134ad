//! Button event alphabet
//!
//! The entire external input surface of the calculator is this event enum:
//! a frontend reports "button pressed with label X" and nothing else.

use serde::{Deserialize, Serialize};

use super::operator::Operator;

/// A single button press on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonEvent {
    /// A digit button (0-9)
    Digit(u8),
    /// The decimal point button
    Decimal,
    /// One of the four operator buttons
    Operator(Operator),
    /// The equals button
    Equals,
    /// The all-clear button
    Clear,
    /// The single-character delete button
    Delete,
}

impl ButtonEvent {
    /// Maps a panel button label to an event.
    ///
    /// Unknown labels yield `None`; the caller decides whether to ignore
    /// them (the panel adapter does).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "AC" => Some(Self::Clear),
            "DEL" => Some(Self::Delete),
            _ => {
                if let Some(op) = Operator::from_symbol(label) {
                    return Some(Self::Operator(op));
                }
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Returns the panel label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_digits() {
        for d in 0..=9u8 {
            assert_eq!(ButtonEvent::from_label(&d.to_string()), Some(ButtonEvent::Digit(d)));
        }
    }

    #[test]
    fn test_from_label_operators() {
        assert_eq!(
            ButtonEvent::from_label("+"),
            Some(ButtonEvent::Operator(Operator::Add))
        );
        assert_eq!(
            ButtonEvent::from_label("-"),
            Some(ButtonEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            ButtonEvent::from_label("*"),
            Some(ButtonEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            ButtonEvent::from_label("/"),
            Some(ButtonEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_label_controls() {
        assert_eq!(ButtonEvent::from_label("."), Some(ButtonEvent::Decimal));
        assert_eq!(ButtonEvent::from_label("="), Some(ButtonEvent::Equals));
        assert_eq!(ButtonEvent::from_label("AC"), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_label("DEL"), Some(ButtonEvent::Delete));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(ButtonEvent::from_label(""), None);
        assert_eq!(ButtonEvent::from_label("x"), None);
        assert_eq!(ButtonEvent::from_label("10"), None);
        assert_eq!(ButtonEvent::from_label("%"), None);
    }

    #[test]
    fn test_label_roundtrip() {
        let events = [
            ButtonEvent::Digit(0),
            ButtonEvent::Digit(9),
            ButtonEvent::Decimal,
            ButtonEvent::Operator(Operator::Add),
            ButtonEvent::Operator(Operator::Divide),
            ButtonEvent::Equals,
            ButtonEvent::Clear,
            ButtonEvent::Delete,
        ];
        for event in events {
            assert_eq!(ButtonEvent::from_label(&event.label()), Some(event));
        }
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let events = vec![
            ButtonEvent::Digit(7),
            ButtonEvent::Operator(Operator::Multiply),
            ButtonEvent::Digit(6),
            ButtonEvent::Equals,
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<ButtonEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, back);
    }
}
