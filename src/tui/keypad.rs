//! Button panel for the TUI
//!
//! An 18-button grid mirroring the physical panel layout. Buttons can be
//! clicked with the mouse or highlighted when the matching key is typed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonEvent, Operator};

/// A single panel button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The label printed on the button
    pub label: &'static str,
    /// The event this button emits
    pub event: ButtonEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, event: ButtonEvent, row: usize, col: usize) -> Self {
        Self {
            label,
            event,
            row,
            col,
            pressed: false,
        }
    }
}

/// The panel layout - 5 rows, 4 columns, two empty cells
/// ```text
/// [AC ] [DEL] [ / ] [ * ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard panel layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new("AC", ButtonEvent::Clear, 0, 0),
            KeypadButton::new("DEL", ButtonEvent::Delete, 0, 1),
            KeypadButton::new("/", ButtonEvent::Operator(Operator::Divide), 0, 2),
            KeypadButton::new("*", ButtonEvent::Operator(Operator::Multiply), 0, 3),
            KeypadButton::new("7", ButtonEvent::Digit(7), 1, 0),
            KeypadButton::new("8", ButtonEvent::Digit(8), 1, 1),
            KeypadButton::new("9", ButtonEvent::Digit(9), 1, 2),
            KeypadButton::new("-", ButtonEvent::Operator(Operator::Subtract), 1, 3),
            KeypadButton::new("4", ButtonEvent::Digit(4), 2, 0),
            KeypadButton::new("5", ButtonEvent::Digit(5), 2, 1),
            KeypadButton::new("6", ButtonEvent::Digit(6), 2, 2),
            KeypadButton::new("+", ButtonEvent::Operator(Operator::Add), 2, 3),
            KeypadButton::new("1", ButtonEvent::Digit(1), 3, 0),
            KeypadButton::new("2", ButtonEvent::Digit(2), 3, 1),
            KeypadButton::new("3", ButtonEvent::Digit(3), 3, 2),
            KeypadButton::new("=", ButtonEvent::Equals, 3, 3),
            KeypadButton::new("0", ButtonEvent::Digit(0), 4, 0),
            KeypadButton::new(".", ButtonEvent::Decimal, 4, 1),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button at a grid position, if that cell holds one
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.label == label)
    }

    /// Highlights the button with the given label, releasing all others
    pub fn highlight_label(&mut self, label: &str) {
        for btn in &mut self.buttons {
            btn.pressed = btn.label == label;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Converts a click position to the event of the button under it.
    ///
    /// Accounts for the widget border; clicks on the border, outside the
    /// area, or on an empty cell yield `None`.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonEvent> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.button_at(row, col).map(|b| b.event)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if inner.width < 4 || inner.height < 5 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.event {
                    ButtonEvent::Digit(_) | ButtonEvent::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    ButtonEvent::Operator(_) => Style::default().fg(Color::Yellow),
                    ButtonEvent::Equals => Style::default().fg(Color::Green),
                    ButtonEvent::Clear | ButtonEvent::Delete => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
