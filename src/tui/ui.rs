//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{Keypad, KeypadWidget};

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Full-screen calculator widget: display, keypad, help sidebar
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
    keypad: Keypad,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the UI widget, highlighting the last pressed button
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        let mut keypad = Keypad::new();
        if let Some(label) = app.last_pressed() {
            keypad.highlight_label(label);
        }
        Self { app, keypad }
    }

    /// The keypad area used for mouse hit testing, given the full frame area
    #[must_use]
    pub fn keypad_area(area: Rect) -> Rect {
        let chunks = horizontal_chunks(area);
        chunks.get(1).copied().unwrap_or(area)
    }

    /// The keypad model backing this UI
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.app.snapshot();

        let lines = vec![
            Line::from(Span::styled(
                snapshot.previous_line,
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Right),
            Line::from(Span::styled(
                snapshot.current_line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_chunks(area);
        if h_chunks.len() < 3 {
            return;
        }

        self.render_display(h_chunks[0], buf);
        KeypadWidget::new(&self.keypad).render(h_chunks[1], buf);
        self.render_help(h_chunks[2], buf);
    }
}

fn horizontal_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Display
            Constraint::Length(22), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Title for the panel window
pub const TITLE: &str = " Keypad Calculator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter digits"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("Bksp", "Delete"),
    ("Esc", "All clear"),
    ("Click", "Press button"),
    ("Ctrl+C", "Quit"),
];
