//! Interactive calculator TUI
//!
//! Buttons respond to both the keyboard and mouse clicks on the keypad.
//!
//! Run with: cargo run --example calculator_tui --features tui

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use keypad_calculator::tui::{render, CalculatorApp, CalculatorUi, InputHandler, KeyAction, Keypad};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();
    let keypad = Keypad::new();

    loop {
        let frame_area = terminal.draw(|f| render(&app, f))?.area;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Button(button) => app.handle_event(button),
                KeyAction::Quit => app.quit(),
                KeyAction::None => app.release_keys(),
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(event::MouseButton::Left) {
                    let keypad_area = CalculatorUi::keypad_area(frame_area);
                    if let Some(button) = keypad.hit_test(keypad_area, mouse.column, mouse.row) {
                        app.handle_event(button);
                    }
                } else {
                    app.release_keys();
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
