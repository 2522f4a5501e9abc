use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
}

pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        // raw mode swallows SIGINT, so ctrl-c arrives as a key.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Drains every pending terminal event without waiting.
pub fn poll_action() -> io::Result<KeyAction> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if handle_key(key) == KeyAction::Quit {
                return Ok(KeyAction::Quit);
            }
        }
    }
    Ok(KeyAction::None)
}
