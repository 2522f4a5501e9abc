use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use log::{debug, error};
use std::io;

/// Full-screen terminal session: raw mode, alternate screen, hidden cursor.
///
/// Restored by [`Terminal::restore`] or, failing that, on drop.
pub struct Terminal {
    active: bool,
}

impl Terminal {
    pub fn init() -> io::Result<Self> {
        enable_raw_mode()?;
        // from here on, drop undoes whatever was set up.
        let terminal = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        debug!("Terminal initialised");
        Ok(terminal)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        reset()?;
        debug!("Terminal restored");
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

fn reset() -> io::Result<()> {
    let screen = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

/// Puts the terminal back before the panic message is printed, otherwise it
/// would land on the alternate screen and vanish.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = reset();
        previous(info);
    }));
}
