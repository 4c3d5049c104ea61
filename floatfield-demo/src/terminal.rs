use std::{
    io::{self, Stdout},
    sync::Once,
};

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

static RESTORE_ON_PANIC: Once = Once::new();

/// The demo's terminal session: raw mode, alternate screen, mouse presses
/// for taps and focus reports for blurring the form. Undone on drop and on
/// panic.
pub struct FormTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl FormTerminal {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().wrap_err("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        let entered = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        );
        if let Err(err) = entered {
            leave();
            return Err(err).wrap_err("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave();
                return Err(err).wrap_err("failed to initialize terminal");
            }
        };
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave();
                previous(info);
            }));
        });
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        let drawn = self.terminal.draw(render);
        drawn.wrap_err("failed to draw form")?;
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal
            .resize(Rect::new(0, 0, width, height))
            .wrap_err("failed to resize terminal")
    }
}

impl Drop for FormTerminal {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave();
    }
}

fn leave() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    );
}
