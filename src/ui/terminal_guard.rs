//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode and the alternate screen are restored when the guard drops,
//! whether the event loop returns normally, bails out with `?`, or panics
//! (with [`install_panic_hook`]).

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Switch the terminal into raw mode on the alternate screen.
    ///
    /// If entering the alternate screen fails, raw mode is undone before the
    /// error is returned.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Perform manual cleanup with error reporting. Drop becomes a no-op.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;
    stdout.flush()?;
    Ok(())
}

/// Install a panic hook that restores the terminal before the panic message
/// is printed. Call before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
