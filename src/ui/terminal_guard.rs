//! Terminal state guard that restores the terminal on drop.

use crate::core::error::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// RAII guard around raw mode and the alternate screen.
///
/// Restores the terminal on early returns via `?`, on normal scope exit, and (through
/// [`install_panic_hook`]) on panics.
pub struct TerminalGuard {
    active: AtomicBool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self {
            active: AtomicBool::new(true),
        })
    }

    pub fn cleanup() {
        let _ = disable_raw_mode();
        let _ = write_restore_sequence(&mut io::stdout());
    }

    /// True exactly once, for the first caller after the terminal was set up
    fn take_active(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.take_active() {
            Self::cleanup();
        }
    }
}

/// Leave the alternate screen and show the cursor again
fn write_restore_sequence(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    out.flush()
}

/// Restore the terminal before the panic message is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::cleanup();
        original_hook(panic_info);
    }));
}
