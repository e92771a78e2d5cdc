//! Full-screen rendering and the synchronous event loop.

pub mod branch_view;
pub mod commit_view;
pub mod terminal_guard;
pub mod widgets;

pub use terminal_guard::{install_panic_hook, TerminalGuard};

use crate::core::colors::Palette;
use crate::core::error::Result;
use crate::flow::{Flow, Transition};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;

/// A flow that knows how to draw itself
pub trait Screen: Flow {
    fn render(&mut self, frame: &mut Frame, palette: &Palette);
}

/// Drive `screen` until it submits or is cancelled.
///
/// The terminal is restored before this returns, so the caller can run git and
/// print to the normal screen. `Ok(None)` means the user cancelled.
pub fn run<S: Screen>(screen: &mut S, palette: &Palette) -> Result<Option<S::Request>> {
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        terminal.draw(|frame| screen.render(frame, palette))?;

        // Resize and other events only trigger a redraw
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match screen.handle_key(key) {
            Transition::Continue => {}
            Transition::Cancel => return Ok(None),
            Transition::Submit(request) => return Ok(Some(request)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer rows joined with newlines, trailing spaces kept
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
