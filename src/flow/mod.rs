//! Interactive flow state machines.
//!
//! A flow only consumes key events and reports a [`Transition`]; drawing lives in
//! `crate::ui` and running git lives in `crate::commands`.

pub mod branch;
pub mod commit;
pub mod focus;
pub mod line_input;
pub mod option_list;

pub use branch::{BranchFlow, BranchRequest, BranchStep};
pub use commit::{CommitFlow, CommitFocus, CommitRequest};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding one key event to a flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<R> {
    Continue,
    Cancel,
    Submit(R),
}

/// How a flow ended, as seen by the entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Dispatched,
    Cancelled,
}

pub trait Flow {
    type Request;

    fn handle_key(&mut self, key: KeyEvent) -> Transition<Self::Request>;
}

pub fn is_escape(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Ctrl+C, which cancels from anywhere
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
