//! git-commands - Interactive terminal tools for naming branches and writing commits.
//!
//! Two entry points share this library:
//! - `git-branch-flow` walks through branch type, board, ticket id and description,
//!   then runs `git checkout -b <type>/<ticket>/<description>`.
//! - `git-commit-flow` pre-fills a message from the current branch, collects extra
//!   flags and runs `git commit -m <message> [flags...]`.
//!
//! # Public API
//! - [`core`]: Configuration resolution, git gateway, errors, output and styling
//! - [`flow`]: Key-driven state machines for both flows
//! - [`ui`]: Full-screen rendering and the event loop
//! - [`commands`]: Entry points wiring preconditions, UI and git together

pub mod commands;
pub mod core;
pub mod flow;
pub mod ui;

// Re-export the core public API for external users
pub use core::{
    // Configuration
    BoardOption,
    BranchTypeOption,
    Configuration,
    // Git operations
    GitGateway,
    GitRepo,
    // Error handling
    GitCommandsError,
    Result,
};
pub use flow::{BranchRequest, CommitRequest, FlowOutcome};
