//! Core functionality shared by the branch and commit tools.
//!
//! This module provides configuration resolution, the git gateway, error handling,
//! logging setup and the styling and text used on screen.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod state;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitCommandsError, Result};

// === Git operations ===
// Gateway trait and the implementation that shells out to `git`
pub use git::{GitGateway, GitRepo};

// === Configuration ===
// Option lists resolved from `.git-commands.json` or built-in defaults
pub use state::{BoardOption, BranchTypeOption, Configuration, ListOption};

// === UI templates ===
// Template system for header, preview and success lines
pub use templates::{render_template, TemplateContext, Templates, TEMPLATES};

// === Color system ===
pub use colors::Palette;

// === Output formatting ===
// Messages printed once the full-screen UI has been torn down
pub use output::{print_command, print_error, print_success};
