//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitCommandsError`] which covers every failure mode of the
//! branch and commit flows. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the variants that carry context.
//!
//! # Public API
//! - [`GitCommandsError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitCommandsError>`
//!
//! # Error Categories
//! - **Preconditions**: Not inside a work tree, nothing staged
//! - **Configuration**: A config file was read but is malformed or lists invalid options
//! - **Git execution**: A git subprocess could not be started or exited non-zero
//! - **Terminal / IO**: Raw mode, alternate screen, event reading
//!
//! Cancelling a flow is not an error; see [`crate::flow::FlowOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-commands
#[derive(Error, Debug)]
pub enum GitCommandsError {
    // Preconditions
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("No staged files found. Stage changes with 'git add' first")]
    NoStagedFiles,

    // Configuration errors
    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file '{path}' lists {kind} '{code}' more than once")]
    DuplicateOption {
        path: PathBuf,
        kind: &'static str,
        code: String,
    },

    #[error("Config file '{path}' contains a {kind} with an empty code")]
    EmptyOptionCode { path: PathBuf, kind: &'static str },

    // Git execution errors
    #[error("Failed to run '{command}': {source}")]
    GitSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' failed with {status}")]
    GitCommandFailed { command: String, status: String },

    // Terminal and other IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using GitCommandsError
pub type Result<T> = std::result::Result<T, GitCommandsError>;

impl GitCommandsError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate option error
    pub fn duplicate_option(
        path: impl Into<PathBuf>,
        kind: &'static str,
        code: impl Into<String>,
    ) -> Self {
        Self::DuplicateOption {
            path: path.into(),
            kind,
            code: code.into(),
        }
    }

    /// Create an empty option code error
    pub fn empty_option_code(path: impl Into<PathBuf>, kind: &'static str) -> Self {
        Self::EmptyOptionCode {
            path: path.into(),
            kind,
        }
    }

    /// Create a git spawn error
    pub fn git_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::GitSpawn {
            command: command.into(),
            source,
        }
    }

    /// Create a git command failed error
    pub fn git_command_failed(
        command: impl Into<String>,
        status: std::process::ExitStatus,
    ) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            status: status.to_string(),
        }
    }

    /// Whether the error was raised by the configuration resolver
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse { .. }
                | Self::DuplicateOption { .. }
                | Self::EmptyOptionCode { .. }
        )
    }
}
