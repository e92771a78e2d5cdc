use crate::core::error::{GitCommandsError, Result};
use std::path::PathBuf;

/// Directory the configuration walk starts from
pub fn get_start_directory() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Directory the configuration walk stops at
pub fn get_home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(GitCommandsError::HomeDirectoryNotFound)
}
