//! Configuration resolution for the selectable branch types and boards.
//!
//! The resolver looks for [`CONFIG_FILE_NAME`] starting at the working directory and
//! walking up through its ancestors, stopping after the home directory has been
//! checked. The first file found wins. When no file is found the built-in defaults
//! from [`Configuration::default`] are used.
//!
//! # Found file vs. no file
//! - An empty or absent `branchTypes` list in a found file falls back to the built-in
//!   branch types, so the first step always has something to select.
//! - An empty or absent `boards` list in a found file means "no boards": the board
//!   step is skipped. Only a missing file yields the built-in boards.
//!
//! # Failure modes
//! - Metadata errors while walking (permissions, broken links) count as "not here".
//! - A candidate that cannot be read is skipped as well; it only counts as found once
//!   its contents are in hand.
//! - A file that was read but cannot be parsed is a fatal error.

use crate::core::error::{GitCommandsError, Result};
use crate::core::state::{BoardOption, BranchTypeOption, Configuration};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name recognized by the resolver
pub const CONFIG_FILE_NAME: &str = ".git-commands.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    branch_types: Option<Vec<RawBranchType>>,
    #[serde(default)]
    boards: Option<Vec<RawBoard>>,
}

#[derive(Debug, Deserialize)]
struct RawBranchType {
    #[serde(rename = "type", default)]
    code: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawBoard {
    #[serde(rename = "name", default)]
    code: String,
    #[serde(default)]
    description: String,
}

/// Resolve the configuration for a run started in `start_dir`.
pub fn resolve(start_dir: &Path, home_dir: &Path) -> Result<Configuration> {
    match read_nearest_config(start_dir, home_dir) {
        Some(FoundConfig { path, contents }) => {
            log::info!("Found config file at {}", path.display());
            parse_config(&contents, &path)
        }
        None => {
            log::info!("No config file found, using default config");
            Ok(Configuration::default())
        }
    }
}

/// A config file that was located and read successfully
#[derive(Debug)]
pub struct FoundConfig {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Path of the nearest readable config file between `start_dir` and `home_dir`.
pub fn find_config_file(start_dir: &Path, home_dir: &Path) -> Option<PathBuf> {
    read_nearest_config(start_dir, home_dir).map(|found| found.path)
}

/// Read the nearest config file between `start_dir` and `home_dir` (both inclusive).
///
/// A candidate only counts as found once its contents have been read; anything that
/// cannot be read is skipped and the walk moves on to the parent. When `home_dir` is
/// not an ancestor of `start_dir` the walk ends at the filesystem root.
pub fn read_nearest_config(start_dir: &Path, home_dir: &Path) -> Option<FoundConfig> {
    let start = canonical_or_original(start_dir);
    let home = canonical_or_original(home_dir);

    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if let Some(contents) = read_regular_file(&candidate) {
            return Some(FoundConfig {
                path: candidate,
                contents,
            });
        }
        if dir == home {
            break;
        }
    }

    None
}

/// Parse the contents of a found config file. `path` is only used for error messages.
pub fn parse_config(contents: &[u8], path: &Path) -> Result<Configuration> {
    let raw: RawConfig =
        serde_json::from_slice(contents).map_err(|e| GitCommandsError::config_parse(path, e))?;

    let mut branch_types = raw
        .branch_types
        .unwrap_or_default()
        .into_iter()
        .map(|t| BranchTypeOption::new(t.code, t.description))
        .collect::<Vec<_>>();
    ensure_unique_codes(path, "branch type", branch_types.iter().map(|t| t.code.as_str()))?;
    if branch_types.is_empty() {
        log::debug!("Config file lists no branch types, using the built-in ones");
        branch_types = Configuration::default_branch_types();
    }

    let boards = raw
        .boards
        .unwrap_or_default()
        .into_iter()
        .map(|b| BoardOption::new(b.code, b.description))
        .collect::<Vec<_>>();
    ensure_unique_codes(path, "board", boards.iter().map(|b| b.code.as_str()))?;

    Ok(Configuration {
        branch_types,
        boards,
    })
}

fn ensure_unique_codes<'a>(
    path: &Path,
    kind: &'static str,
    codes: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for code in codes {
        if code.trim().is_empty() {
            return Err(GitCommandsError::empty_option_code(path, kind));
        }
        if !seen.insert(code) {
            return Err(GitCommandsError::duplicate_option(path, kind, code));
        }
    }
    Ok(())
}

fn read_regular_file(path: &Path) -> Option<Vec<u8>> {
    let is_file = match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::debug!("Skipping {}: {e}", path.display());
            }
            false
        }
    };
    if !is_file {
        return None;
    }

    match std::fs::read(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            log::debug!("Skipping unreadable {}: {e}", path.display());
            None
        }
    }
}

fn canonical_or_original(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
