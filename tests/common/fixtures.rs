//! Predefined repository and configuration scenarios

#![allow(dead_code)]

use super::repository::*;
use git_commands::core::error::Result;

pub const MALFORMED_CONFIG: &str = r#"{ "branchTypes": [ "#;

pub const FEAT_ONLY_CONFIG: &str = r#"{"branchTypes": [{"type": "FEAT", "description": "New feature"}]}"#;

pub const DUPLICATE_BOARDS_CONFIG: &str = r#"{
    "branchTypes": [{"type": "FEAT", "description": "x"}],
    "boards": [{"name": "IB", "description": "a"}, {"name": "IB", "description": "b"}]
}"#;

/// Repository whose last commit is in place and a second file is staged
pub fn create_repo_with_staged_file() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "staged.txt", "staged content\n")?;
    git_add(&repo.path, "staged.txt")?;
    Ok(repo)
}

/// Repository with a committed file modified but nothing staged
pub fn create_repo_with_unstaged_change() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    create_file(&repo.path, "initial.txt", "changed\n")?;
    Ok(repo)
}
