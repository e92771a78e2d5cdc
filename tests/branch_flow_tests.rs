use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod branch_flow_tests {
    use super::*;

    #[test]
    fn test_outside_git_repo_exits_with_error() -> anyhow::Result<()> {
        let dir = PlainDir::new()?;

        let mut cmd = Command::cargo_bin("git-branch-flow")?;
        cmd.current_dir(dir.path())
            .env("GIT_CEILING_DIRECTORIES", dir.ceiling())
            .env("HOME", dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(assertions::error_prefix())
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_malformed_config_exits_before_ui() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        write_config(repo.path(), MALFORMED_CONFIG)?;

        let mut cmd = Command::cargo_bin("git-branch-flow")?;
        cmd.current_dir(repo.path())
            .env("HOME", repo.path())
            .assert()
            .failure()
            .code(1)
            .stderr(assertions::config_parse_error());

        assert_eq!(local_branches(repo.path())?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed_config_in_parent_directory_is_found() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        let nested = repo.path().join("services").join("api");
        std::fs::create_dir_all(&nested)?;
        write_config(repo.path(), MALFORMED_CONFIG)?;

        let mut cmd = Command::cargo_bin("git-branch-flow")?;
        cmd.current_dir(&nested)
            .env("HOME", repo.path())
            .assert()
            .failure()
            .code(1)
            .stderr(assertions::config_parse_error());

        Ok(())
    }

    #[test]
    fn test_duplicate_board_codes_are_reported() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        write_config(repo.path(), DUPLICATE_BOARDS_CONFIG)?;

        let mut cmd = Command::cargo_bin("git-branch-flow")?;
        cmd.current_dir(repo.path())
            .env("HOME", repo.path())
            .assert()
            .failure()
            .code(1)
            .stderr(assertions::duplicate_option("IB"));

        Ok(())
    }

    #[test]
    fn test_help_describes_tool() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-branch-flow")?;
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("branch"))
            .stdout(predicate::str::contains("--debug"));

        Ok(())
    }
}
