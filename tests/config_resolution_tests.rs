use git_commands::core::config::{find_config_file, resolve, CONFIG_FILE_NAME};
use git_commands::core::state::Configuration;
use git_commands::GitCommandsError;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{fixtures::*, repository::write_config};

#[cfg(test)]
mod config_resolution_tests {
    use super::*;

    #[test]
    fn test_config_three_levels_up_is_used() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        let start = home.path().join("work").join("project").join("src");
        fs::create_dir_all(&start)?;
        write_config(home.path(), FEAT_ONLY_CONFIG)?;

        let config = resolve(&start, home.path())?;
        assert_eq!(config.branch_types.len(), 1);
        assert_eq!(config.branch_types[0].code, "FEAT");
        assert!(config.boards.is_empty());
        Ok(())
    }

    #[test]
    fn test_no_file_anywhere_uses_builtin_boards() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        let start = home.path().join("repo");
        fs::create_dir_all(&start)?;

        let config = resolve(&start, home.path())?;
        assert_eq!(config, Configuration::default());
        assert!(config.has_boards());
        Ok(())
    }

    #[test]
    fn test_file_with_empty_boards_differs_from_no_file() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        write_config(home.path(), r#"{"branchTypes": [], "boards": []}"#)?;

        let config = resolve(home.path(), home.path())?;
        assert_eq!(config.branch_types, Configuration::default_branch_types());
        assert!(!config.has_boards());
        Ok(())
    }

    #[test]
    fn test_file_above_home_is_ignored() -> anyhow::Result<()> {
        let outer = TempDir::new()?;
        let home = outer.path().join("home");
        let start = home.join("repo");
        fs::create_dir_all(&start)?;
        write_config(outer.path(), MALFORMED_CONFIG)?;

        assert_eq!(find_config_file(&start, &home), None);
        assert_eq!(resolve(&start, &home)?, Configuration::default());
        Ok(())
    }

    #[test]
    fn test_found_malformed_file_is_an_error() -> anyhow::Result<()> {
        let home = TempDir::new()?;
        let path = write_config(home.path(), MALFORMED_CONFIG)?;

        match resolve(home.path(), home.path()) {
            Err(GitCommandsError::ConfigParse { path: reported, .. }) => {
                assert_eq!(reported.file_name(), path.file_name());
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, ".git-commands.json");
    }
}
