use crate::core::error::{GitCommandsError, Result};
use crate::core::git::GitGateway;
use std::cell::RefCell;

/// In-memory [`GitGateway`] that records the mutating calls it receives.
#[derive(Debug, Default)]
pub struct RecordingGit {
    pub inside_work_tree: bool,
    pub branch: String,
    pub staged: Vec<String>,
    pub fail_dispatch: bool,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingGit {
    pub fn in_repo() -> Self {
        Self {
            inside_work_tree: true,
            ..Default::default()
        }
    }

    pub fn on_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    pub fn with_staged(mut self, paths: &[&str]) -> Self {
        self.staged = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_dispatch = true;
        self
    }

    pub fn recorded(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    fn record(&self, argv: Vec<String>) -> Result<()> {
        let command = format!("git {}", argv.join(" "));
        self.calls.borrow_mut().push(argv);
        if self.fail_dispatch {
            return Err(GitCommandsError::GitCommandFailed {
                command,
                status: "exit status: 128".to_string(),
            });
        }
        Ok(())
    }
}

impl GitGateway for RecordingGit {
    fn is_inside_work_tree(&self) -> bool {
        self.inside_work_tree
    }

    fn current_branch_name(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn staged_file_paths(&self) -> Vec<String> {
        self.staged.clone()
    }

    fn checkout_new_branch(&self, name: &str) -> Result<()> {
        self.record(vec!["checkout".into(), "-b".into(), name.into()])
    }

    fn commit(&self, message: &str, flags: &[String]) -> Result<()> {
        let mut argv = vec!["commit".to_string(), "-m".to_string(), message.to_string()];
        argv.extend(flags.iter().cloned());
        self.record(argv)
    }
}
