//! Thin synchronous wrapper around the `git` binary.
//!
//! Every operation builds a [`std::process::Command`], optionally pinned to a working
//! directory, and is attempted exactly once. Mutating commands inherit stdout and
//! stderr so the user sees git's own output.
//!
//! # Public API
//! - [`GitGateway`]: The operations the flows need from git
//! - [`GitRepo`]: [`GitGateway`] implementation that shells out to `git`

use crate::core::error::{GitCommandsError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Git operations used by the branch and commit flows.
pub trait GitGateway {
    /// `git rev-parse --is-inside-work-tree` exited with status zero
    fn is_inside_work_tree(&self) -> bool;

    /// `git branch --show-current`, trimmed. Empty on a detached HEAD.
    fn current_branch_name(&self) -> Result<String>;

    /// `git diff --name-only --cached` with blank lines removed. Never fails.
    fn staged_file_paths(&self) -> Vec<String>;

    /// `git checkout -b <name>`
    fn checkout_new_branch(&self, name: &str) -> Result<()>;

    /// `git commit -m <message> [flags...]`
    fn commit(&self, message: &str, flags: &[String]) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct GitRepo {
    workdir: Option<PathBuf>,
}

impl GitRepo {
    /// Run git in the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `workdir`
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn git_command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(workdir) = &self.workdir {
            cmd.current_dir(workdir);
        }
        cmd
    }

    /// Execute a git command with inherited output, failing on non-zero exit
    fn execute_git_command(&self, mut cmd: Command) -> Result<()> {
        let rendered = render_command(&cmd);
        log::debug!("Running {rendered}");

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GitCommandsError::git_spawn(&rendered, e))?;

        if !status.success() {
            return Err(GitCommandsError::git_command_failed(rendered, status));
        }

        Ok(())
    }
}

impl GitGateway for GitRepo {
    fn is_inside_work_tree(&self) -> bool {
        let mut cmd = self.git_command(["rev-parse", "--is-inside-work-tree"]);
        cmd.stdout(Stdio::null()).stderr(Stdio::inherit());

        match cmd.status() {
            Ok(status) => status.success(),
            Err(e) => {
                log::warn!("Failed to run git: {e}");
                false
            }
        }
    }

    fn current_branch_name(&self) -> Result<String> {
        let mut cmd = self.git_command(["branch", "--show-current"]);
        let rendered = render_command(&cmd);

        let output = cmd
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| GitCommandsError::git_spawn(&rendered, e))?;

        if !output.status.success() {
            return Err(GitCommandsError::git_command_failed(rendered, output.status));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn staged_file_paths(&self) -> Vec<String> {
        let mut cmd = self.git_command(["diff", "--name-only", "--cached"]);

        let output = match cmd.stderr(Stdio::null()).output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                log::debug!("git diff --cached exited with {}", output.status);
                return Vec::new();
            }
            Err(e) => {
                log::debug!("Failed to list staged files: {e}");
                return Vec::new();
            }
        };

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn checkout_new_branch(&self, name: &str) -> Result<()> {
        let cmd = self.git_command(["checkout", "-b", name]);
        self.execute_git_command(cmd)
    }

    fn commit(&self, message: &str, flags: &[String]) -> Result<()> {
        let mut cmd = self.git_command(["commit", "-m", message]);
        cmd.args(flags);
        self.execute_git_command(cmd)
    }
}

/// Render a command line for logs and error messages
fn render_command(cmd: &Command) -> String {
    let mut rendered = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        let arg = arg.to_string_lossy();
        rendered.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(&arg);
            rendered.push('"');
        } else {
            rendered.push_str(&arg);
        }
    }
    rendered
}
