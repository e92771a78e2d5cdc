use crate::core::{
    colors::Palette,
    error::{GitCommandsError, Result},
    git::GitGateway,
    print_command, print_success, render_template, TemplateContext, TEMPLATES,
};
use crate::flow::{CommitFlow, CommitRequest, FlowOutcome};
use crate::ui;

/// Repository facts read once before the commit screen opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSession {
    pub branch: String,
    pub staged_files: Vec<String>,
}

impl CommitSession {
    pub fn into_flow(self) -> CommitFlow {
        CommitFlow::new(self.branch, self.staged_files)
    }
}

/// Run the interactive commit flow and commit the staged changes.
pub fn execute_commit_flow(git: &impl GitGateway, palette: &Palette) -> Result<FlowOutcome> {
    let session = prepare_commit_session(git)?;
    let staged_count = session.staged_files.len();
    let mut flow = session.into_flow();

    let request = ui::run(&mut flow, palette)?;
    finish_commit_flow(git, request, staged_count)
}

/// Preconditions: inside a work tree with at least one staged file
pub fn prepare_commit_session(git: &impl GitGateway) -> Result<CommitSession> {
    if !git.is_inside_work_tree() {
        return Err(GitCommandsError::NotInGitRepo);
    }

    let staged_files = git.staged_file_paths();
    if staged_files.is_empty() {
        return Err(GitCommandsError::NoStagedFiles);
    }
    log::debug!("{} staged file(s)", staged_files.len());

    let branch = git.current_branch_name()?;
    Ok(CommitSession {
        branch,
        staged_files,
    })
}

pub fn finish_commit_flow(
    git: &impl GitGateway,
    request: Option<CommitRequest>,
    staged_count: usize,
) -> Result<FlowOutcome> {
    let Some(CommitRequest { message, flags }) = request else {
        log::debug!("Commit flow cancelled, no git command issued");
        return Ok(FlowOutcome::Cancelled);
    };

    let preview = render_template(
        TEMPLATES.command_preview,
        &TemplateContext {
            message: Some(&message),
            flags: Some(&flags.join(" ")),
            ..Default::default()
        },
    );
    print_command(preview.trim_end());
    git.commit(&message, &flags)?;

    let context = TemplateContext {
        n: Some(staged_count),
        ..Default::default()
    };
    print_success(&render_template(TEMPLATES.success_commit, &context));
    Ok(FlowOutcome::Dispatched)
}
