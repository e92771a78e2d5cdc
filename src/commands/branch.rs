use crate::core::{
    colors::Palette,
    config,
    dirs::{get_home_directory, get_start_directory},
    error::{GitCommandsError, Result},
    git::GitGateway,
    print_command, print_success, render_template, TemplateContext, TEMPLATES,
};
use crate::flow::{BranchFlow, BranchRequest, FlowOutcome};
use crate::ui;
use std::path::Path;

/// Run the interactive branch-naming flow and create the branch.
pub fn execute_branch_flow(git: &impl GitGateway, palette: &Palette) -> Result<FlowOutcome> {
    let start_dir = get_start_directory()?;
    let home_dir = get_home_directory()?;
    let mut flow = prepare_branch_flow(git, &start_dir, &home_dir)?;

    let request = ui::run(&mut flow, palette)?;
    finish_branch_flow(git, request)
}

/// Everything that has to succeed before the UI is shown
pub fn prepare_branch_flow(
    git: &impl GitGateway,
    start_dir: &Path,
    home_dir: &Path,
) -> Result<BranchFlow> {
    if !git.is_inside_work_tree() {
        return Err(GitCommandsError::NotInGitRepo);
    }
    let config = config::resolve(start_dir, home_dir)?;
    Ok(BranchFlow::new(&config))
}

/// Dispatch the submitted branch name, or do nothing when the flow was cancelled
pub fn finish_branch_flow(
    git: &impl GitGateway,
    request: Option<BranchRequest>,
) -> Result<FlowOutcome> {
    let Some(BranchRequest { branch_name }) = request else {
        log::debug!("Branch flow cancelled, no git command issued");
        return Ok(FlowOutcome::Cancelled);
    };

    print_command(&format!("git checkout -b {branch_name}"));
    git.checkout_new_branch(&branch_name)?;

    let context = TemplateContext {
        branch_name: Some(&branch_name),
        ..Default::default()
    };
    print_success(&render_template(TEMPLATES.success_branch, &context));
    Ok(FlowOutcome::Dispatched)
}
