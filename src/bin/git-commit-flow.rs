use clap::Parser;
use git_commands::commands::execute_commit_flow;
use git_commands::core::{
    colors::Palette, error::Result, git::GitRepo, logging::init_logging, print_error,
};
use git_commands::ui::install_panic_hook;

#[derive(Parser)]
#[command(name = "git-commit-flow")]
#[command(about = "Interactively write a commit message prefilled from the branch name")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    install_panic_hook();

    match execute_commit_flow(&GitRepo::new(), &Palette::default()) {
        Ok(outcome) => log::debug!("Commit flow finished: {outcome:?}"),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
