use clap::Parser;
use git_commands::commands::execute_branch_flow;
use git_commands::core::{
    colors::Palette, config::CONFIG_FILE_NAME, error::Result, git::GitRepo,
    logging::init_logging, print_error,
};
use git_commands::ui::install_panic_hook;

#[derive(Parser)]
#[command(name = "git-branch-flow")]
#[command(about = "Interactively name and create a <type>/<ticket>/<description> branch")]
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

    match execute_branch_flow(&GitRepo::new(), &Palette::default()) {
        Ok(outcome) => log::debug!("Branch flow finished: {outcome:?}"),
        Err(e) => {
            print_error(&e.to_string());
            if e.is_configuration_error() {
                eprintln!("Fix or remove the {CONFIG_FILE_NAME} file to continue.\n");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
