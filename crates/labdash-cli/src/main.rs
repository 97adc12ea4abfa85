//! CLI entry point - the composition root.
//!
//! Resolves the install layout once, then dispatches to a handler.

use std::process::ExitCode;

use clap::Parser;

use labdash_cli::{Cli, CliError, Commands, handlers, logging};
use labdash_core::{LauncherConfig, PackageManagerCommand, RuntimeCommand};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command.unwrap_or(Commands::Start)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Start => {
            let config = LauncherConfig::from_current_exe().map_err(CliError::from)?;
            handlers::launch::execute(config).await?;
        }
        Commands::Paths { json } => {
            let config = LauncherConfig::from_current_exe().map_err(CliError::from)?;
            handlers::paths::execute(&config.layout, json)?;
        }
        Commands::CheckDeps => {
            let layout = labdash_core::InstallLayout::from_current_exe();
            handlers::check_deps::execute(
                &RuntimeCommand::default(),
                &PackageManagerCommand::default(),
                &layout,
            )?;
        }
    }
    Ok(())
}
