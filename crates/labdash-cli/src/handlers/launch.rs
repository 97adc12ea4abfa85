//! Launch handler: the default command.
//!
//! Wires the real runner, terminal diagnostics and spinner into a
//! `Launcher` and runs the full sequence.

use std::sync::Arc;

use anyhow::Result;
use labdash_core::{CommandRunner, LaunchOutcome, Launcher, LauncherConfig};
use labdash_runtime::{CliProgress, TokioCommandRunner};
use tracing::{debug, info};

use crate::error::CliError;
use crate::presentation::TerminalDiagnostics;

/// Execute the launch with the real process runner.
pub async fn execute(config: LauncherConfig) -> Result<LaunchOutcome> {
    execute_with_runner(config, Arc::new(TokioCommandRunner::new())).await
}

/// Execute the launch with an injected runner.
pub async fn execute_with_runner(
    config: LauncherConfig,
    runner: Arc<dyn CommandRunner>,
) -> Result<LaunchOutcome> {
    debug!(app_dir = %config.layout.app_dir.display(), "Launching dashboard");
    let launcher = Launcher::new(config, runner)
        .with_diagnostics(Arc::new(TerminalDiagnostics::new()))
        .with_progress(Arc::new(CliProgress::new()));

    let outcome = launcher.start_server().await.map_err(CliError::from)?;
    match &outcome {
        LaunchOutcome::RuntimeUnavailable => debug!("Runtime unavailable, server not started"),
        LaunchOutcome::ProbeInterrupted => debug!("Interrupted during runtime probe"),
        LaunchOutcome::ServerExited { status, .. } => info!(%status, "Dashboard server exited"),
        LaunchOutcome::Interrupted { .. } => debug!("Launch interrupted"),
    }
    Ok(outcome)
}
