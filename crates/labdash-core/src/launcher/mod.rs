//! Bootstrap launcher.
//!
//! Linear sequence, no branching back:
//!
//! ```text
//! ProbeRuntime -> {fail: Stop}
//!              -> {ok: EnsureDependencies -> SpawnServer -> {Exited | Interrupted} -> Stop}
//! ```
//!
//! Layout resolution happens before a `Launcher` exists (see
//! [`LauncherConfig`]). All process work goes through the injected
//! [`CommandRunner`].

mod error;
mod outcome;

pub use error::{LaunchError, LaunchResult};
pub use outcome::{InstallOutcome, LaunchOutcome};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{INSTALL_SECTION_LABEL, LauncherConfig};
use crate::ports::{
    CommandRunner, Diagnostic, DiagnosticSink, Invocation, NoopProgress, ProgressReporter,
    RunError, TracingDiagnostics,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuntimeProbe {
    Available,
    Unavailable,
    Interrupted,
}

/// Drives one bootstrap-and-launch sequence.
pub struct Launcher {
    config: LauncherConfig,
    runner: Arc<dyn CommandRunner>,
    diagnostics: Arc<dyn DiagnosticSink>,
    progress: Arc<dyn ProgressReporter>,
}

impl Launcher {
    /// Create a launcher that reports diagnostics via `tracing` only.
    pub fn new(config: LauncherConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            runner,
            diagnostics: Arc::new(TracingDiagnostics),
            progress: Arc::new(NoopProgress),
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub const fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Check that the runtime is on the search path and functional.
    ///
    /// Never errors: a missing or broken runtime emits one diagnostic and
    /// yields `false`.
    pub async fn verify_runtime(&self) -> bool {
        self.probe_runtime().await == RuntimeProbe::Available
    }

    async fn probe_runtime(&self) -> RuntimeProbe {
        let runtime = &self.config.runtime;
        let probe = Invocation::new(&runtime.program)
            .arg(&runtime.version_flag)
            .current_dir(&self.config.layout.install_root)
            .quiet();

        debug!(command = %probe, "Probing runtime");
        match self.runner.run(&probe).await {
            Ok(_) => RuntimeProbe::Available,
            Err(RunError::Interrupted) => {
                info!("Runtime probe interrupted");
                RuntimeProbe::Interrupted
            }
            Err(err) => {
                debug!(error = %err, "Runtime probe failed");
                self.diagnostics.emit(&Diagnostic::RuntimeNotFound {
                    product: runtime.product_name.clone(),
                    url: runtime.download_url.clone(),
                });
                RuntimeProbe::Unavailable
            }
        }
    }

    /// Install production dependencies unless an install marker exists.
    ///
    /// A failed install is reported and returned, never raised: the server
    /// start is attempted anyway.
    pub async fn ensure_dependencies(&self) -> InstallOutcome {
        let layout = &self.config.layout;
        if layout.dependencies_installed() {
            debug!("Install marker present, skipping dependency install");
            return InstallOutcome::AlreadyInstalled;
        }

        let package_manager = &self.config.package_manager;
        let install = Invocation::new(&package_manager.program)
            .args(&package_manager.install_args)
            .current_dir(&layout.app_dir)
            .quiet();

        info!(command = %install, dir = %layout.app_dir.display(), "Installing dependencies");
        self.progress.start(INSTALL_SECTION_LABEL);

        match self.runner.run(&install).await {
            Ok(_) => {
                self.progress.finish(INSTALL_SECTION_LABEL);
                InstallOutcome::Installed
            }
            Err(RunError::Interrupted) => {
                self.progress.finish_with_error(INSTALL_SECTION_LABEL);
                InstallOutcome::Interrupted
            }
            Err(error) => {
                self.progress.finish_with_error(INSTALL_SECTION_LABEL);
                warn!(error = %error, "Dependency install failed, starting server anyway");
                self.diagnostics.emit(&Diagnostic::InstallFailed {
                    command: package_manager.display_name(),
                });
                InstallOutcome::Failed { error }
            }
        }
    }

    /// Run the full sequence and block until the server exits.
    ///
    /// Returns `RuntimeUnavailable` without spawning anything when the probe
    /// fails, or `ProbeInterrupted` when Ctrl-C cut the probe short. Ctrl-C
    /// while the server runs yields `Interrupted`.
    pub async fn start_server(&self) -> LaunchResult<LaunchOutcome> {
        match self.probe_runtime().await {
            RuntimeProbe::Available => {}
            RuntimeProbe::Unavailable => return Ok(LaunchOutcome::RuntimeUnavailable),
            RuntimeProbe::Interrupted => return Ok(LaunchOutcome::ProbeInterrupted),
        }

        let install = self.ensure_dependencies().await;
        if install == InstallOutcome::Interrupted {
            return Ok(LaunchOutcome::Interrupted { install });
        }

        let entry = &self.config.layout.server_entry;
        let server = Invocation::new(&self.config.runtime.program).arg(entry);

        info!(entry = %entry.display(), "Starting dashboard server");
        match self.runner.run(&server).await {
            Ok(status) => Ok(LaunchOutcome::ServerExited { install, status }),
            Err(RunError::NonZeroExit { status, .. }) => {
                warn!(%status, "Dashboard server exited unsuccessfully");
                Ok(LaunchOutcome::ServerExited { install, status })
            }
            Err(RunError::Interrupted) => {
                info!("Dashboard server interrupted");
                Ok(LaunchOutcome::Interrupted { install })
            }
            Err(err) => Err(LaunchError::ServerSpawn(err)),
        }
    }
}
