//! `CommandRunner` implementation on top of `tokio::process`.
//!
//! Resolves the program on `PATH`, wires stdio, then waits for the child
//! while listening for Ctrl-C. An interrupt stops the child gracefully and
//! surfaces as [`RunError::Interrupted`].

use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use labdash_core::{CommandRunner, ExitStatus, Invocation, RunError, StdioMode};
use tokio::process::Command;
use tokio::signal;
use tracing::{debug, warn};

use super::shutdown::{SHUTDOWN_GRACE, stop_child};

/// Runs launcher commands as real child processes.
#[derive(Debug, Clone)]
pub struct TokioCommandRunner {
    shutdown_grace: Duration,
}

impl TokioCommandRunner {
    pub const fn new() -> Self {
        Self {
            shutdown_grace: SHUTDOWN_GRACE,
        }
    }

    /// Override how long an interrupted child may take to exit.
    #[must_use]
    pub const fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

enum Waited {
    Exited(io::Result<std::process::ExitStatus>),
    Interrupted,
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExitStatus, RunError> {
        let program = resolve_program(&invocation.program)?;
        debug!(
            program = %program.display(),
            command = %invocation,
            "Spawning command"
        );

        let mut cmd = Command::new(&program);
        cmd.args(&invocation.args).kill_on_drop(true);
        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
        }
        if invocation.stdio == StdioMode::Quiet {
            cmd.stdout(Stdio::null());
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| spawn_error(&invocation.program, &e))?;

        let waited = tokio::select! {
            status = child.wait() => Waited::Exited(status),
            () = interrupt() => Waited::Interrupted,
        };

        let status = match waited {
            Waited::Exited(status) => status.map_err(|e| RunError::Io {
                program: invocation.program.clone(),
                message: e.to_string(),
            })?,
            Waited::Interrupted => {
                debug!(command = %invocation, "Interrupt received, stopping child");
                if let Err(e) = stop_child(&mut child, self.shutdown_grace).await {
                    warn!(error = %e, "Failed to stop interrupted child");
                }
                return Err(RunError::Interrupted);
            }
        };

        if status.success() {
            return Ok(status.into());
        }
        if killed_by_interrupt(&status) {
            return Err(RunError::Interrupted);
        }
        Err(RunError::NonZeroExit {
            program: invocation.program.clone(),
            status: status.into(),
        })
    }
}

/// Look `program` up on the search path.
fn resolve_program(program: &str) -> Result<PathBuf, RunError> {
    which::which(program).map_err(|e| {
        debug!(program, error = %e, "Command not found on PATH");
        RunError::NotFound {
            program: program.to_string(),
        }
    })
}

fn spawn_error(program: &str, err: &io::Error) -> RunError {
    if err.kind() == io::ErrorKind::NotFound {
        RunError::NotFound {
            program: program.to_string(),
        }
    } else {
        RunError::Io {
            program: program.to_string(),
            message: err.to_string(),
        }
    }
}

/// Resolves when Ctrl-C arrives; never resolves if the handler cannot be installed.
async fn interrupt() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// The terminal delivers Ctrl-C to the whole foreground group, so the child
/// may die of SIGINT before our own listener fires.
#[cfg(unix)]
fn killed_by_interrupt(status: &std::process::ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(nix::sys::signal::Signal::SIGINT as i32)
}

#[cfg(not(unix))]
const fn killed_by_interrupt(_status: &std::process::ExitStatus) -> bool {
    false
}
