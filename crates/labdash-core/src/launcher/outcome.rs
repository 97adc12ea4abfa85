//! Structured results of the launcher steps.

use crate::ports::{ExitStatus, RunError};

/// Result of the dependency install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// An install marker was present; nothing was run.
    AlreadyInstalled,
    /// The install command ran and exited zero.
    Installed,
    /// The install command failed. The launcher carries on regardless.
    Failed { error: RunError },
    /// Ctrl-C arrived while the install was running.
    Interrupted,
}

impl InstallOutcome {
    /// Exit status of a failed install, when the command got far enough to exit.
    pub const fn failed_status(&self) -> Option<ExitStatus> {
        match self {
            Self::Failed {
                error: RunError::NonZeroExit { status, .. },
            } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result of a full launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The runtime probe failed; nothing else ran.
    RuntimeUnavailable,
    /// Ctrl-C arrived during the runtime probe; nothing else ran.
    ProbeInterrupted,
    /// The server ran and exited on its own.
    ServerExited {
        install: InstallOutcome,
        status: ExitStatus,
    },
    /// Ctrl-C ended the launch, either during install or while the server ran.
    Interrupted { install: InstallOutcome },
}

impl LaunchOutcome {
    /// Outcome of the install step, if it was reached.
    pub const fn install(&self) -> Option<&InstallOutcome> {
        match self {
            Self::RuntimeUnavailable | Self::ProbeInterrupted => None,
            Self::ServerExited { install, .. } | Self::Interrupted { install } => Some(install),
        }
    }
}
