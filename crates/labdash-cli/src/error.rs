//! CLI-specific error types and mappings.
//!
//! Maps launcher errors to exit codes. Everything the launch sequence treats
//! as an outcome (missing runtime, failed install, interrupt) exits 0 and
//! never reaches this type.

use labdash_core::{LaunchError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The install is broken: the bundled application is missing.
    #[error("Broken installation: {0}")]
    Layout(String),

    /// The server process could not be started.
    #[error("{0}")]
    Launch(String),

    /// A required external tool is missing.
    #[error("Missing dependencies: {0}")]
    MissingDependencies(String),
}

impl CliError {
    /// Map error to appropriate exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Layout(_) => 70,              // EX_SOFTWARE
            Self::Launch(_) => 71,              // EX_OSERR
            Self::MissingDependencies(_) => 69, // EX_UNAVAILABLE
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Layout(err.to_string())
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::Layout(path_err) => path_err.into(),
            LaunchError::ServerSpawn(_) => Self::Launch(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labdash_core::RunError;
    use std::path::PathBuf;

    #[test]
    fn layout_errors_are_software_errors() {
        let err = CliError::from(PathError::AppDirMissing {
            candidates: vec![PathBuf::from("/x/app")],
        });
        assert_eq!(err.exit_code(), 70);
        assert!(err.to_string().contains("/x/app"));
    }

    #[test]
    fn spawn_failures_are_os_errors() {
        let err = CliError::from(LaunchError::ServerSpawn(RunError::NotFound {
            program: "node".to_string(),
        }));
        assert_eq!(err.exit_code(), 71);
        assert_eq!(
            err.to_string(),
            "Failed to start server: node: command not found"
        );
    }
}
