//! Error types for the launch sequence.

use crate::paths::PathError;
use crate::ports::RunError;
use thiserror::Error;

/// Failures that stop a launch.
///
/// Runtime absence, install failures and interrupts are outcomes, not
/// errors; see [`super::LaunchOutcome`].
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The install layout could not be resolved.
    #[error(transparent)]
    Layout(#[from] PathError),

    /// The server process could not be started.
    #[error("Failed to start server: {0}")]
    ServerSpawn(RunError),
}

/// Result type alias for launch operations
pub type LaunchResult<T> = Result<T, LaunchError>;
