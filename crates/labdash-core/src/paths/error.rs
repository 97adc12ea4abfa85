//! Path-related error types.
//!
//! Provides semantic errors for install layout resolution without exposing
//! adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving the launcher's install layout.
#[derive(Debug, Error)]
pub enum PathError {
    /// The bundled application directory is missing from every candidate.
    ///
    /// This is a broken packaging invariant, not a runtime condition.
    #[error(
        "Bundled application directory not found (looked in: {})",
        display_candidates(candidates)
    )]
    AppDirMissing { candidates: Vec<PathBuf> },

    /// The location of the running executable could not be determined.
    #[error("Cannot determine launcher location: {0}")]
    CurrentExe(String),

    /// The executable path has no parent directory to anchor on.
    #[error("Launcher path {0} has no parent directory")]
    NoAnchor(PathBuf),
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
