//! Process runtime and OS-level concerns for labdash.
//!
//! Provides the real [`CommandRunner`](labdash_core::CommandRunner) used by
//! the CLI, graceful child shutdown, the terminal progress spinner and the
//! dependency probe behind `check-deps`.
#![deny(unused_crate_dependencies)]

// tempfile is only used by the integration tests
#[cfg(test)]
use tempfile as _;

pub mod process;
pub mod progress;
pub mod system;

// Re-export the main CommandRunner implementation
pub use process::TokioCommandRunner;

#[cfg(feature = "cli")]
pub use progress::CliProgress;

pub use system::{Dependency, DependencyStatus, check_launcher_dependencies};
