//! Port definitions (trait abstractions) for external systems.
//!
//! # Design Rules
//!
//! - No `tokio::process` or `std::process::Command` in any signature
//! - One narrow runner interface for every external command
//! - Terminal rendering lives in adapters, never behind these traits

pub mod command_runner;
pub mod diagnostics;
pub mod progress;

#[cfg(test)]
pub use command_runner::MockCommandRunner;
pub use command_runner::{CommandRunner, ExitStatus, Invocation, RunError, StdioMode};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingDiagnostics, TracingDiagnostics};
pub use progress::{NoopProgress, ProgressReporter};
