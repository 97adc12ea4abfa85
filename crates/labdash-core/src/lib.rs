//! Core launcher logic for labdash.
//!
//! Resolves the fixed install layout, defines the ports the launcher talks
//! through, and implements the probe → install → start sequence against
//! those ports. No process is ever spawned from this crate.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod launcher;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{LauncherConfig, PackageManagerCommand, RuntimeCommand};
pub use launcher::{InstallOutcome, LaunchError, LaunchOutcome, LaunchResult, Launcher};
pub use paths::{InstallLayout, PathError};
pub use ports::{
    CommandRunner, Diagnostic, DiagnosticSink, ExitStatus, Invocation, NoopProgress,
    ProgressReporter, RecordingDiagnostics, RunError, StdioMode, TracingDiagnostics,
};
