//! User-facing diagnostic sink.
//!
//! The launcher never prints directly. Advisory messages are handed to a
//! sink so the CLI can render them and tests can record them.

use std::sync::Mutex;

/// Advisory messages the launcher can emit. Neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The runtime is missing from the search path or not functional.
    RuntimeNotFound { product: String, url: String },
    /// The dependency install command failed.
    InstallFailed { command: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeNotFound { product, url } => write!(
                f,
                "Failed to find {product} ({url}). Make sure it is installed and the paths are set."
            ),
            Self::InstallFailed { command } => write!(f, "Failed to run {command}"),
        }
    }
}

/// Receives advisory diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics to `tracing` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    emitted: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn emitted(&self) -> Vec<Diagnostic> {
        self.emitted
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut guard) = self.emitted.lock() {
            guard.push(diagnostic.clone());
        }
    }
}
