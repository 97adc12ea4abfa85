//! Progress reporting abstraction for long-running launcher steps.
//!
//! Only the dependency install is long enough to warrant a progress
//! section. Adapters render it (the CLI uses a spinner); tests ignore it.

/// Trait for receiving progress updates during a labelled section.
pub trait ProgressReporter: Send + Sync {
    /// Called when a section starts (e.g. "Installing node modules").
    fn start(&self, message: &str);

    /// Called when the section completes successfully.
    fn finish(&self, message: &str);

    /// Called when the section fails.
    fn finish_with_error(&self, message: &str);
}

/// A no-op progress reporter that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _message: &str) {}
    fn finish(&self, _message: &str) {}
    fn finish_with_error(&self, _message: &str) {}
}
