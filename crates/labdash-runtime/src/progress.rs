//! Terminal progress for launcher sections.
//!
//! # Feature Flags
//!
//! - `cli`: Enables `CliProgress`, an `indicatif` spinner. Without it only
//!   the core crate's `NoopProgress` is available.

#[cfg(feature = "cli")]
mod cli_progress {
    use indicatif::{ProgressBar, ProgressStyle};
    use labdash_core::ProgressReporter;
    use std::sync::Mutex;
    use std::time::Duration;

    const TICK_INTERVAL: Duration = Duration::from_millis(120);

    /// Spinner shown while a section (e.g. the dependency install) runs.
    pub struct CliProgress {
        spinner: Mutex<Option<ProgressBar>>,
    }

    impl CliProgress {
        pub fn new() -> Self {
            Self {
                spinner: Mutex::new(None),
            }
        }

        fn create_spinner() -> ProgressBar {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
            {
                pb.set_style(style);
            }
            pb.enable_steady_tick(TICK_INTERVAL);
            pb
        }

        fn take(&self) -> Option<ProgressBar> {
            self.spinner.lock().ok().and_then(|mut guard| guard.take())
        }
    }

    impl Default for CliProgress {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProgressReporter for CliProgress {
        fn start(&self, message: &str) {
            let pb = Self::create_spinner();
            pb.set_message(message.to_string());
            if let Ok(mut guard) = self.spinner.lock() {
                if let Some(previous) = guard.replace(pb) {
                    previous.finish_and_clear();
                }
            }
        }

        fn finish(&self, message: &str) {
            if let Some(pb) = self.take() {
                pb.finish_with_message(format!("{message}... done"));
            }
        }

        fn finish_with_error(&self, message: &str) {
            if let Some(pb) = self.take() {
                pb.abandon_with_message(format!("{message}... failed"));
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn finish_without_start_is_harmless() {
            let progress = CliProgress::new();
            progress.finish("Installing node modules");
            progress.finish_with_error("Installing node modules");
        }

        #[test]
        fn start_then_finish_clears_spinner() {
            let progress = CliProgress::new();
            progress.start("Installing node modules");
            progress.finish("Installing node modules");
            assert!(progress.take().is_none());
        }
    }
}

#[cfg(feature = "cli")]
pub use cli_progress::CliProgress;
