//! Child process execution for the launcher.

mod runner;
mod shutdown;

pub use runner::TokioCommandRunner;
