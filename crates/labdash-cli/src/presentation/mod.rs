//! Terminal presentation helpers.

pub mod diagnostics;

pub use diagnostics::TerminalDiagnostics;
