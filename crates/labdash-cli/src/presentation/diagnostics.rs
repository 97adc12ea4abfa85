//! Terminal rendering of launcher diagnostics.

use std::io::IsTerminal;

use labdash_core::{Diagnostic, DiagnosticSink};

// ANSI escape codes
const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// Prints diagnostics to stderr, highlighted when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDiagnostics {
    color: bool,
}

impl TerminalDiagnostics {
    pub fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for TerminalDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for TerminalDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::debug!(?diagnostic, "Diagnostic emitted");
        eprintln!("{}", render(diagnostic, self.color));
    }
}

fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Render a diagnostic, optionally with ANSI styling.
pub fn render(diagnostic: &Diagnostic, color: bool) -> String {
    match diagnostic {
        Diagnostic::RuntimeNotFound { product, url } => format!(
            "Failed to find {} ({}). Make sure it is installed and the paths are set.",
            styled(product, &format!("{BOLD}{YELLOW}"), color),
            styled(url, UNDERLINE, color),
        ),
        Diagnostic::InstallFailed { command } => format!(
            "Failed to run {}",
            styled(command, &format!("{BOLD}{YELLOW}"), color)
        ),
    }
}
