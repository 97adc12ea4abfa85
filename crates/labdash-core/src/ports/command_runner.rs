//! Command runner trait definition.
//!
//! This port is the launcher's only way to touch external processes.
//! Implementations own search-path lookup, spawning, stdio wiring and
//! interrupt handling; the launcher only reacts to the error kinds below.

use async_trait::async_trait;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stdout discarded, stderr inherited.
    Quiet,
    /// All streams inherited from the launcher.
    Inherit,
}

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, resolved on the search path by the runner.
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: Option<PathBuf>,
    pub stdio: StdioMode,
}

impl Invocation {
    /// Create an invocation with inherited stdio and no working directory.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            stdio: StdioMode::Inherit,
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command inside `dir`.
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Discard the child's stdout.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.stdio = StdioMode::Quiet;
        self
    }

    /// Whether the argument list contains `arg`.
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Platform-neutral process exit status.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status of a process killed by a signal.
    pub const fn signaled() -> Self {
        Self { code: None }
    }

    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Errors a [`CommandRunner`] can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    /// The program could not be resolved on the search path.
    #[error("{program}: command not found")]
    NotFound { program: String },

    /// The program ran and exited unsuccessfully.
    #[error("{program} failed ({status})")]
    NonZeroExit { program: String, status: ExitStatus },

    /// An interactive interrupt arrived while waiting on the child.
    #[error("interrupted")]
    Interrupted,

    /// Spawning or waiting failed for another OS reason.
    #[error("{program}: {message}")]
    Io { program: String, message: String },
}

/// Runs external commands on behalf of the launcher.
///
/// `Ok` is only returned for a zero exit status; every other outcome maps to
/// a [`RunError`] kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ExitStatus, RunError>;
}
