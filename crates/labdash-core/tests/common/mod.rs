//! Common test utilities.
//!
//! Provides a scripted command runner that records every invocation and an
//! on-disk install layout fixture.

use std::collections::VecDeque;
use std::fs;
use std::sync::Mutex;

use async_trait::async_trait;
use labdash_core::{CommandRunner, ExitStatus, Invocation, LauncherConfig, RunError};
use tempfile::TempDir;

/// Runner that replays scripted results and records what it was asked to run.
#[derive(Default)]
pub struct ScriptedRunner {
    results: Mutex<VecDeque<Result<ExitStatus, RunError>>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(results: impl IntoIterator<Item = Result<ExitStatus, RunError>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExitStatus, RunError> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected invocation: {invocation}"))
    }
}

/// Temporary install root containing an `app/` directory.
pub struct InstallFixture {
    pub root: TempDir,
}

impl InstallFixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("app").join("server").join("server")).unwrap();
        fs::write(
            root.path().join("app").join("server").join("server").join("app.js"),
            "// server\n",
        )
        .unwrap();
        Self { root }
    }

    pub fn with_marker(self) -> Self {
        fs::create_dir_all(self.root.path().join("app").join("node_modules")).unwrap();
        self
    }

    pub fn config(&self) -> LauncherConfig {
        LauncherConfig::for_anchor(self.root.path()).unwrap()
    }
}
