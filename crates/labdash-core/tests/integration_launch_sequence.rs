//! End-to-end launch sequences against a scripted runner.
//!
//! These tests observe the exact order of external commands the launcher
//! asks for, without spawning anything.

mod common;

use std::sync::Arc;

use common::{InstallFixture, ScriptedRunner};
use labdash_core::{
    Diagnostic, ExitStatus, InstallOutcome, LaunchOutcome, Launcher, RecordingDiagnostics,
    RunError, StdioMode,
};

fn not_found(program: &str) -> Result<ExitStatus, RunError> {
    Err(RunError::NotFound {
        program: program.to_string(),
    })
}

/// Runtime present, marker absent: probe, one install, then the server.
#[tokio::test]
async fn fresh_install_probes_installs_and_spawns() {
    let fixture = InstallFixture::new();
    let runner = Arc::new(ScriptedRunner::new([
        Ok(ExitStatus::SUCCESS),
        Ok(ExitStatus::SUCCESS),
        Ok(ExitStatus::SUCCESS),
    ]));
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let launcher = Launcher::new(fixture.config(), runner.clone())
        .with_diagnostics(diagnostics.clone());

    let outcome = launcher.start_server().await.unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].to_string(), "node -v");
    assert_eq!(calls[1].to_string(), "npm install --production");
    assert_eq!(
        calls[1].working_dir.as_deref(),
        Some(fixture.root.path().join("app").as_path())
    );
    assert_eq!(calls[2].program, "node");
    assert_eq!(calls[2].stdio, StdioMode::Inherit);
    assert_eq!(
        calls[2].args,
        vec![
            fixture
                .root
                .path()
                .join("app")
                .join("server")
                .join("server")
                .join("app.js")
                .into_os_string()
        ]
    );
    assert_eq!(
        outcome,
        LaunchOutcome::ServerExited {
            install: InstallOutcome::Installed,
            status: ExitStatus::SUCCESS,
        }
    );
    assert!(diagnostics.emitted().is_empty());
}

/// Runtime absent: one probe, one diagnostic, nothing else.
#[tokio::test]
async fn missing_runtime_stops_after_probe() {
    let fixture = InstallFixture::new();
    let runner = Arc::new(ScriptedRunner::new([not_found("node")]));
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let launcher = Launcher::new(fixture.config(), runner.clone())
        .with_diagnostics(diagnostics.clone());

    let outcome = launcher.start_server().await.unwrap();

    assert_eq!(outcome, LaunchOutcome::RuntimeUnavailable);
    assert_eq!(runner.calls().len(), 1);
    assert!(matches!(
        diagnostics.emitted().as_slice(),
        [Diagnostic::RuntimeNotFound { .. }]
    ));
}

/// With the marker on disk, the second launch goes straight to the server.
#[tokio::test]
async fn existing_marker_skips_install() {
    let fixture = InstallFixture::new().with_marker();
    let runner = Arc::new(ScriptedRunner::new([
        Ok(ExitStatus::SUCCESS),
        Err(RunError::Interrupted),
    ]));
    let launcher = Launcher::new(fixture.config(), runner.clone());

    let outcome = launcher.start_server().await.unwrap();

    assert_eq!(
        outcome,
        LaunchOutcome::Interrupted {
            install: InstallOutcome::AlreadyInstalled
        }
    );
    let programs: Vec<_> = runner.calls().into_iter().map(|c| c.program).collect();
    assert_eq!(programs, vec!["node", "node"]);
}

/// A missing package manager is tolerated like any other install failure.
#[tokio::test]
async fn missing_package_manager_still_starts_server() {
    let fixture = InstallFixture::new();
    let runner = Arc::new(ScriptedRunner::new([
        Ok(ExitStatus::SUCCESS),
        not_found("npm"),
        Ok(ExitStatus::SUCCESS),
    ]));
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let launcher = Launcher::new(fixture.config(), runner.clone())
        .with_diagnostics(diagnostics.clone());

    let outcome = launcher.start_server().await.unwrap();

    assert_eq!(runner.calls().len(), 3);
    assert!(outcome.install().is_some_and(InstallOutcome::is_failed));
    assert_eq!(
        diagnostics.emitted(),
        vec![Diagnostic::InstallFailed {
            command: "npm install".to_string()
        }]
    );
}
