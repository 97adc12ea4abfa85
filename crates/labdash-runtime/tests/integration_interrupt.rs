//! Ctrl-C delivered to the launcher while a child runs.
//!
//! Kept in its own test binary: the SIGINT goes to the whole test process,
//! so any runner waiting in parallel would see it too.
#![cfg(unix)]

use std::time::{Duration, Instant};

use labdash_core::{CommandRunner, Invocation, RunError};
use labdash_runtime::TokioCommandRunner;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use tokio::signal::unix::{SignalKind, signal};

#[tokio::test]
async fn ctrl_c_stops_the_child_and_reports_interrupted() {
    // Keeps the test process alive should SIGINT arrive before the runner listens.
    let _sigint = signal(SignalKind::interrupt()).unwrap();

    tokio::spawn(async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        kill(Pid::this(), Signal::SIGINT).unwrap();
    });

    let started = Instant::now();
    let result = TokioCommandRunner::new()
        .with_shutdown_grace(Duration::from_secs(2))
        .run(&Invocation::new("sleep").arg("10"))
        .await;

    assert_eq!(result, Err(RunError::Interrupted));
    assert!(started.elapsed() < Duration::from_secs(5));
}
