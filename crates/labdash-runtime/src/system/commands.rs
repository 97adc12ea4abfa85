//! Command version extraction.
//!
//! These functions run a tool's version flag and pull a version string out
//! of its output.

use std::process::Command;

/// Run `cmd version_flag` and return the first non-empty output line.
pub fn get_command_version(cmd: &str, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Some tools print their version on stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}

/// Get the runtime version, `node -v` style.
pub fn get_runtime_version(program: &str, version_flag: &str) -> Option<String> {
    // "v20.10.0" -> "20.10.0"
    get_command_version(program, version_flag).map(|v| normalize_version(&v))
}

/// Get the package manager version, `npm --version` style.
pub fn get_package_manager_version(program: &str) -> Option<String> {
    // "10.2.3"
    get_command_version(program, "--version").map(|v| normalize_version(&v))
}

fn normalize_version(raw: &str) -> String {
    raw.trim().trim_start_matches('v').to_string()
}
