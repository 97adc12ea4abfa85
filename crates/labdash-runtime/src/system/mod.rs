//! System probe for the launcher's external dependencies.
//!
//! Backs the `check-deps` command: reports whether the configured runtime
//! and package manager are present, and their versions.

mod commands;

pub use commands::{get_command_version, get_package_manager_version, get_runtime_version};

use labdash_core::{PackageManagerCommand, RuntimeCommand};

/// Presence of one external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    Present { version: String },
    Missing,
}

/// One row of the dependency report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub description: String,
    /// Where to get it when missing.
    pub hint: String,
    pub status: DependencyStatus,
}

impl Dependency {
    pub const fn is_present(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }
}

fn status_of(version: Option<String>) -> DependencyStatus {
    version.map_or(DependencyStatus::Missing, |version| {
        DependencyStatus::Present { version }
    })
}

/// Probe the runtime and package manager the launcher will use.
///
/// Works without a resolved install layout, so it can diagnose a broken
/// installation.
pub fn check_launcher_dependencies(
    runtime: &RuntimeCommand,
    package_manager: &PackageManagerCommand,
) -> Vec<Dependency> {
    vec![
        Dependency {
            name: runtime.program.clone(),
            description: "Runs the dashboard server".to_string(),
            hint: runtime.download_url.clone(),
            status: status_of(get_runtime_version(
                &runtime.program,
                &runtime.version_flag,
            )),
        },
        Dependency {
            name: package_manager.program.clone(),
            description: "Installs the dashboard's dependencies".to_string(),
            hint: runtime.download_url.clone(),
            status: status_of(get_package_manager_version(&package_manager.program)),
        },
    ]
}
