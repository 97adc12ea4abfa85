//! Check dependencies handler.
//!
//! Prints a status table for the runtime and package manager plus the
//! install marker, and fails when a required tool is missing.

use anyhow::Result;
use labdash_core::{InstallLayout, PackageManagerCommand, PathError, RuntimeCommand};
use labdash_runtime::{Dependency, DependencyStatus, check_launcher_dependencies};

use crate::error::CliError;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn format_dependency(dep: &Dependency) -> String {
    let status = match &dep.status {
        DependencyStatus::Present { version } => format!("{GREEN}✓ v{version}{RESET}"),
        DependencyStatus::Missing => format!("{RED}✗ missing{RESET}"),
    };
    format!("{:<12} {:<25} {}", dep.name, status, dep.description)
}

fn format_marker(layout: &Result<InstallLayout, PathError>) -> String {
    match layout {
        Ok(layout) if layout.dependencies_installed() => {
            format!("{GREEN}✓ node modules installed{RESET}")
        }
        Ok(_) => format!("{YELLOW}○ node modules will be installed on first start{RESET}"),
        Err(e) => format!("{RED}✗ {e}{RESET}"),
    }
}

/// Execute the check-deps command.
pub fn execute(
    runtime: &RuntimeCommand,
    package_manager: &PackageManagerCommand,
    layout: &Result<InstallLayout, PathError>,
) -> Result<()> {
    println!("{BOLD}Checking dashboard dependencies...{RESET}\n");

    let dependencies = check_launcher_dependencies(runtime, package_manager);
    for dep in &dependencies {
        println!("{}", format_dependency(dep));
    }
    println!("\n{}", format_marker(layout));

    let missing: Vec<&Dependency> = dependencies.iter().filter(|d| !d.is_present()).collect();
    if missing.is_empty() {
        return Ok(());
    }

    println!();
    for dep in &missing {
        println!("Install {} from {}", dep.name, dep.hint);
    }
    let names = missing
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(CliError::MissingDependencies(names).into())
}
