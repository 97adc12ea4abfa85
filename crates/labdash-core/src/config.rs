//! Launcher configuration value object.
//!
//! Built once per invocation and passed explicitly to every launcher step.
//! Command names are fields rather than literals so tests can point them
//! elsewhere; the filesystem layout itself stays fixed.

use crate::paths::{InstallLayout, PathError};
use std::path::Path;

/// Default runtime executable.
pub const DEFAULT_RUNTIME_PROGRAM: &str = "node";
/// Flag that makes the runtime print its version and exit.
pub const DEFAULT_RUNTIME_VERSION_FLAG: &str = "-v";
/// Default package manager executable.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";
/// Production-only dependency install arguments.
pub const DEFAULT_INSTALL_ARGS: [&str; 2] = ["install", "--production"];
/// Product name shown when the runtime is missing.
pub const RUNTIME_PRODUCT_NAME: &str = "NodeJS";
/// Where users are sent to obtain the runtime.
pub const RUNTIME_DOWNLOAD_URL: &str = "https://nodejs.org/";
/// Label of the dependency install progress section.
pub const INSTALL_SECTION_LABEL: &str = "Installing node modules";

/// The external runtime used to probe and run the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    pub program: String,
    pub version_flag: String,
    pub product_name: String,
    pub download_url: String,
}

impl Default for RuntimeCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_RUNTIME_PROGRAM.to_string(),
            version_flag: DEFAULT_RUNTIME_VERSION_FLAG.to_string(),
            product_name: RUNTIME_PRODUCT_NAME.to_string(),
            download_url: RUNTIME_DOWNLOAD_URL.to_string(),
        }
    }
}

/// The package manager used to install the application's dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerCommand {
    pub program: String,
    pub install_args: Vec<String>,
}

impl PackageManagerCommand {
    /// Short name used in diagnostics, e.g. `npm install`.
    pub fn display_name(&self) -> String {
        match self.install_args.first() {
            Some(sub) => format!("{} {sub}", self.program),
            None => self.program.clone(),
        }
    }
}

impl Default for PackageManagerCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PACKAGE_MANAGER.to_string(),
            install_args: DEFAULT_INSTALL_ARGS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Everything one launcher invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub layout: InstallLayout,
    pub runtime: RuntimeCommand,
    pub package_manager: PackageManagerCommand,
}

impl LauncherConfig {
    /// Create a config with default commands for an already resolved layout.
    pub fn new(layout: InstallLayout) -> Self {
        Self {
            layout,
            runtime: RuntimeCommand::default(),
            package_manager: PackageManagerCommand::default(),
        }
    }

    /// Resolve the layout relative to `anchor` and use default commands.
    pub fn for_anchor(anchor: &Path) -> Result<Self, PathError> {
        InstallLayout::resolve(anchor).map(Self::new)
    }

    /// Resolve the layout relative to the running executable.
    pub fn from_current_exe() -> Result<Self, PathError> {
        InstallLayout::from_current_exe().map(Self::new)
    }

    /// Override the runtime command.
    #[must_use]
    pub fn with_runtime(mut self, runtime: RuntimeCommand) -> Self {
        self.runtime = runtime;
        self
    }

    /// Override the package manager command.
    #[must_use]
    pub fn with_package_manager(mut self, package_manager: PackageManagerCommand) -> Self {
        self.package_manager = package_manager;
        self
    }
}
