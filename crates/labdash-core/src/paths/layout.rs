//! Install layout resolution.
//!
//! The launcher ships next to the bundled dashboard application. Everything
//! it needs is a fixed relative path from its own install location, so the
//! whole layout is resolved in one call and never mutated afterwards.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::error::PathError;

/// Name of the bundled application directory.
pub const APP_DIR_NAME: &str = "app";

/// Directory whose presence means dependencies are already installed.
pub const INSTALL_MARKER_DIR: &str = "node_modules";

/// Server entry point, relative to the application directory.
pub const SERVER_ENTRY_RELATIVE: [&str; 3] = ["server", "server", "app.js"];

/// All filesystem locations the launcher consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallLayout {
    /// Directory the launcher is installed in (the resolution anchor).
    pub install_root: PathBuf,
    /// Resolved bundled application directory.
    pub app_dir: PathBuf,
    /// Install marker candidates, in lookup order.
    pub install_markers: [PathBuf; 2],
    /// Script the runtime is asked to execute.
    pub server_entry: PathBuf,
}

impl InstallLayout {
    /// Resolve the layout relative to `anchor`.
    ///
    /// Prefers `<anchor>/app`, falling back to `<anchor>/../app`.
    pub fn resolve(anchor: &Path) -> Result<Self, PathError> {
        let app_dir = resolve_app_dir(anchor)?;
        debug!("Resolved application directory: {}", app_dir.display());
        Ok(Self::with_app_dir(anchor, app_dir))
    }

    /// Resolve the layout anchored on the running executable's directory.
    pub fn from_current_exe() -> Result<Self, PathError> {
        let exe = env::current_exe().map_err(|e| PathError::CurrentExe(e.to_string()))?;
        let anchor = exe
            .parent()
            .ok_or_else(|| PathError::NoAnchor(exe.clone()))?;
        Self::resolve(anchor)
    }

    fn with_app_dir(anchor: &Path, app_dir: PathBuf) -> Self {
        let parent = app_dir.parent().unwrap_or(&app_dir);
        let install_markers = [
            app_dir.join(INSTALL_MARKER_DIR),
            parent.join(INSTALL_MARKER_DIR),
        ];
        let server_entry = SERVER_ENTRY_RELATIVE
            .iter()
            .fold(app_dir.clone(), |path, part| path.join(part));

        Self {
            install_root: anchor.to_path_buf(),
            app_dir,
            install_markers,
            server_entry,
        }
    }

    /// Whether any install marker directory exists.
    pub fn dependencies_installed(&self) -> bool {
        self.install_markers.iter().any(|marker| marker.is_dir())
    }
}

/// Candidate application directories, in preference order.
pub fn app_dir_candidates(anchor: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![anchor.join(APP_DIR_NAME)];
    if let Some(parent) = anchor.parent() {
        candidates.push(parent.join(APP_DIR_NAME));
    }
    candidates
}

fn resolve_app_dir(anchor: &Path) -> Result<PathBuf, PathError> {
    let candidates = app_dir_candidates(anchor);
    if let Some(found) = candidates.iter().find(|candidate| candidate.is_dir()) {
        return Ok(found.clone());
    }
    Err(PathError::AppDirMissing { candidates })
}

impl std::fmt::Display for InstallLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "install_root = {}", self.install_root.display())?;
        writeln!(f, "app_dir = {}", self.app_dir.display())?;
        writeln!(f, "install_marker = {}", self.install_markers[0].display())?;
        writeln!(
            f,
            "install_marker_fallback = {}",
            self.install_markers[1].display()
        )?;
        write!(f, "server_entry = {}", self.server_entry.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefers_app_dir_next_to_anchor() {
        let temp = TempDir::new().unwrap();
        let anchor = temp.path().join("bin");
        fs::create_dir_all(anchor.join("app")).unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();

        let layout = InstallLayout::resolve(&anchor).unwrap();
        assert_eq!(layout.app_dir, anchor.join("app"));
        assert!(layout.app_dir.is_dir());
    }

    #[test]
    fn falls_back_to_parent_app_dir() {
        let temp = TempDir::new().unwrap();
        let anchor = temp.path().join("bin");
        fs::create_dir_all(&anchor).unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();

        let layout = InstallLayout::resolve(&anchor).unwrap();
        assert_eq!(layout.app_dir, temp.path().join("app"));
    }

    #[test]
    fn missing_app_dir_is_structural_error() {
        let temp = TempDir::new().unwrap();
        let anchor = temp.path().join("bin");
        fs::create_dir_all(&anchor).unwrap();

        let err = InstallLayout::resolve(&anchor).unwrap_err();
        match err {
            PathError::AppDirMissing { candidates } => {
                assert_eq!(candidates, app_dir_candidates(&anchor));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn a_file_named_app_does_not_count() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app"), b"not a dir").unwrap();

        assert!(InstallLayout::resolve(temp.path()).is_err());
    }

    #[test]
    fn derived_paths_hang_off_app_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();

        let layout = InstallLayout::resolve(temp.path()).unwrap();
        let app = temp.path().join("app");
        assert_eq!(layout.install_root, temp.path());
        assert_eq!(layout.install_markers[0], app.join("node_modules"));
        assert_eq!(layout.install_markers[1], temp.path().join("node_modules"));
        assert_eq!(
            layout.server_entry,
            app.join("server").join("server").join("app.js")
        );
    }

    #[test]
    fn either_marker_counts_as_installed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        let layout = InstallLayout::resolve(temp.path()).unwrap();
        assert!(!layout.dependencies_installed());

        fs::create_dir_all(temp.path().join("node_modules")).unwrap();
        assert!(layout.dependencies_installed());
    }

    #[test]
    fn display_is_key_value() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        let layout = InstallLayout::resolve(temp.path()).unwrap();

        let text = layout.to_string();
        assert!(text.starts_with("install_root = "));
        assert!(text.contains("server_entry = "));
    }
}
