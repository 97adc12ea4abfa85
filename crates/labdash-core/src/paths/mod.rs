//! Path utilities for the launcher's fixed install layout.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O - adapters report failures themselves
//! - Paths are fixed relative to the launcher; nothing here is configurable

mod error;
mod layout;

pub use error::PathError;
pub use layout::{
    APP_DIR_NAME, INSTALL_MARKER_DIR, InstallLayout, SERVER_ENTRY_RELATIVE, app_dir_candidates,
};
