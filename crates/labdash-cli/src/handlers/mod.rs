//! Command handlers.
//!
//! Handlers are thin: they take an already resolved configuration, call
//! into `labdash-core` / `labdash-runtime`, and format output for the
//! terminal. No launcher logic lives here.

pub mod check_deps;
pub mod launch;
pub mod paths;
