//! Command-line adapter for the labdash launcher.
//!
//! `main.rs` is the composition root; everything it wires together lives
//! in this library so it can be tested.
#![deny(unused_crate_dependencies)]

// Binary-only dependencies
use dotenvy as _;
use tokio as _;

// async-trait is only used by the integration tests
#[cfg(test)]
use async_trait as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
