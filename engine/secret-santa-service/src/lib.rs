//! Secret Santa Service Library
//!
//! Configuration loading, logging setup and the end-to-end run: load the
//! participant list, draw the cycle, then notify every giver.

use anyhow::{Context, Result};
use std::path::Path;

pub mod cli;
pub mod config;
pub mod logging;
pub mod service;

pub use cli::Cli;
pub use config::{LoggingConfig, ServiceConfig};
pub use logging::initialize_logging;
pub use service::{run, run_with_notifier, RunSummary};

/// Load configuration from an optional file and the environment
pub fn load_configuration(path: Option<&Path>) -> Result<ServiceConfig> {
    config::load_config(path).context("Failed to load service configuration")
}
