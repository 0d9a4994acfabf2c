//! Secret Santa
//!
//! Loads the participant list, draws a single gift cycle through the group and
//! notifies every giver of who they drew.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};

use secret_santa_service::config::validate_config;
use secret_santa_service::{initialize_logging, load_configuration, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration comes first, it decides how logging is set up
    let mut config = load_configuration(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    validate_config(&config).context("Invalid configuration")?;

    initialize_logging(&config.logging)?;
    info!("Starting Secret Santa v{}", env!("CARGO_PKG_VERSION"));

    let summary = run(&config)?;

    if cli.show {
        for assignment in &summary.cycle {
            println!("{assignment}");
        }
    }

    if !summary.is_complete() {
        error!("Could not notify: {}", summary.failed.join(", "));
        bail!(
            "{} of {} notifications failed",
            summary.failed.len(),
            summary.participants
        );
    }

    info!("All {} givers notified", summary.delivered);
    Ok(())
}
