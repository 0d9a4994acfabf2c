//! End-to-end run: load, draw, notify

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::ServiceConfig;
use santa_draw::{run_draw, AssignmentCycle};
use santa_notifier::{notifier_from_config, notify_all, MessageTemplate, Notifier};

/// Outcome of a complete run
#[derive(Debug)]
pub struct RunSummary {
    /// Number of participants in the draw
    pub participants: usize,

    /// Messages delivered
    pub delivered: usize,

    /// Givers whose message could not be delivered
    pub failed: Vec<String>,

    /// The drawn cycle
    pub cycle: AssignmentCycle,
}

impl RunSummary {
    /// Every giver was notified
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the draw and notify through the configured transport
///
/// The transport is set up before drawing so a broken notifier setup fails
/// before any assignment exists.
pub fn run(config: &ServiceConfig) -> Result<RunSummary> {
    let mut notifier =
        notifier_from_config(&config.notifier).context("Failed to set up notifier")?;
    run_with_notifier(config, notifier.as_mut())
}

/// Run the draw and notify through the given transport
pub fn run_with_notifier(
    config: &ServiceConfig,
    notifier: &mut dyn Notifier,
) -> Result<RunSummary> {
    info!("Drawing from {:?}", config.draw.participants_file);
    let draw = run_draw(&config.draw).context("Draw failed")?;
    info!("Drew a single cycle over {} participants", draw.participants.len());

    let template = MessageTemplate::new(&config.notifier);
    let report = notify_all(notifier, &draw.cycle, &template);

    let failed: Vec<String> = report.failures.iter().map(|failure| failure.giver.clone()).collect();
    if !failed.is_empty() {
        warn!("{} of {} notifications failed", failed.len(), report.attempted);
    }

    Ok(RunSummary {
        participants: draw.participants.len(),
        delivered: report.sent(),
        failed,
        cycle: draw.cycle,
    })
}
