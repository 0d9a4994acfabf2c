//! # Command Line Interface

use crate::config::ServiceConfig;
use clap::Parser;
use santa_notifier::TransportKind;
use std::path::PathBuf;

/// Secret Santa draw
#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa assignments and tell every giver who they drew")]
#[command(version)]
pub struct Cli {
    /// Participant list, one name per line
    #[arg(short, long)]
    pub participants: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mail domain used to derive participant addresses
    #[arg(long)]
    pub domain: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print messages to stdout instead of writing them to the outbox
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write messages into this directory
    #[arg(long)]
    pub outbox: Option<PathBuf>,

    /// Send through this SMTP relay (password from SANTA_SMTP_PASSWORD)
    #[arg(long)]
    pub smtp_host: Option<String>,

    /// Sender address for the messages
    #[arg(long)]
    pub sender: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the drawn pairs once notifications are out (organizer only!)
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(participants) = &self.participants {
            config.draw.participants_file = participants.clone();
        }
        if let Some(domain) = &self.domain {
            config.draw.loader.domain = domain.clone();
        }
        if let Some(seed) = self.seed {
            config.draw.seed = Some(seed);
        }
        if let Some(outbox) = &self.outbox {
            config.notifier.transport = TransportKind::Outbox;
            config.notifier.outbox_dir = outbox.clone();
        }
        if let Some(host) = &self.smtp_host {
            config.notifier.transport = TransportKind::Smtp;
            config.notifier.smtp.host = host.clone();
        }
        if let Some(sender) = &self.sender {
            config.notifier.sender = sender.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        // Dry run wins over any mail transport
        if self.dry_run {
            config.notifier.transport = TransportKind::Console;
        }
    }
}
