//! # Santa Notifier
//!
//! Tells every giver who they drew.
//!
//! - **MessageTemplate**: renders the message for one assignment
//! - **Notifier**: transport trait, one delivery attempt per message
//! - **ConsoleNotifier**: prints messages (dry run)
//! - **OutboxNotifier**: writes one `.eml` file per giver for an external mail agent
//! - **SmtpNotifier**: sends through an SMTP relay
//!
//! Deliveries are attempted once. Failures are reported, never retried.

pub mod config;
pub mod console;
pub mod error;
mod mail;
pub mod message;
pub mod notifier;
pub mod outbox;
pub mod smtp;

pub use config::{NotifierConfig, SmtpConfig, TransportKind};
pub use console::ConsoleNotifier;
pub use error::{DeliveryError, NotifierError, Result};
pub use message::{MessageTemplate, Notification};
pub use notifier::{notify_all, DeliveryFailure, DeliveryReport, Notifier};
pub use outbox::OutboxNotifier;
pub use smtp::SmtpNotifier;

/// Build the transport selected by the configuration
pub fn notifier_from_config(config: &NotifierConfig) -> Result<Box<dyn Notifier>> {
    config.validate()?;

    let notifier: Box<dyn Notifier> = match config.transport {
        TransportKind::Console => Box::new(ConsoleNotifier::stdout()),
        TransportKind::Outbox => Box::new(OutboxNotifier::new(&config.outbox_dir)?),
        TransportKind::Smtp => Box::new(SmtpNotifier::new(&config.smtp)?),
    };

    tracing::info!("Using {} notifier", notifier.name());
    Ok(notifier)
}
