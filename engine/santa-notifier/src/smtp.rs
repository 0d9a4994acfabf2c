//! SMTP transport
//!
//! Submits every message to a relay over STARTTLS, logging in when
//! credentials are configured.

use crate::config::SmtpConfig;
use crate::error::{DeliveryError, NotifierError, Result};
use crate::mail::build_message;
use crate::message::Notification;
use crate::notifier::Notifier;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use std::time::Duration;
use tracing::debug;

/// Sends messages through an SMTP relay
pub struct SmtpNotifier {
    transport: SmtpTransport,
    relay: String,
}

impl SmtpNotifier {
    /// Prepare the relay connection; nothing is contacted until the first delivery
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        config.validate()?;

        let builder = if config.starttls {
            SmtpTransport::starttls_relay(&config.host).map_err(|err| {
                NotifierError::config(format!("invalid SMTP relay {}: {err}", config.host))
            })?
        } else {
            SmtpTransport::builder_dangerous(config.host.as_str())
        };

        let mut builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self { transport: builder.build(), relay: format!("{}:{}", config.host, config.port) })
    }

    pub fn relay(&self) -> &str {
        &self.relay
    }
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier").field("relay", &self.relay).finish_non_exhaustive()
    }
}

impl Notifier for SmtpNotifier {
    fn name(&self) -> &str {
        "smtp"
    }

    fn deliver(&mut self, notification: &Notification) -> std::result::Result<(), DeliveryError> {
        let message = build_message(notification)?;

        let response = self
            .transport
            .send(&message)
            .map_err(|err| DeliveryError::Transport(format!("{}: {err}", self.relay)))?;

        debug!("Relay {} accepted message with code {}", self.relay, response.code());
        Ok(())
    }
}
