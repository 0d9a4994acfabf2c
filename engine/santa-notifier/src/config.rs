//! Configuration for notifications

use crate::error::{NotifierError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rendered messages go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Print every message to stdout
    #[default]
    Console,
    /// Write one message file per giver into `outbox_dir`
    Outbox,
    /// Send through the relay in `[notifier.smtp]`
    Smtp,
}

/// SMTP relay settings
///
/// The password is never read from or written to configuration files; it comes
/// from the environment only.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,

    /// Relay port, 587 for submission with STARTTLS
    pub port: u16,

    /// Upgrade the connection with STARTTLS before logging in
    pub starttls: bool,

    /// Login name, usually the sender address
    pub username: Option<String>,

    #[serde(skip)]
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 587,
            starttls: true,
            username: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("starttls", &self.starttls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SmtpConfig {
    /// Validate relay settings
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(NotifierError::config("SMTP transport needs a relay host"));
        }
        if self.port == 0 {
            return Err(NotifierError::config("SMTP port must not be 0"));
        }
        if self.timeout_secs == 0 {
            return Err(NotifierError::config("SMTP timeout must be at least one second"));
        }
        match (&self.username, &self.password) {
            (Some(_), None) => {
                Err(NotifierError::config("SMTP username is set but no password was provided"))
            }
            (None, Some(_)) => {
                Err(NotifierError::config("SMTP password is set but no username was provided"))
            }
            _ => Ok(()),
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Selected transport
    pub transport: TransportKind,

    /// Target directory for the outbox transport
    pub outbox_dir: PathBuf,

    /// Sender address placed in the `From` header
    pub sender: String,

    /// Message subject
    pub subject: String,

    /// Who givers should contact when something comes up
    pub organizer: Option<String>,

    /// Suggested spending limit, free text (e.g. "10 EUR")
    pub budget: Option<String>,

    /// Day the gifts get unwrapped
    pub exchange_date: Option<NaiveDate>,

    /// Relay settings for the SMTP transport
    pub smtp: SmtpConfig,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Console,
            outbox_dir: PathBuf::from("./outbox"),
            sender: String::new(),
            subject: "[Secret Santa] Your gift assignment".to_string(),
            organizer: None,
            budget: None,
            exchange_date: None,
            smtp: SmtpConfig::default(),
        }
    }
}

impl NotifierConfig {
    /// Validate notification settings
    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(NotifierError::config("subject must not be empty"));
        }
        if self.subject.contains(&['\r', '\n'][..]) {
            return Err(NotifierError::config("subject must be a single line"));
        }

        if self.sender.is_empty() {
            if self.transport != TransportKind::Console {
                return Err(NotifierError::config("mail transports need a sender address"));
            }
        } else if !self.sender.contains('@') || self.sender.contains(&['\r', '\n'][..]) {
            return Err(NotifierError::config(format!("invalid sender address: {}", self.sender)));
        }

        if self.transport == TransportKind::Outbox && self.outbox_dir.as_os_str().is_empty() {
            return Err(NotifierError::config("outbox directory is empty"));
        }

        if self.transport == TransportKind::Smtp {
            self.smtp.validate()?;
        }

        Ok(())
    }
}
