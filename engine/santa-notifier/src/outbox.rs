//! Outbox transport
//!
//! Writes each message as an `.eml` file into a directory. Sending the files
//! is left to whatever mail agent picks them up.
//!
//! Each run needs an empty outbox: leftovers from an earlier draw would reach
//! the mail agent next to the new messages and contradict them.

use crate::error::{DeliveryError, NotifierError, Result};
use crate::mail::build_message;
use crate::message::Notification;
use crate::notifier::Notifier;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one message file per giver
#[derive(Debug)]
pub struct OutboxNotifier {
    dir: PathBuf,
    written: usize,
}

impl OutboxNotifier {
    /// Create the notifier, creating the directory if needed
    ///
    /// Fails when the directory already holds anything.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        if !dir.is_dir() {
            return Err(NotifierError::config(format!("outbox {dir:?} is not a directory")));
        }
        if fs::read_dir(&dir)?.next().is_some() {
            return Err(NotifierError::config(format!(
                "outbox {dir:?} is not empty, clear it before drawing again"
            )));
        }
        Ok(Self { dir, written: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the next message file for the given recipient
    fn message_path(&self, to: &str) -> PathBuf {
        let stem: String = to
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{:03}-{}.eml", self.written + 1, stem))
    }
}

impl Notifier for OutboxNotifier {
    fn name(&self) -> &str {
        "outbox"
    }

    fn deliver(&mut self, notification: &Notification) -> std::result::Result<(), DeliveryError> {
        let message = build_message(notification)?;

        let path = self.message_path(&notification.to);
        let mut file = fs::OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(&message.formatted())?;
        file.sync_all()?;

        self.written += 1;
        debug!("Wrote {:?}", path);
        Ok(())
    }
}
