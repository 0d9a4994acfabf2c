//! Console transport (dry run)

use crate::error::DeliveryError;
use crate::message::Notification;
use crate::notifier::{check_address, Notifier};
use std::io::{self, Stdout, Write};

const SEPARATOR: &str = "----------------------------------------";

/// Writes every message to a writer instead of sending it
pub struct ConsoleNotifier<W: Write> {
    writer: W,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError> {
        check_address(&notification.to)?;

        writeln!(self.writer, "{SEPARATOR}")?;
        if !notification.from.is_empty() {
            writeln!(self.writer, "From: {}", notification.from)?;
        }
        writeln!(self.writer, "To: {} <{}>", notification.giver_name, notification.to)?;
        writeln!(self.writer, "Subject: {}", notification.subject)?;
        writeln!(self.writer)?;
        write!(self.writer, "{}", notification.body)?;
        self.writer.flush()?;
        Ok(())
    }
}
