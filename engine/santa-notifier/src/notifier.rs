//! Notifier trait and the delivery loop

use crate::error::DeliveryError;
use crate::message::{MessageTemplate, Notification};
use santa_draw::AssignmentCycle;
use tracing::{info, warn};

/// Transport delivering rendered messages
pub trait Notifier {
    /// Short transport name for logs
    fn name(&self) -> &str;

    /// Deliver a single message, exactly one attempt
    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError> {
        (**self).deliver(notification)
    }
}

/// A message that could not be delivered
#[derive(Debug)]
pub struct DeliveryFailure {
    pub giver: String,
    pub error: DeliveryError,
}

/// Outcome of notifying a whole cycle
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub attempted: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    /// Number of successful deliveries
    pub fn sent(&self) -> usize {
        self.attempted - self.failures.len()
    }

    /// Every message went out
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reject addresses a transport cannot possibly deliver to
pub(crate) fn check_address(address: &str) -> Result<(), DeliveryError> {
    let valid = match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(|c| c.is_whitespace() || c.is_control())
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DeliveryError::InvalidAddress(address.to_string()))
    }
}

/// Render and deliver one message per assignment
///
/// Every assignment gets exactly one attempt; failures are collected into the
/// report and the loop moves on.
pub fn notify_all(
    notifier: &mut dyn Notifier,
    cycle: &AssignmentCycle,
    template: &MessageTemplate,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();
    info!("Notifying {} givers via {}", cycle.len(), notifier.name());

    for assignment in cycle {
        let notification = template.render(assignment);
        report.attempted += 1;

        match notifier.deliver(&notification) {
            Ok(()) => info!("[SEND] {}", notification.giver_name),
            Err(error) => {
                warn!("[FAIL] {}: {}", notification.giver_name, error);
                report.failures.push(DeliveryFailure { giver: notification.giver_name, error });
            }
        }
    }

    info!("[DONE] Sent: {}", report.sent());
    report
}
