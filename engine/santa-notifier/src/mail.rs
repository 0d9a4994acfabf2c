//! MIME message building shared by the mail transports
//!
//! Display names and subjects outside ASCII are encoded per RFC 2047 by
//! `lettre`, and the body transfer encoding is picked from its content.

use crate::error::DeliveryError;
use crate::message::Notification;
use crate::notifier::check_address;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{Address, Message};

/// Build the message for one notification
pub(crate) fn build_message(notification: &Notification) -> Result<Message, DeliveryError> {
    check_address(&notification.to)?;
    if notification.from.is_empty() {
        return Err(DeliveryError::Transport("message has no sender".to_string()));
    }

    let from: Mailbox = notification.from.parse().map_err(|err| {
        DeliveryError::InvalidAddress(format!("{}: {err}", notification.from))
    })?;
    let to: Address = notification
        .to
        .parse()
        .map_err(|err| DeliveryError::InvalidAddress(format!("{}: {err}", notification.to)))?;

    Message::builder()
        .from(from)
        .to(Mailbox::new(Some(notification.giver_name.clone()), to))
        .subject(notification.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body.clone())
        .map_err(|err| DeliveryError::Transport(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(giver_name: &str, subject: &str) -> Notification {
        Notification {
            to: "zoe.durand@example.org".to_string(),
            giver_name: giver_name.to_string(),
            from: "santa@example.org".to_string(),
            subject: subject.to_string(),
            body: "Ho ho ho Zoé!\n".to_string(),
        }
    }

    fn headers(message: &Message) -> String {
        let formatted = String::from_utf8(message.formatted()).unwrap();
        let (headers, _body) = formatted.split_once("\r\n\r\n").unwrap();
        headers.to_string()
    }

    #[test]
    fn test_non_ascii_headers_are_encoded() {
        let message = build_message(&notification("Zoé Durand", "🎁 Ton cadeau")).unwrap();
        let headers = headers(&message);

        assert!(headers.is_ascii(), "headers must be 7-bit: {headers}");
        assert!(!headers.contains("Zoé"));
        assert!(headers.contains("zoe.durand@example.org"));
        assert!(headers.to_lowercase().contains("=?utf-8?"));
    }

    #[test]
    fn test_ascii_headers_stay_readable() {
        let message = build_message(&notification("Zoe Durand", "Your gift")).unwrap();
        let headers = headers(&message);

        assert!(headers.contains("Subject: Your gift"));
        assert!(headers.contains("Zoe Durand"));
        assert!(headers.contains("Content-Type: text/plain; charset=utf-8"));
    }

    #[test]
    fn test_rejects_bad_addresses() {
        let mut bad_to = notification("Zoe", "Hi");
        bad_to.to = "nobody".to_string();
        assert!(matches!(build_message(&bad_to), Err(DeliveryError::InvalidAddress(_))));

        let mut bad_from = notification("Zoe", "Hi");
        bad_from.from = "santa at example dot org".to_string();
        assert!(matches!(build_message(&bad_from), Err(DeliveryError::InvalidAddress(_))));

        let mut no_from = notification("Zoe", "Hi");
        no_from.from.clear();
        assert!(matches!(build_message(&no_from), Err(DeliveryError::Transport(_))));
    }
}
