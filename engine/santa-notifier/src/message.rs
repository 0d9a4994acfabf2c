//! Message rendering

use crate::config::NotifierConfig;
use chrono::NaiveDate;
use santa_draw::Assignment;
use serde::{Deserialize, Serialize};

/// A rendered message addressed to one giver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Giver's address
    pub to: String,

    /// Giver's display name, used in reports and logs
    pub giver_name: String,

    /// Sender address, may be empty for transports that do not need one
    pub from: String,

    pub subject: String,
    pub body: String,
}

/// Renders the message telling a giver who they drew
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    sender: String,
    subject: String,
    organizer: Option<String>,
    budget: Option<String>,
    exchange_date: Option<NaiveDate>,
}

impl MessageTemplate {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            sender: config.sender.clone(),
            subject: config.subject.clone(),
            organizer: config.organizer.clone(),
            budget: config.budget.clone(),
            exchange_date: config.exchange_date,
        }
    }

    /// Render the message for one assignment
    pub fn render(&self, assignment: &Assignment) -> Notification {
        Notification {
            to: assignment.giver.email().to_string(),
            giver_name: assignment.giver.name().to_string(),
            from: self.sender.clone(),
            subject: self.subject.clone(),
            body: self.body(assignment),
        }
    }

    fn body(&self, assignment: &Assignment) -> String {
        let contact = self.organizer.as_deref().unwrap_or("the organizer");

        let mut lines = vec![
            format!("Ho ho ho {}!", assignment.giver.first_name()),
            String::new(),
            "The Secret Santa draw is done.".to_string(),
            String::new(),
            "A quick reminder of the rules:".to_string(),
        ];
        if let Some(budget) = &self.budget {
            lines.push(format!("\t- Try to keep the gift around {budget}."));
        }
        lines.push("\t- Keep it secret! Knowing in advance spoils the fun.".to_string());
        lines.push(format!("\t- If anything comes up, get in touch with {contact}."));
        lines.push(String::new());
        lines.push(format!(
            "Without further suspense, you are the Secret Santa of ... {}!",
            assignment.receiver.name().to_uppercase()
        ));
        if let Some(date) = self.exchange_date {
            lines.push(format!("Gifts get unwrapped on {}.", date.format("%A %-d %B %Y")));
        }
        lines.push(String::new());
        lines.push("Good luck finding a nice present, and merry Christmas in advance!".to_string());

        let mut body = lines.join("\n");
        body.push('\n');
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_draw::Participant;

    fn assignment() -> Assignment {
        Assignment::new(
            Participant::new("Alice Martin", "alice.martin@example.org"),
            Participant::new("Bob Stone", "bob.stone@example.org"),
        )
    }

    #[test]
    fn test_render_addresses_the_giver() {
        let template = MessageTemplate::new(&NotifierConfig {
            sender: "santa@example.org".to_string(),
            ..Default::default()
        });
        let notification = template.render(&assignment());

        assert_eq!(notification.to, "alice.martin@example.org");
        assert_eq!(notification.giver_name, "Alice Martin");
        assert_eq!(notification.from, "santa@example.org");
        assert!(notification.body.starts_with("Ho ho ho Alice!\n\n"));
        assert!(notification.body.ends_with("merry Christmas in advance!\n"));
        assert!(notification.body.contains("BOB STONE"));
        assert!(!notification.body.contains("ALICE MARTIN"));
    }

    #[test]
    fn test_optional_sections() {
        let bare = MessageTemplate::new(&NotifierConfig::default()).render(&assignment());
        assert!(bare.body.contains("the organizer"));
        assert!(!bare.body.contains("unwrapped"));
        assert!(!bare.body.contains("around"));

        let full = MessageTemplate::new(&NotifierConfig {
            organizer: Some("Carol".to_string()),
            budget: Some("10 EUR".to_string()),
            exchange_date: NaiveDate::from_ymd_opt(2026, 12, 13),
            ..Default::default()
        })
        .render(&assignment());
        assert!(full.body.contains("get in touch with Carol"));
        assert!(full.body.contains("around 10 EUR"));
        assert!(full.body.contains("Sunday 13 December 2026"));
    }
}
