//! Outgoing message types.

use serde::{Deserialize, Serialize};

use crate::address::{Address, Recipients};

/// An email message as composed by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    /// Sender; falls back to the configured default sender, then the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Primary recipients.
    pub to: Recipients,
    /// CC recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    /// BCC recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    /// Reply-To addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl EmailMessage {
    /// Creates a message to `to` with `subject` and no body.
    #[must_use]
    pub fn new(to: impl Into<Recipients>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Sets the sender.
    #[must_use]
    pub fn from(mut self, from: impl Into<Address>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Adds a CC recipient.
    #[must_use]
    pub fn cc(mut self, recipient: impl Into<Address>) -> Self {
        self.cc.get_or_insert_with(Recipients::default).push(recipient);
        self
    }

    /// Adds a BCC recipient.
    #[must_use]
    pub fn bcc(mut self, recipient: impl Into<Address>) -> Self {
        self.bcc.get_or_insert_with(Recipients::default).push(recipient);
        self
    }

    /// Adds a Reply-To address.
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<Address>) -> Self {
        self.reply_to
            .get_or_insert_with(Recipients::default)
            .push(address);
        self
    }

    /// Sets the plain text body.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Builds the transport-level mail.
    ///
    /// The sender is resolved as `self.from`, then `default_from`, then
    /// `identity` (the authenticated account).
    #[must_use]
    pub fn to_outgoing(&self, default_from: Option<&Address>, identity: &str) -> OutgoingMail {
        let from = self
            .from
            .clone()
            .or_else(|| default_from.cloned())
            .unwrap_or_else(|| Address::new(identity));

        OutgoingMail {
            from,
            to: self.to.as_slice().to_vec(),
            cc: list(self.cc.as_ref()),
            bcc: list(self.bcc.as_ref()),
            reply_to: list(self.reply_to.as_ref()),
            subject: self.subject.clone(),
            text: self.text.clone(),
            html: self.html.clone(),
        }
    }
}

fn list(recipients: Option<&Recipients>) -> Vec<Address> {
    recipients.map_or_else(Vec::new, |r| r.as_slice().to_vec())
}

/// A fully resolved message handed to a [`crate::MailTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Resolved sender.
    pub from: Address,
    /// Primary recipients.
    pub to: Vec<Address>,
    /// CC recipients.
    pub cc: Vec<Address>,
    /// BCC recipients.
    pub bcc: Vec<Address>,
    /// Reply-To addresses.
    pub reply_to: Vec<Address>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub text: Option<String>,
    /// HTML body.
    pub html: Option<String>,
}

impl OutgoingMail {
    /// Returns true if there is at least one envelope recipient.
    #[must_use]
    pub fn has_recipients(&self) -> bool {
        !(self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty())
    }

    /// Returns formatted `to` recipients, for logging.
    #[must_use]
    pub fn to_formatted(&self) -> String {
        self.to
            .iter()
            .map(Address::format)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_precedence_explicit() {
        let default_from = Address::new("default@example.com");
        let mail = EmailMessage::new("to@example.com", "Hi")
            .from(Address::with_name("Me", "me@example.com"))
            .to_outgoing(Some(&default_from), "account@example.com");
        assert_eq!(mail.from.format(), "Me <me@example.com>");
    }

    #[test]
    fn test_sender_precedence_default() {
        let default_from = Address::with_name("Acme", "noreply@acme.com");
        let mail = EmailMessage::new("to@example.com", "Hi")
            .to_outgoing(Some(&default_from), "account@example.com");
        assert_eq!(mail.from, default_from);
    }

    #[test]
    fn test_sender_precedence_identity() {
        let mail = EmailMessage::new("to@example.com", "Hi").to_outgoing(None, "account@example.com");
        assert_eq!(mail.from.format(), "account@example.com");
    }

    #[test]
    fn test_builder_collects_recipients() {
        let mail = EmailMessage::new(vec!["a@x.com", "b@x.com"], "Subject")
            .cc("c@x.com")
            .cc("d@x.com")
            .bcc("e@x.com")
            .reply_to("r@x.com")
            .text("plain")
            .html("<p>html</p>")
            .to_outgoing(None, "me@x.com");

        assert_eq!(mail.to.len(), 2);
        assert_eq!(mail.cc.len(), 2);
        assert_eq!(mail.bcc.len(), 1);
        assert_eq!(mail.reply_to, [Address::new("r@x.com")]);
        assert_eq!(mail.text.as_deref(), Some("plain"));
        assert_eq!(mail.to_formatted(), "a@x.com, b@x.com");
        assert!(mail.has_recipients());
    }

    #[test]
    fn test_no_recipients() {
        let mail = EmailMessage::new(Recipients::default(), "x").to_outgoing(None, "me@x.com");
        assert!(!mail.has_recipients());
    }
}
