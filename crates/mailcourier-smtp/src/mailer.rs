//! SMTP transport backed by lettre.

use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::config::{Security, SmtpConfig};
use crate::error::{Error, Result};
use crate::message::OutgoingMail;
use crate::transport::{MailTransport, SentMail};

/// Delivers mail over SMTP.
///
/// Connections are opened per message; nothing is pooled.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Creates a mailer for `config`. No connection is made until first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS parameters for the host cannot be built.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let (host, port, security) = config.endpoint();

        let mut builder = match security {
            Security::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?,
            Security::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)?,
            Security::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host),
        }
        .port(port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        debug!(host = %host, port, security = security.display_name(), "Created SMTP mailer");

        Ok(Self {
            transport: builder.build(),
            host,
            port,
        })
    }

    /// Builds the RFC 5322 message for `mail`.
    ///
    /// Both bodies produce `multipart/alternative`; a single body produces a
    /// single part; no body produces an empty plain text part.
    ///
    /// # Errors
    ///
    /// Returns an error if an address is invalid or there are no recipients.
    pub fn build_message(mail: &OutgoingMail) -> Result<Message> {
        if !mail.has_recipients() {
            return Err(Error::NoRecipients);
        }

        let mut builder = Message::builder()
            .from(mail.from.to_mailbox()?)
            .subject(mail.subject.as_str())
            .message_id(None);

        for address in &mail.to {
            builder = builder.to(address.to_mailbox()?);
        }
        for address in &mail.cc {
            builder = builder.cc(address.to_mailbox()?);
        }
        for address in &mail.bcc {
            builder = builder.bcc(address.to_mailbox()?);
        }
        for address in &mail.reply_to {
            builder = builder.reply_to(address.to_mailbox()?);
        }

        let message = match (&mail.text, &mail.html) {
            (Some(text), Some(html)) => {
                builder.multipart(MultiPart::alternative_plain_html(text.clone(), html.clone()))?
            }
            (None, Some(html)) => builder.singlepart(SinglePart::html(html.clone()))?,
            (Some(text), None) => builder.singlepart(SinglePart::plain(text.clone()))?,
            (None, None) => builder.singlepart(SinglePart::plain(String::new()))?,
        };

        Ok(message)
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<SentMail> {
        let message = Self::build_message(mail)?;
        let message_id = message
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        let response = self.transport.send(message).await?;
        debug!(
            host = %self.host,
            code = %response.code(),
            message_id = %message_id,
            "SMTP server accepted message"
        );

        Ok(SentMail { message_id })
    }

    async fn verify(&self) -> Result<bool> {
        Ok(self.transport.test_connection().await?)
    }

    fn close(self) {
        debug!(host = %self.host, "Closed SMTP mailer");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::message::EmailMessage;

    fn formatted(mail: &OutgoingMail) -> String {
        let message = SmtpMailer::build_message(mail).unwrap();
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn test_build_message_alternative() {
        let mail = EmailMessage::new(Address::with_name("Test User", "test@example.com"), "Test Subject")
            .text("Test")
            .html("<h1>Test</h1>")
            .to_outgoing(None, "noreply@example.com");

        let raw = formatted(&mail);
        assert!(raw.contains("Subject: Test Subject"));
        assert!(raw.contains("From: noreply@example.com"));
        assert!(raw.contains("To: \"Test User\" <test@example.com>") || raw.contains("To: Test User <test@example.com>"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("Message-ID: <"));
    }

    #[test]
    fn test_build_message_html_only() {
        let mail = EmailMessage::new("test@example.com", "Hi")
            .html("<p>x</p>")
            .to_outgoing(None, "noreply@example.com");

        let raw = formatted(&mail);
        assert!(raw.contains("Content-Type: text/html"));
        assert!(!raw.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_message_cc_and_reply_to() {
        let mail = EmailMessage::new("a@example.com", "Hi")
            .cc("b@example.com")
            .reply_to("r@example.com")
            .text("x")
            .to_outgoing(None, "noreply@example.com");

        let raw = formatted(&mail);
        assert!(raw.contains("Cc: b@example.com"));
        assert!(raw.contains("Reply-To: r@example.com"));
    }

    #[test]
    fn test_build_message_rejects_invalid_address() {
        let mail = EmailMessage::new("not an address", "Hi").to_outgoing(None, "me@example.com");
        assert!(matches!(
            SmtpMailer::build_message(&mail),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_build_message_requires_recipients() {
        let mail = EmailMessage::new(Vec::<Address>::new(), "Hi").to_outgoing(None, "me@example.com");
        assert!(matches!(
            SmtpMailer::build_message(&mail),
            Err(Error::NoRecipients)
        ));
    }

    #[test]
    fn test_new_does_not_connect() {
        let config = SmtpConfig::icloud("me@icloud.com", "pw");
        let mailer = SmtpMailer::new(&config).unwrap();
        assert_eq!(mailer.host, "smtp.mail.me.com");
        assert_eq!(mailer.port, 587);
    }

    #[tokio::test]
    async fn test_send_to_unreachable_server_fails() {
        let config = SmtpConfig::custom("127.0.0.1", 1, Security::None, "", "");
        let mailer = SmtpMailer::new(&config).unwrap();
        let mail = EmailMessage::new("to@example.com", "Hi")
            .text("x")
            .to_outgoing(None, "me@example.com");

        let err = mailer.send_mail(&mail).await.unwrap_err();
        assert!(matches!(err, Error::Smtp(_)));
        // A refused connection carries no SMTP reply code.
        assert!(!err.is_permanent());
        assert!(!err.is_transient());
    }
}
