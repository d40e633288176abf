//! Mail transport boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::message::OutgoingMail;

/// Receipt for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    /// Message-ID assigned to the message.
    pub message_id: String,
}

/// Something that can deliver an [`OutgoingMail`].
///
/// No timeouts or retries are applied here; a hung transport stays pending
/// until the caller gives up.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or delivered.
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<SentMail>;

    /// Checks that the server is reachable and accepts the credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection attempt fails.
    async fn verify(&self) -> Result<bool>;

    /// Releases the transport. Consuming `self` rules out use after close.
    fn close(self)
    where
        Self: Sized,
    {
    }
}
