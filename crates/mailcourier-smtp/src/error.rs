//! Error types for SMTP operations.

/// Result type alias for SMTP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// SMTP error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// The message has no `to`, `cc`, or `bcc` recipient.
    #[error("No recipients specified")]
    NoRecipients,

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connection, authentication, or delivery failed.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Failure reported by a non-SMTP transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Creates a transport error from any message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Returns true if this is a permanent SMTP error (5xx).
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Smtp(e) if e.is_permanent())
    }

    /// Returns true if this is a transient SMTP error (4xx).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Smtp(e) if e.is_transient())
    }
}
