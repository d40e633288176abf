//! Outcome of a send.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Result of [`crate::Courier::send`] and the other senders.
///
/// Serializes as `{ "success": true, "messageId": ".." }` or
/// `{ "success": false, "error": ".." }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendResult {
    /// The server accepted the message.
    Sent {
        /// Message-ID assigned to the message.
        message_id: String,
    },
    /// Composition or delivery failed.
    Failed {
        /// Human-readable failure reason, never empty.
        error: String,
    },
}

impl SendResult {
    pub(crate) fn failed(error: impl std::fmt::Display) -> Self {
        let error = error.to_string();
        Self::Failed {
            error: if error.is_empty() {
                "Unknown error".to_string()
            } else {
                error
            },
        }
    }

    /// Returns true if the message was sent.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    /// Returns the Message-ID of a sent message.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::Sent { message_id } => Some(message_id),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the failure reason.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Sent { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

impl Serialize for SendResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SendResult", 2)?;
        state.serialize_field("success", &self.is_success())?;
        match self {
            Self::Sent { message_id } => state.serialize_field("messageId", message_id)?,
            Self::Failed { error } => state.serialize_field("error", error)?,
        }
        state.end()
    }
}
