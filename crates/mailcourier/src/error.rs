//! Error types for the mailcourier facade.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from composing templates or configuring a [`crate::Courier`].
///
/// Sending never returns this type; delivery failures are reported through
/// [`crate::SendResult`].
#[derive(Debug, Error)]
pub enum Error {
    /// Template registration, loading, or rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] mailcourier_template::Error),

    /// The transport could not be created.
    #[error("Transport error: {0}")]
    Transport(#[from] mailcourier_smtp::Error),

    /// A configuration file was read but is not valid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if a file that was read does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns true if a referenced template is not registered.
    #[must_use]
    pub const fn is_template_not_found(&self) -> bool {
        matches!(
            self,
            Self::Template(mailcourier_template::Error::TemplateNotFound(_))
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
