//! Error types for theme operations.

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Theme error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more top-level theme groups are absent.
    #[error("Theme configuration missing group(s): {}", .missing.join(", "))]
    Configuration {
        /// Names of the missing groups, in declaration order.
        missing: Vec<&'static str>,
    },

    /// A group is present but a field inside it is missing or mistyped.
    #[error("Invalid theme: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl Error {
    /// Returns the missing group names for a configuration error.
    #[must_use]
    pub fn missing_groups(&self) -> &[&'static str] {
        match self {
            Self::Configuration { missing } => missing,
            Self::Invalid(_) => &[],
        }
    }
}
