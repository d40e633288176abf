//! Courier configuration.

use std::path::{Path, PathBuf};

use mailcourier_smtp::{Address, SmtpConfig};
use mailcourier_theme::ThemeConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Everything needed to construct a [`crate::Courier`].
///
/// ```json
/// {
///   "smtp": { "service": "icloud", "username": "me@icloud.com", "password": "..." },
///   "defaultFrom": { "address": "noreply@acme.com", "name": "Acme" },
///   "templatesDir": "./emails",
///   "theme": { "colors": { "accent": "#ff5a1f" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierConfig {
    /// SMTP server and credentials.
    pub smtp: SmtpConfig,
    /// Sender used when a message does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_from: Option<Address>,
    /// Directory loaded by [`crate::Courier::load_configured_templates`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    /// Overrides merged onto the default theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
}

impl CourierConfig {
    /// Creates a configuration with only SMTP settings.
    #[must_use]
    pub fn new(smtp: SmtpConfig) -> Self {
        Self {
            smtp,
            ..Self::default()
        }
    }

    /// Sets the default sender.
    #[must_use]
    pub fn default_from(mut self, from: impl Into<Address>) -> Self {
        self.default_from = Some(from.into());
        self
    }

    /// Sets the templates directory.
    #[must_use]
    pub fn templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    /// Sets the theme overrides.
    #[must_use]
    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or `smtp` is missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    ///
    /// A relative `templatesDir` is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Config`] naming the file if it cannot be parsed.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;

        let mut config = Self::from_json(&json)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        if let (Some(dir), Some(parent)) = (config.templates_dir.as_mut(), path.parent())
            && dir.is_relative()
        {
            *dir = parent.join(&*dir);
        }
        Ok(config)
    }
}
