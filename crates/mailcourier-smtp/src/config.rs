//! SMTP server configuration and provider presets.

use serde::{Deserialize, Serialize};

/// Security/encryption mode for connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Security {
    /// No encryption (not recommended).
    None,
    /// Implicit TLS (connect directly with TLS).
    #[default]
    Tls,
    /// STARTTLS upgrade after plaintext connect.
    StartTls,
}

impl Security {
    /// Get display name for the security mode.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None (insecure)",
            Self::Tls => "SSL/TLS",
            Self::StartTls => "STARTTLS",
        }
    }

    /// Get default port for the security mode.
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        match self {
            Self::None => 25,
            Self::StartTls => 587,
            Self::Tls => 465,
        }
    }
}

/// Host, port, and security of a known provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmtpPreset {
    /// Server hostname.
    pub host: &'static str,
    /// Server port.
    pub port: u16,
    /// Security mode.
    pub security: Security,
}

/// iCloud Mail.
pub const ICLOUD: SmtpPreset = SmtpPreset {
    host: "smtp.mail.me.com",
    port: 587,
    security: Security::StartTls,
};

/// Microsoft 365 / Outlook.com.
pub const MICROSOFT: SmtpPreset = SmtpPreset {
    host: "smtp.office365.com",
    port: 587,
    security: Security::StartTls,
};

/// Which provider an [`SmtpConfig`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpService {
    /// iCloud Mail, see [`ICLOUD`].
    #[serde(alias = "iCloud")]
    ICloud,
    /// Microsoft 365 / Outlook.com, see [`MICROSOFT`].
    #[serde(alias = "outlook")]
    Microsoft,
    /// Explicit host, port, and security.
    #[default]
    Custom,
}

impl SmtpService {
    /// Returns the preset for a known provider.
    #[must_use]
    pub const fn preset(self) -> Option<SmtpPreset> {
        match self {
            Self::ICloud => Some(ICLOUD),
            Self::Microsoft => Some(MICROSOFT),
            Self::Custom => None,
        }
    }
}

/// SMTP server configuration.
///
/// For a preset service, an empty `host` or a zero `port` is filled in from
/// the preset; explicit values win. A preset service also supplies its
/// security mode unless `host` is set explicitly.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpConfig {
    /// Provider discriminant.
    #[serde(default)]
    pub service: SmtpService,
    /// Server hostname.
    #[serde(default)]
    pub host: String,
    /// Server port (0 means the service or security default).
    #[serde(default)]
    pub port: u16,
    /// Security mode.
    #[serde(default)]
    pub security: Security,
    /// Username for authentication, also the fallback sender address.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("service", &self.service)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("security", &self.security)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SmtpConfig {
    /// Configuration for a known provider with the caller's credentials.
    #[must_use]
    pub fn preset(
        service: SmtpService,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service,
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// iCloud Mail configuration.
    #[must_use]
    pub fn icloud(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::preset(SmtpService::ICloud, username, password)
    }

    /// Microsoft 365 / Outlook.com configuration.
    #[must_use]
    pub fn microsoft(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::preset(SmtpService::Microsoft, username, password)
    }

    /// Configuration for an explicit server.
    #[must_use]
    pub fn custom(
        host: impl Into<String>,
        port: u16,
        security: Security,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service: SmtpService::Custom,
            host: host.into(),
            port,
            security,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Resolves the host, port, and security to connect with.
    #[must_use]
    pub fn endpoint(&self) -> (String, u16, Security) {
        match self.service.preset() {
            Some(preset) if self.host.is_empty() => {
                let port = if self.port == 0 { preset.port } else { self.port };
                (preset.host.to_string(), port, preset.security)
            }
            _ => {
                let port = if self.port == 0 {
                    self.security.default_port()
                } else {
                    self.port
                };
                (self.host.clone(), port, self.security)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_icloud_endpoint() {
        let config = SmtpConfig::icloud("me@icloud.com", "app-password");
        assert_eq!(
            config.endpoint(),
            ("smtp.mail.me.com".to_string(), 587, Security::StartTls)
        );
    }

    #[test]
    fn test_microsoft_endpoint() {
        let config = SmtpConfig::microsoft("me@outlook.com", "secret");
        assert_eq!(
            config.endpoint(),
            ("smtp.office365.com".to_string(), 587, Security::StartTls)
        );
    }

    #[test]
    fn test_preset_port_override() {
        let mut config = SmtpConfig::icloud("me@icloud.com", "pw");
        config.port = 2525;
        assert_eq!(config.endpoint().1, 2525);
    }

    #[test]
    fn test_custom_default_port() {
        let config = SmtpConfig::custom("mail.example.com", 0, Security::Tls, "u", "p");
        assert_eq!(
            config.endpoint(),
            ("mail.example.com".to_string(), 465, Security::Tls)
        );
    }

    #[test]
    fn test_security_default_ports() {
        assert_eq!(Security::None.default_port(), 25);
        assert_eq!(Security::StartTls.default_port(), 587);
        assert_eq!(Security::Tls.default_port(), 465);
    }

    #[test]
    fn test_deserialize_preset() {
        let config: SmtpConfig = serde_json::from_str(
            r#"{ "service": "icloud", "username": "me@icloud.com", "password": "pw" }"#,
        )
        .unwrap();
        assert_eq!(config.service, SmtpService::ICloud);
        assert_eq!(config.endpoint().0, "smtp.mail.me.com");
    }

    #[test]
    fn test_deserialize_custom() {
        let config: SmtpConfig = serde_json::from_str(
            r#"{ "host": "localhost", "port": 1025, "security": "none", "username": "", "password": "" }"#,
        )
        .unwrap();
        assert_eq!(config.service, SmtpService::Custom);
        assert_eq!(
            config.endpoint(),
            ("localhost".to_string(), 1025, Security::None)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = SmtpConfig::icloud("me@icloud.com", "hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("me@icloud.com"));
    }
}
