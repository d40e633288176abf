//! # mailcourier-smtp
//!
//! SMTP configuration, provider presets, addressing, and the mail transport
//! boundary used by `mailcourier`.
//!
//! ## Features
//!
//! - **Provider presets**: iCloud and Microsoft 365 host/port/security
//! - **Flexible addressing**: bare strings, named addresses, or lists
//! - **Pluggable transport**: [`MailTransport`] with an SMTP implementation
//!   on lettre ([`SmtpMailer`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use mailcourier_smtp::{EmailMessage, MailTransport, SmtpConfig, SmtpMailer};
//!
//! # async fn example() -> mailcourier_smtp::Result<()> {
//! let config = SmtpConfig::icloud("me@icloud.com", "app-specific-password");
//! let mailer = SmtpMailer::new(&config)?;
//!
//! let mail = EmailMessage::new("friend@example.com", "Hello")
//!     .text("Hello from Rust!")
//!     .to_outgoing(None, &config.username);
//!
//! let sent = mailer.send_mail(&mail).await?;
//! println!("Sent {}", sent.message_id);
//! mailer.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`address`]: Addresses and recipient lists
//! - [`config`]: Server configuration and presets
//! - [`message`]: Caller-facing and resolved messages
//! - [`transport`]: The transport trait
//! - [`mailer`]: SMTP transport on lettre

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod address;
pub mod config;
mod error;
pub mod mailer;
pub mod message;
pub mod transport;

pub use address::{Address, Recipients, format_address};
pub use config::{ICLOUD, MICROSOFT, Security, SmtpConfig, SmtpPreset, SmtpService};
pub use error::{Error, Result};
pub use mailer::SmtpMailer;
pub use message::{EmailMessage, OutgoingMail};
pub use transport::{MailTransport, SentMail};

/// Re-exported so callers can implement [`MailTransport`] without a direct
/// dependency.
pub use async_trait::async_trait;
