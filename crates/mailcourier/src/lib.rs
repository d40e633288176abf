//! # mailcourier
//!
//! Themed, templated transactional email over SMTP.
//!
//! ## Features
//!
//! - **Provider presets**: iCloud and Microsoft 365 with only credentials
//! - **Built-in templates**: welcome, verification, password reset,
//!   notification, newsletter, and unsubscribe, wrapped in a responsive layout
//! - **Theming**: override any color, font, spacing, or border value; the
//!   stylesheet is regenerated for every email
//! - **Your own templates**: register inline sources or load a directory of
//!   Handlebars files with `partials/` and `layouts/`
//! - **Best-effort sending**: senders return a [`SendResult`] instead of
//!   failing
//!
//! ## Quick Start
//!
//! ```no_run
//! use mailcourier::{Courier, CourierConfig, SmtpConfig, WelcomeEmail};
//!
//! # async fn example() -> mailcourier::Result<()> {
//! let config = CourierConfig::new(SmtpConfig::icloud("me@icloud.com", "app-password"))
//!     .default_from("noreply@example.com");
//! let courier = Courier::new(config)?;
//!
//! let welcome = WelcomeEmail {
//!     name: "Alice".into(),
//!     action_url: Some("https://example.com/start".into()),
//!     ..WelcomeEmail::default()
//! };
//! let result = courier.send_welcome("alice@example.com", &welcome).await;
//! if let Some(error) = result.error() {
//!     eprintln!("send failed: {error}");
//! }
//! courier.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - [`mailcourier_theme`]: theme model, merging, and CSS
//! - [`mailcourier_template`]: template registry and layout composition
//! - [`mailcourier_smtp`]: SMTP configuration, addressing, and transport

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod builtin;
pub mod config;
pub mod courier;
pub mod emails;
mod error;
pub mod result;

pub use config::CourierConfig;
pub use courier::Courier;
pub use emails::{
    Branding, NewsletterEmail, NewsletterSection, NotificationEmail, NotificationLevel,
    PasswordResetEmail, TemplatedEmail, UnsubscribeEmail, VerificationEmail, WelcomeEmail,
};
pub use error::{Error, Result};
pub use result::SendResult;

pub use mailcourier_smtp::{
    Address, EmailMessage, ICLOUD, MICROSOFT, MailTransport, OutgoingMail, Recipients, Security,
    SentMail, SmtpConfig, SmtpMailer, SmtpService, async_trait,
};
pub use mailcourier_template::{MAIN_LAYOUT, TemplateRegistry};
pub use mailcourier_theme::{Theme, ThemeConfig};

pub use mailcourier_smtp;
pub use mailcourier_template;
pub use mailcourier_theme;
