//! The public mail client.

use std::path::{Path, PathBuf};

use mailcourier_smtp::{Address, EmailMessage, MailTransport, Recipients, SmtpMailer};
use mailcourier_template::handlebars::HelperDef;
use mailcourier_template::{Composer, TemplateRegistry};
use mailcourier_theme::{Theme, generate_style_tag, merge_theme};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::builtin;
use crate::config::CourierConfig;
use crate::emails::{
    NewsletterEmail, NotificationEmail, PasswordResetEmail, TemplatedEmail, UnsubscribeEmail,
    VerificationEmail, WelcomeEmail,
};
use crate::error::Result;
use crate::result::SendResult;

/// Themed, templated email over a [`MailTransport`].
///
/// Built-in templates are registered at construction. Templates loaded
/// afterwards replace built-ins with the same name.
///
/// Sending never fails: every error ends up in [`SendResult::Failed`].
/// Registering, loading, and rendering return errors to the caller.
///
/// Not meant for concurrent mutation; wrap it yourself if you share it.
#[derive(Debug)]
pub struct Courier<T: MailTransport = SmtpMailer> {
    transport: T,
    registry: TemplateRegistry,
    theme: Theme,
    default_from: Option<Address>,
    identity: String,
    templates_dir: Option<PathBuf>,
}

impl Courier<SmtpMailer> {
    /// Creates a courier that sends over SMTP.
    ///
    /// No connection is made until the first send or [`Courier::verify`].
    /// `templates_dir` is not read here; call
    /// [`Courier::load_configured_templates`].
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be created.
    pub fn new(config: CourierConfig) -> Result<Self> {
        let transport = SmtpMailer::new(&config.smtp)?;
        Self::with_transport(config, transport)
    }
}

impl<T: MailTransport> Courier<T> {
    /// Creates a courier that sends through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn with_transport(config: CourierConfig, transport: T) -> Result<Self> {
        let mut registry = TemplateRegistry::new();
        builtin::register(&mut registry)?;

        Ok(Self {
            transport,
            registry,
            theme: merge_theme(config.theme.as_ref()),
            default_from: config.default_from,
            identity: config.smtp.username,
            templates_dir: config.templates_dir,
        })
    }

    /// The merged theme used for every rendered email.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The theme's stylesheet wrapped in a `<style>` tag.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        generate_style_tag(&self.theme)
    }

    /// The transport messages are handed to.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The template registry.
    #[must_use]
    pub const fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Sends `message` as is.
    pub async fn send(&self, message: &EmailMessage) -> SendResult {
        let mail = message.to_outgoing(self.default_from.as_ref(), &self.identity);

        match self.transport.send_mail(&mail).await {
            Ok(sent) => {
                info!(
                    to = %mail.to_formatted(),
                    message_id = %sent.message_id,
                    "Email sent"
                );
                SendResult::Sent {
                    message_id: sent.message_id,
                }
            }
            Err(e) => {
                warn!(
                    to = %mail.to_formatted(),
                    error = %e,
                    permanent = e.is_permanent(),
                    transient = e.is_transient(),
                    "Failed to send email"
                );
                SendResult::failed(e)
            }
        }
    }

    /// Renders template `name` with `data` as the HTML body of `message`
    /// and sends it.
    ///
    /// When `data` has no `subject`, the message subject is used for the
    /// layout title.
    pub async fn send_with_template(
        &self,
        name: &str,
        data: &Value,
        mut message: EmailMessage,
    ) -> SendResult {
        let mut data = data.clone();
        if let Value::Object(map) = &mut data {
            map.entry("subject")
                .or_insert_with(|| Value::String(message.subject.clone()));
        }

        match self.render_template(name, &data) {
            Ok(html) => {
                message.html = Some(html);
                self.send(&message).await
            }
            Err(e) => {
                warn!(template = name, error = %e, "Failed to render email");
                SendResult::failed(e)
            }
        }
    }

    /// Sends a typed email through its template.
    pub async fn send_templated<E: TemplatedEmail>(
        &self,
        to: impl Into<Recipients>,
        email: &E,
    ) -> SendResult {
        let mut data = match serde_json::to_value(email) {
            Ok(data) => data,
            Err(e) => return SendResult::failed(e),
        };
        if let (Value::Object(map), Some(title)) = (&mut data, email.title()) {
            map.insert("title".into(), Value::String(title));
        }

        let message = EmailMessage::new(to, email.subject());
        self.send_with_template(E::TEMPLATE, &data, message).await
    }

    /// Sends the `welcome` template.
    pub async fn send_welcome(&self, to: impl Into<Recipients>, email: &WelcomeEmail) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Sends the `verification` template.
    pub async fn send_verification(
        &self,
        to: impl Into<Recipients>,
        email: &VerificationEmail,
    ) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Sends the `password-reset` template.
    pub async fn send_password_reset(
        &self,
        to: impl Into<Recipients>,
        email: &PasswordResetEmail,
    ) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Sends the `notification` template.
    pub async fn send_notification(
        &self,
        to: impl Into<Recipients>,
        email: &NotificationEmail,
    ) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Sends the `newsletter` template.
    pub async fn send_newsletter(
        &self,
        to: impl Into<Recipients>,
        email: &NewsletterEmail,
    ) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Sends the `unsubscribe` template.
    pub async fn send_unsubscribe(
        &self,
        to: impl Into<Recipients>,
        email: &UnsubscribeEmail,
    ) -> SendResult {
        self.send_templated(to, email).await
    }

    /// Registers a template from source, replacing any with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not compile.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.registry.register_inline(name, source)?;
        Ok(())
    }

    /// Registers a partial from source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not compile.
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<()> {
        self.registry.register_partial(name, source)?;
        Ok(())
    }

    /// Registers a template helper.
    pub fn register_helper(&mut self, name: &str, helper: Box<dyn HelperDef + Send + Sync>) {
        self.registry.register_helper(name, helper);
    }

    /// Registers a template read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not compile.
    pub async fn load_template(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        self.registry.load_from_file(name, path).await?;
        Ok(())
    }

    /// Loads partials, layouts, and templates from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist, a file cannot be read, or a
    /// source does not compile.
    pub async fn load_templates_from_directory(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        self.registry.load_directory(dir).await?;
        Ok(())
    }

    /// Loads the configured `templates_dir`, if any.
    ///
    /// # Errors
    ///
    /// Same as [`Courier::load_templates_from_directory`].
    pub async fn load_configured_templates(&mut self) -> Result<()> {
        if let Some(dir) = self.templates_dir.clone() {
            self.load_templates_from_directory(&dir).await?;
        }
        Ok(())
    }

    /// Renders template `name` inside the main layout.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not registered or rendering fails.
    pub fn render_template(&self, name: &str, data: &Value) -> Result<String> {
        Ok(Composer::new(&self.registry, &self.theme).render(name, data)?)
    }

    /// Checks the connection and credentials. Failures yield `false`.
    pub async fn verify(&self) -> bool {
        match self.transport.verify().await {
            Ok(ok) => ok,
            Err(e) => {
                warn!(error = %e, "Transport verification failed");
                false
            }
        }
    }

    /// Releases the transport.
    pub fn close(self) {
        debug!("Closing courier");
        self.transport.close();
    }
}
