//! Typed data for the built-in email kinds.
//!
//! Each record serializes (camelCase) into the data its template expects and
//! knows its template name and subject. [`crate::Courier::send_templated`]
//! is the one composition path for all of them.

use serde::{Deserialize, Serialize};

/// An email kind with a fixed template.
pub trait TemplatedEmail: Serialize {
    /// Registered template name.
    const TEMPLATE: &'static str;

    /// Subject line.
    fn subject(&self) -> String;

    /// Document title injected into the layout data, if the kind sets one.
    fn title(&self) -> Option<String> {
        None
    }
}

/// Fields every kind may carry for the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    /// Company name shown in the header and footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Logo shown in the header instead of the company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Unsubscribe link shown in the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribe_url: Option<String>,
}

impl Branding {
    fn company(&self) -> &str {
        self.company_name
            .as_deref()
            .unwrap_or(mailcourier_template::compose::DEFAULT_COMPANY_NAME)
    }
}

/// Greets a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeEmail {
    /// Recipient's name.
    pub name: String,
    /// Call-to-action link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl TemplatedEmail for WelcomeEmail {
    const TEMPLATE: &'static str = "welcome";

    fn subject(&self) -> String {
        format!("Welcome to {}!", self.branding.company())
    }

    fn title(&self) -> Option<String> {
        Some(format!("Welcome to {}", self.branding.company()))
    }
}

/// Asks the recipient to confirm their address with a code or link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEmail {
    /// Recipient's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One-time code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Verification link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,
    /// Human-readable validity, e.g. `"10 minutes"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl TemplatedEmail for VerificationEmail {
    const TEMPLATE: &'static str = "verification";

    fn subject(&self) -> String {
        "Verify your email address".to_string()
    }
}

/// Password reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetEmail {
    /// Recipient's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reset link.
    pub reset_url: String,
    /// Human-readable validity, e.g. `"1 hour"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl TemplatedEmail for PasswordResetEmail {
    const TEMPLATE: &'static str = "password-reset";

    fn subject(&self) -> String {
        "Reset your password".to_string()
    }
}

/// Severity of a [`NotificationEmail`], used for the box style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Neutral information.
    #[default]
    Info,
    /// Something succeeded.
    Success,
    /// Needs attention.
    Warning,
    /// Something failed.
    Error,
}

/// General-purpose notice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEmail {
    /// Subject line, also the page title.
    pub subject: String,
    /// Optional heading above the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Message body.
    pub message: String,
    /// Box style.
    #[serde(default)]
    pub level: NotificationLevel,
    /// Call-to-action link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl TemplatedEmail for NotificationEmail {
    const TEMPLATE: &'static str = "notification";

    fn subject(&self) -> String {
        self.subject.clone()
    }
}

/// One section of a [`NewsletterEmail`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSection {
    /// Section heading.
    pub title: String,
    /// Section text.
    pub content: String,
    /// Inline image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// "Read more" link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Label for `link_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

/// Multi-section newsletter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterEmail {
    /// Subject line.
    pub subject: String,
    /// Main heading.
    pub headline: String,
    /// Paragraph under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    /// Hero image above the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    /// Sections, in order.
    #[serde(default)]
    pub sections: Vec<NewsletterSection>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl NewsletterEmail {
    /// Appends a section.
    #[must_use]
    pub fn section(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.sections.push(NewsletterSection {
            title: title.into(),
            content: content.into(),
            ..NewsletterSection::default()
        });
        self
    }
}

impl TemplatedEmail for NewsletterEmail {
    const TEMPLATE: &'static str = "newsletter";

    fn subject(&self) -> String {
        self.subject.clone()
    }
}

/// Confirms an unsubscribe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeEmail {
    /// Address that was unsubscribed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Name of the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    /// Link to undo the unsubscribe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resubscribe_url: Option<String>,
    /// Layout branding.
    #[serde(flatten)]
    pub branding: Branding,
}

impl TemplatedEmail for UnsubscribeEmail {
    const TEMPLATE: &'static str = "unsubscribe";

    fn subject(&self) -> String {
        "You have been unsubscribed".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_welcome_title_uses_company() {
        let email = WelcomeEmail {
            name: "Alice".into(),
            branding: Branding {
                company_name: Some("Acme".into()),
                ..Branding::default()
            },
            ..WelcomeEmail::default()
        };
        assert_eq!(email.title().as_deref(), Some("Welcome to Acme"));
        assert_eq!(email.subject(), "Welcome to Acme!");
    }

    #[test]
    fn test_welcome_title_without_company() {
        let email = WelcomeEmail::default();
        assert_eq!(email.title().as_deref(), Some("Welcome to Your Company"));
    }

    #[test]
    fn test_serializes_camel_case_flat() {
        let email = PasswordResetEmail {
            reset_url: "https://r".into(),
            expires_in: Some("1 hour".into()),
            branding: Branding {
                company_name: Some("Acme".into()),
                ..Branding::default()
            },
            ..PasswordResetEmail::default()
        };
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({ "resetUrl": "https://r", "expiresIn": "1 hour", "companyName": "Acme" })
        );
    }

    #[test]
    fn test_notification_level_serializes_lowercase() {
        let email = NotificationEmail {
            subject: "s".into(),
            message: "m".into(),
            level: NotificationLevel::Warning,
            ..NotificationEmail::default()
        };
        assert_eq!(serde_json::to_value(&email).unwrap()["level"], "warning");
    }

    #[test]
    fn test_newsletter_sections_builder() {
        let email = NewsletterEmail {
            subject: "News".into(),
            headline: "Hello".into(),
            ..NewsletterEmail::default()
        }
        .section("One", "First")
        .section("Two", "Second");
        assert_eq!(email.sections.len(), 2);
        assert_eq!(email.sections[1].title, "Two");
    }

    #[test]
    fn test_template_names() {
        assert_eq!(WelcomeEmail::TEMPLATE, "welcome");
        assert_eq!(PasswordResetEmail::TEMPLATE, "password-reset");
        assert_eq!(UnsubscribeEmail::TEMPLATE, "unsubscribe");
    }
}
