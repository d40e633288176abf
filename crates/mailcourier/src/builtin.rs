//! Templates compiled into the crate.

use mailcourier_template::handlebars::handlebars_helper;
use mailcourier_template::{MAIN_LAYOUT, Result, TemplateRegistry};
use serde_json::Value as Json;

const LAYOUT_MAIN: &str = include_str!("../templates/layouts/main.hbs");

const PARTIALS: [(&str, &str); 3] = [
    ("header", include_str!("../templates/partials/header.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
    ("button", include_str!("../templates/partials/button.hbs")),
];

const TEMPLATES: [(&str, &str); 6] = [
    ("welcome", include_str!("../templates/welcome.hbs")),
    ("verification", include_str!("../templates/verification.hbs")),
    ("password-reset", include_str!("../templates/password-reset.hbs")),
    ("notification", include_str!("../templates/notification.hbs")),
    ("newsletter", include_str!("../templates/newsletter.hbs")),
    ("unsubscribe", include_str!("../templates/unsubscribe.hbs")),
];

// `{{default value "fallback"}}`: fallback when value is null or "".
handlebars_helper!(default_helper: |value: Json, fallback: Json| {
    match value {
        Json::Null => fallback.clone(),
        Json::String(s) if s.is_empty() => fallback.clone(),
        _ => value.clone(),
    }
});

#[cfg(test)]
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(name, _)| *name)
}

/// Registers the `default` helper, partials, main layout, and templates.
///
/// # Errors
///
/// Returns an error if a built-in source fails to compile.
pub fn register(registry: &mut TemplateRegistry) -> Result<()> {
    registry.register_helper("default", Box::new(default_helper));

    for (name, source) in PARTIALS {
        registry.register_partial(name, source)?;
    }
    registry.register_layout(MAIN_LAYOUT, LAYOUT_MAIN)?;
    for (name, source) in TEMPLATES {
        registry.register_inline(name, source)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mailcourier_template::Composer;
    use mailcourier_theme::Theme;
    use serde_json::json;

    fn registry() -> TemplateRegistry {
        let mut registry = TemplateRegistry::new();
        register(&mut registry).unwrap();
        registry
    }

    fn render(name: &str, data: &Json) -> String {
        let registry = registry();
        let theme = Theme::default();
        Composer::new(&registry, &theme).render(name, data).unwrap()
    }

    #[test]
    fn test_all_builtins_registered() {
        let registry = registry();
        for name in template_names() {
            assert!(registry.has_template(name), "{name}");
        }
        assert!(registry.has_layout(MAIN_LAYOUT));
    }

    #[test]
    fn test_welcome_end_to_end() {
        let html = render(
            "welcome",
            &json!({
                "name": "Alice",
                "companyName": "Acme",
                "year": 2025,
                "actionUrl": "https://x"
            }),
        );
        assert!(html.contains("Welcome, Alice!"));
        assert!(html.contains("class=\"email-container\""));
        assert!(html.contains("href=\"https://x\""));
        assert!(html.contains(">Get started</a>"));
        assert!(html.contains("2025 Acme"));
        assert!(html.contains(".email-button-primary {"));
    }

    #[test]
    fn test_default_helper_prefers_value() {
        let html = render(
            "welcome",
            &json!({ "actionUrl": "https://x", "actionText": "Go" }),
        );
        assert!(html.contains(">Go</a>"));
        assert!(!html.contains("Get started"));
    }

    #[test]
    fn test_verification_code() {
        let html = render("verification", &json!({ "code": "123456", "expiresIn": "10 minutes" }));
        assert!(html.contains("<p class=\"email-code-large\">123456</p>"));
        assert!(html.contains("expires in 10 minutes"));
    }

    #[test]
    fn test_notification_level() {
        let html = render("notification", &json!({ "message": "Disk full", "level": "warning" }));
        assert!(html.contains("email-box-warning"));

        let html = render("notification", &json!({ "message": "Done" }));
        assert!(html.contains("email-box-info"));
    }

    #[test]
    fn test_newsletter_sections() {
        let html = render(
            "newsletter",
            &json!({
                "headline": "March news",
                "sections": [
                    { "title": "One", "content": "First" },
                    { "title": "Two", "content": "Second", "linkUrl": "https://y" }
                ]
            }),
        );
        assert!(html.contains("March news"));
        assert!(html.contains(">One</h2>"));
        assert!(html.contains(">Read more</a>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render("welcome", &json!({ "name": "<script>" }));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unsubscribe_footer_link() {
        let html = render(
            "unsubscribe",
            &json!({ "email": "a@b.com", "unsubscribeUrl": "https://u" }),
        );
        assert!(html.contains("a@b.com will no longer receive these emails"));
        assert!(html.contains("href=\"https://u\""));
    }
}
