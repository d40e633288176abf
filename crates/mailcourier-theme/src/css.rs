//! Stylesheet generation.
//!
//! Produces one rule per semantic class. Every themed property is read from
//! the [`Theme`]; the only literals are layout values no theme controls and
//! the two documented fallbacks for optional colors.
//!
//! Values are interpolated verbatim. Themes are operator-supplied branding and
//! must never carry end-user input.

use std::fmt::Write;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Theme;

/// Class applied to the outer email container.
pub const CLASS_CONTAINER: &str = "email-container";

/// Used when `colors.backgroundSubtle` is not set.
pub const FALLBACK_BACKGROUND_SUBTLE: &str = "#fafafa";

/// Used when `colors.borderSoft` is not set.
pub const FALLBACK_BORDER_SOFT: &str = "#f0f0f0";

/// Line height of `.email-heading`, tighter than body text.
pub const HEADING_LINE_HEIGHT: &str = "1.25";

/// Line height of `.email-subheading`.
pub const SUBHEADING_LINE_HEIGHT: &str = "1.35";

/// Maximum height of `.email-logo`.
pub const LOGO_HEIGHT: &str = "48px";

/// Width and height of `.email-avatar`.
pub const AVATAR_SIZE: &str = "48px";

/// Generates bare CSS rule text for `theme`.
#[must_use]
pub fn generate_css(theme: &Theme) -> String {
    let mut css = StyleSheet::default();
    let c = &theme.colors;
    let t = &theme.typography;
    let s = &theme.spacing;
    let b = &theme.borders;
    let subtle = c
        .background_subtle
        .as_deref()
        .unwrap_or(FALLBACK_BACKGROUND_SUBTLE);
    let soft = c.border_soft.as_deref().unwrap_or(FALLBACK_BORDER_SOFT);

    css.rule(
        "body",
        &[
            ("margin", "0"),
            ("padding", "0"),
            ("background-color", &c.background_alt),
            ("font-family", &t.font_family),
            ("color", &c.text),
        ],
    );
    css.rule(
        &format!(".{CLASS_CONTAINER}"),
        &[
            ("max-width", &theme.container.max_width),
            ("margin", "0 auto"),
            ("padding", &s.container_padding),
            ("background-color", &c.background),
            ("font-family", &t.font_family),
            ("font-size", &t.font_size.base),
            ("line-height", &t.line_height),
            ("color", &c.text),
        ],
    );

    // Headings and text
    css.rule(
        ".email-heading",
        &[
            ("margin", &format!("0 0 {}", s.md)),
            ("font-size", &t.font_size.xxl),
            ("font-weight", &t.font_weight.bold),
            ("line-height", HEADING_LINE_HEIGHT),
            ("color", &c.text),
        ],
    );
    css.rule(
        ".email-subheading",
        &[
            ("margin", &format!("0 0 {}", s.sm)),
            ("font-size", &t.font_size.lg),
            ("font-weight", &t.font_weight.semibold),
            ("line-height", SUBHEADING_LINE_HEIGHT),
            ("color", &c.text),
        ],
    );
    css.rule(
        ".email-text",
        &[
            ("margin", &format!("0 0 {}", s.line)),
            ("font-size", &t.font_size.base),
            ("font-weight", &t.font_weight.normal),
            ("line-height", &t.line_height),
            ("color", &c.text),
        ],
    );
    css.rule(
        ".email-text-alt",
        &[
            ("margin", &format!("0 0 {}", s.line)),
            ("font-size", &t.font_size.base),
            ("color", &c.text_alt),
        ],
    );
    css.rule(
        ".email-text-muted",
        &[("font-size", &t.font_size.sm), ("color", &c.text_muted)],
    );

    // Buttons
    let button_padding = format!("{} {}", s.sm, s.lg);
    css.rule(
        ".email-button",
        &[
            ("display", "inline-block"),
            ("padding", &button_padding),
            ("font-size", &t.font_size.base),
            ("font-weight", &t.font_weight.semibold),
            ("text-decoration", "none"),
            ("color", &c.text),
            ("background-color", &c.background),
            ("border", &format!("{} solid {}", b.width, c.border)),
            ("border-radius", &b.radius),
        ],
    );
    css.rule(
        ".email-button-primary",
        &[
            ("color", &c.accent_text),
            ("background-color", &c.accent),
            ("border-color", &c.accent),
        ],
    );
    css.rule(
        ".email-button-primary:hover",
        &[
            ("background-color", &c.accent_hover),
            ("border-color", &c.accent_hover),
        ],
    );
    css.rule(
        ".email-button-accent",
        &[
            ("color", &c.accent),
            ("background-color", &c.accent_muted),
            ("border-color", &c.accent_muted),
        ],
    );

    // Links
    css.rule(
        ".email-link",
        &[("color", &c.accent), ("text-decoration", "underline")],
    );
    css.rule(".email-link:hover", &[("color", &c.accent_hover)]);
    css.rule(
        ".email-link-muted",
        &[("color", &c.text_muted), ("text-decoration", "underline")],
    );

    // Dividers
    let divider_margin = format!("{} 0", s.lg);
    css.rule(
        ".email-divider",
        &[
            ("margin", &divider_margin),
            ("border", "0"),
            ("border-top", &format!("{} solid {}", b.width_thin, c.border)),
        ],
    );
    css.rule(
        ".email-divider-thick",
        &[
            ("margin", &divider_margin),
            ("border", "0"),
            ("border-top", &format!("{} solid {}", b.width_thick, c.border)),
        ],
    );
    css.rule(
        ".email-divider-double",
        &[
            ("margin", &divider_margin),
            ("border", "0"),
            ("border-top", &format!("{} double {}", b.width_double, c.border)),
        ],
    );

    // Sections and boxes
    css.rule(
        ".email-section",
        &[
            ("padding", &format!("{} 0", s.md)),
            ("border-bottom", &format!("{} solid {}", b.width_thin, soft)),
        ],
    );
    let box_padding = s.md.as_str();
    let box_margin = format!("0 0 {}", s.md);
    css.rule(
        ".email-box",
        &[
            ("padding", box_padding),
            ("margin", &box_margin),
            ("border", &format!("{} solid {}", b.width, c.border)),
            ("border-radius", &b.radius),
        ],
    );
    css.rule(
        ".email-box-alt",
        &[
            ("padding", box_padding),
            ("margin", &box_margin),
            ("background-color", &c.background_alt),
            ("border", &format!("{} solid {}", b.width, soft)),
            ("border-radius", &b.radius),
        ],
    );
    css.rule(
        ".email-box-highlight",
        &[
            ("padding", box_padding),
            ("margin", &box_margin),
            ("background-color", &c.accent_muted),
            ("border-left", &format!("{} solid {}", b.width_thick, c.accent)),
            ("border-radius", &b.radius),
        ],
    );
    for (name, color) in [
        ("success", &c.success),
        ("warning", &c.warning),
        ("error", &c.error),
        ("info", &c.info),
    ] {
        css.rule(
            &format!(".email-box-{name}"),
            &[
                ("padding", box_padding),
                ("margin", &box_margin),
                ("background-color", subtle),
                ("border-left", &format!("{} solid {}", b.width_double, color)),
                ("border-radius", &b.radius),
                ("color", &c.text),
            ],
        );
    }

    // Footer and code
    css.rule(
        ".email-footer",
        &[
            ("margin-top", &s.xl),
            ("padding-top", &s.md),
            ("border-top", &format!("{} solid {}", b.width_thin, c.border)),
            ("font-size", &t.font_size.sm),
            ("color", &c.text_muted),
            ("text-align", "center"),
        ],
    );
    css.rule(
        ".email-code",
        &[
            ("padding", &format!("{} {}", s.xs, s.sm)),
            ("font-family", &t.font_family_mono),
            ("font-size", &t.font_size.sm),
            ("background-color", &c.background_alt),
            ("border-radius", &b.radius),
        ],
    );
    css.rule(
        ".email-code-large",
        &[
            ("display", "block"),
            ("padding", &s.md),
            ("margin", &box_margin),
            ("font-family", &t.font_family_mono),
            ("font-size", &t.font_size.xxl),
            ("font-weight", &t.font_weight.bold),
            ("letter-spacing", "0.2em"),
            ("text-align", "center"),
            ("background-color", &c.background_alt),
            ("border", &format!("{} dashed {}", b.width, c.border)),
            ("border-radius", &b.radius),
        ],
    );

    // Spacing utilities
    for (name, value) in [
        ("xs", &s.xs),
        ("sm", &s.sm),
        ("md", &s.md),
        ("lg", &s.lg),
        ("xl", &s.xl),
    ] {
        css.rule(&format!(".email-mt-{name}"), &[("margin-top", value)]);
        css.rule(&format!(".email-mb-{name}"), &[("margin-bottom", value)]);
    }

    // Images
    css.rule(
        ".email-image-hero",
        &[
            ("display", "block"),
            ("width", "100%"),
            ("height", "auto"),
            ("margin", &format!("0 0 {}", s.lg)),
            ("border-radius", &b.radius),
        ],
    );
    css.rule(
        ".email-image-inline",
        &[
            ("display", "inline-block"),
            ("max-width", "100%"),
            ("height", "auto"),
            ("vertical-align", "middle"),
        ],
    );
    css.rule(
        ".email-image-left",
        &[
            ("float", "left"),
            ("max-width", "50%"),
            ("height", "auto"),
            ("margin", &format!("0 {} {} 0", s.md, s.sm)),
        ],
    );
    css.rule(
        ".email-image-right",
        &[
            ("float", "right"),
            ("max-width", "50%"),
            ("height", "auto"),
            ("margin", &format!("0 0 {} {}", s.sm, s.md)),
        ],
    );
    css.rule(
        ".email-logo",
        &[
            ("display", "block"),
            ("max-height", LOGO_HEIGHT),
            ("width", "auto"),
            ("margin", &format!("0 0 {}", s.lg)),
        ],
    );
    css.rule(
        ".email-avatar",
        &[
            ("width", AVATAR_SIZE),
            ("height", AVATAR_SIZE),
            ("border-radius", "50%"),
            ("border", &format!("{} solid {}", b.width, c.border)),
        ],
    );

    css.finish()
}

/// Generates the stylesheet wrapped in a `<style>` element.
#[must_use]
pub fn generate_style_tag(theme: &Theme) -> String {
    format!("<style type=\"text/css\">\n{}</style>", generate_css(theme))
}

/// Generates CSS from an untyped theme value.
///
/// # Errors
///
/// Returns [`Error::Configuration`] naming every absent or null top-level
/// group, or [`Error::Invalid`] when a present group is incomplete.
pub fn generate_css_from_value(value: &serde_json::Value) -> Result<String> {
    let missing: Vec<&'static str> = Theme::GROUPS
        .into_iter()
        .filter(|group| value.get(group).is_none_or(serde_json::Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(Error::Configuration { missing });
    }

    let theme = Theme::deserialize(value)?;
    Ok(generate_css(&theme))
}

#[derive(Default)]
struct StyleSheet {
    out: String,
}

impl StyleSheet {
    fn rule(&mut self, selector: &str, declarations: &[(&str, &str)]) {
        let _ = writeln!(self.out, "{selector} {{");
        for (property, value) in declarations {
            let _ = writeln!(self.out, "  {property}: {value};");
        }
        self.out.push_str("}\n");
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorsConfig, ThemeConfig};
    use crate::merge::merge_theme;

    const EXPECTED_CLASSES: &[&str] = &[
        ".email-container",
        ".email-heading",
        ".email-subheading",
        ".email-text",
        ".email-text-alt",
        ".email-text-muted",
        ".email-button",
        ".email-button-primary",
        ".email-button-accent",
        ".email-link",
        ".email-link-muted",
        ".email-divider",
        ".email-divider-thick",
        ".email-divider-double",
        ".email-section",
        ".email-box",
        ".email-box-alt",
        ".email-box-highlight",
        ".email-box-success",
        ".email-box-warning",
        ".email-box-error",
        ".email-box-info",
        ".email-footer",
        ".email-code",
        ".email-code-large",
        ".email-mt-xs",
        ".email-mb-xl",
        ".email-image-hero",
        ".email-image-inline",
        ".email-image-left",
        ".email-image-right",
        ".email-logo",
        ".email-avatar",
    ];

    #[test]
    fn test_emits_every_class() {
        let css = generate_css(&Theme::default());
        for class in EXPECTED_CLASSES {
            assert!(css.contains(&format!("{class} {{")), "missing {class}");
        }
    }

    #[test]
    fn test_deterministic() {
        let config = ThemeConfig {
            colors: Some(ColorsConfig {
                accent: Some("#123abc".into()),
                ..ColorsConfig::default()
            }),
            ..ThemeConfig::default()
        };
        let first = generate_css(&merge_theme(Some(&config)));
        let second = generate_css(&merge_theme(Some(&config)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_values_come_from_theme() {
        let mut theme = Theme::default();
        theme.colors.accent = "#abcdef".into();
        theme.container.max_width = "720px".into();
        theme.typography.font_family_mono = "Fira Code".into();

        let css = generate_css(&theme);
        assert!(css.contains("background-color: #abcdef;"));
        assert!(css.contains("max-width: 720px;"));
        assert!(css.contains("font-family: Fira Code;"));
        assert!(!css.contains(&Theme::default().colors.accent));
    }

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css.find(&format!("{selector} {{")).unwrap();
        let end = start + css[start..].find('}').unwrap();
        &css[start..end]
    }

    #[test]
    fn test_layout_constants() {
        let css = generate_css(&Theme::default());
        assert!(
            rule(&css, ".email-heading").contains(&format!("line-height: {HEADING_LINE_HEIGHT};"))
        );
        assert!(
            rule(&css, ".email-subheading")
                .contains(&format!("line-height: {SUBHEADING_LINE_HEIGHT};"))
        );
        assert!(rule(&css, ".email-logo").contains(&format!("max-height: {LOGO_HEIGHT};")));
        let avatar = rule(&css, ".email-avatar");
        assert!(avatar.contains(&format!("width: {AVATAR_SIZE};")));
        assert!(avatar.contains(&format!("height: {AVATAR_SIZE};")));
    }

    #[test]
    fn test_optional_fallbacks() {
        let css = generate_css(&Theme::light());
        assert!(css.contains(FALLBACK_BACKGROUND_SUBTLE));
        assert!(css.contains(FALLBACK_BORDER_SOFT));

        let css = generate_css(&Theme::dark());
        assert!(!css.contains(FALLBACK_BACKGROUND_SUBTLE));
        assert!(!css.contains(FALLBACK_BORDER_SOFT));
    }

    #[test]
    fn test_style_tag_wraps_rules() {
        let theme = Theme::default();
        let tag = generate_style_tag(&theme);
        assert!(tag.starts_with("<style type=\"text/css\">"));
        assert!(tag.ends_with("</style>"));
        assert!(tag.contains(&generate_css(&theme)));
    }

    #[test]
    fn test_missing_groups_rejected() {
        let err = generate_css_from_value(&serde_json::json!({ "colors": {} })).unwrap_err();
        assert_eq!(
            err.missing_groups(),
            ["typography", "spacing", "borders", "container"]
        );
        assert!(err.to_string().contains("typography, spacing"));
    }

    #[test]
    fn test_null_group_counts_as_missing() {
        let mut value = serde_json::to_value(Theme::default()).unwrap();
        value["borders"] = serde_json::Value::Null;
        let err = generate_css_from_value(&value).unwrap_err();
        assert_eq!(err.missing_groups(), ["borders"]);
    }

    #[test]
    fn test_incomplete_group_is_invalid() {
        let mut value = serde_json::to_value(Theme::default()).unwrap();
        value["colors"].as_object_mut().unwrap().remove("accent");
        let err = generate_css_from_value(&value).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
    }

    #[test]
    fn test_complete_value_matches_typed() {
        let theme = Theme::dark();
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(generate_css_from_value(&value).unwrap(), generate_css(&theme));
    }
}
