//! Theme model types.
//!
//! A [`Theme`] carries every value the CSS generator reads. Values are CSS
//! strings and are passed through untouched, so an invalid color or size ends
//! up verbatim in the generated stylesheet.

use serde::{Deserialize, Serialize};

/// Color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    /// Primary text color.
    pub text: String,
    /// Secondary text color.
    #[serde(alias = "textSecondary")]
    pub text_alt: String,
    /// Muted text (captions, footers).
    pub text_muted: String,
    /// Page background.
    pub background: String,
    /// Alternate background for boxes and code.
    pub background_alt: String,
    /// Very light background for status boxes. Falls back to a literal when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_subtle: Option<String>,
    /// Default border color.
    pub border: String,
    /// Soft border used by sections and boxes. Falls back to a literal when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_soft: Option<String>,
    /// Accent (brand) color.
    pub accent: String,
    /// Accent color on hover.
    pub accent_hover: String,
    /// Pale accent used for highlighted boxes.
    pub accent_muted: String,
    /// Text drawn on top of the accent color.
    pub accent_text: String,
    /// Success status color.
    pub success: String,
    /// Warning status color.
    pub warning: String,
    /// Error status color.
    pub error: String,
    /// Informational status color.
    pub info: String,
}

/// Font size scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Extra small (fine print).
    pub xs: String,
    /// Small (footers, captions).
    pub sm: String,
    /// Body text.
    pub base: String,
    /// Large (subheadings).
    pub lg: String,
    /// Extra large (headings).
    pub xl: String,
    /// Display size.
    pub xxl: String,
}

/// Font weight scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    /// Regular text.
    pub normal: String,
    /// Medium emphasis.
    pub medium: String,
    /// Semi-bold (buttons, subheadings).
    pub semibold: String,
    /// Bold (headings).
    pub bold: String,
}

/// Typography settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Body font stack.
    pub font_family: String,
    /// Monospace font stack for code blocks.
    pub font_family_mono: String,
    /// Font size scale.
    pub font_size: FontSizes,
    /// Font weight scale.
    pub font_weight: FontWeights,
    /// Body line height.
    pub line_height: String,
}

/// Spacing scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    /// Extra small gap.
    pub xs: String,
    /// Small gap.
    pub sm: String,
    /// Medium gap.
    pub md: String,
    /// Large gap.
    pub lg: String,
    /// Extra large gap.
    pub xl: String,
    /// Vertical rhythm between paragraphs.
    pub line: String,
    /// Inner padding of the email container.
    pub container_padding: String,
}

/// Border widths and radius.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borders {
    /// Default border width.
    pub width: String,
    /// Thick border width.
    pub width_thick: String,
    /// Width used for double-line dividers.
    pub width_double: String,
    /// Hairline border width.
    pub width_thin: String,
    /// Corner radius for buttons and boxes.
    pub radius: String,
}

/// Container layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Maximum width of the email body.
    pub max_width: String,
}

/// A complete theme, ready for CSS generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Color palette.
    pub colors: Colors,
    /// Typography settings.
    pub typography: Typography,
    /// Spacing scale.
    pub spacing: Spacing,
    /// Border widths.
    pub borders: Borders,
    /// Container layout.
    pub container: Container,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Names of the top-level groups, in declaration order.
    pub const GROUPS: [&'static str; 5] = ["colors", "typography", "spacing", "borders", "container"];

    /// Light theme (default).
    #[must_use]
    pub fn light() -> Self {
        Self {
            colors: Colors {
                text: "#1a1a1a".into(),
                text_alt: "#4a4a4a".into(),
                text_muted: "#8a8a8a".into(),
                background: "#ffffff".into(),
                background_alt: "#f4f4f5".into(),
                background_subtle: None,
                border: "#e4e4e7".into(),
                border_soft: None,
                accent: "#2563eb".into(),
                accent_hover: "#1d4ed8".into(),
                accent_muted: "#dbeafe".into(),
                accent_text: "#ffffff".into(),
                success: "#16a34a".into(),
                warning: "#d97706".into(),
                error: "#dc2626".into(),
                info: "#0284c7".into(),
            },
            typography: Typography {
                font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif"
                    .into(),
                font_family_mono: "SFMono-Regular, Menlo, Consolas, 'Liberation Mono', monospace"
                    .into(),
                font_size: FontSizes {
                    xs: "12px".into(),
                    sm: "14px".into(),
                    base: "16px".into(),
                    lg: "18px".into(),
                    xl: "22px".into(),
                    xxl: "28px".into(),
                },
                font_weight: FontWeights {
                    normal: "400".into(),
                    medium: "500".into(),
                    semibold: "600".into(),
                    bold: "700".into(),
                },
                line_height: "1.6".into(),
            },
            spacing: Spacing {
                xs: "4px".into(),
                sm: "8px".into(),
                md: "16px".into(),
                lg: "24px".into(),
                xl: "32px".into(),
                line: "16px".into(),
                container_padding: "32px".into(),
            },
            borders: Borders {
                width: "1px".into(),
                width_thick: "2px".into(),
                width_double: "3px".into(),
                width_thin: "1px".into(),
                radius: "6px".into(),
            },
            container: Container {
                max_width: "600px".into(),
            },
        }
    }

    /// Dark theme.
    ///
    /// Shares typography, spacing, and layout with [`Theme::light`].
    #[must_use]
    pub fn dark() -> Self {
        let mut theme = Self::light();
        theme.colors = Colors {
            text: "#ececef".into(),
            text_alt: "#b4b4bb".into(),
            text_muted: "#85858d".into(),
            background: "#18181b".into(),
            background_alt: "#232327".into(),
            background_subtle: Some("#1f1f23".into()),
            border: "#3a3a40".into(),
            border_soft: Some("#2c2c31".into()),
            accent: "#60a5fa".into(),
            accent_hover: "#93c5fd".into(),
            accent_muted: "#1e3a5f".into(),
            accent_text: "#0b1220".into(),
            success: "#4ade80".into(),
            warning: "#fbbf24".into(),
            error: "#f87171".into(),
            info: "#38bdf8".into(),
        };
        theme
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn test_dark_keeps_layout() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark.colors, light.colors);
        assert_eq!(dark.typography, light.typography);
        assert_eq!(dark.container, light.container);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Theme::light()).unwrap();
        assert_eq!(value["container"]["maxWidth"], "600px");
        assert_eq!(value["typography"]["fontSize"]["base"], "16px");
        assert!(value["colors"].get("backgroundSubtle").is_none());
    }

    #[test]
    fn test_text_secondary_alias() {
        let mut value = serde_json::to_value(Theme::light()).unwrap();
        let colors = value["colors"].as_object_mut().unwrap();
        colors.remove("textAlt");
        colors.insert("textSecondary".into(), "#123456".into());

        let theme: Theme = serde_json::from_value(value).unwrap();
        assert_eq!(theme.colors.text_alt, "#123456");
    }
}
