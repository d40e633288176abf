//! Partial theme overrides.
//!
//! Every leaf is optional. Absent leaves keep the base theme's value when the
//! override is merged, see [`crate::merge`].

use serde::{Deserialize, Serialize};

/// Color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct ColorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(alias = "textSecondary", skip_serializing_if = "Option::is_none")]
    pub text_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_subtle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_soft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_hover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Font size overrides, keyed by size name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct FontSizesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<String>,
}

/// Font weight overrides, keyed by weight name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct FontWeightsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semibold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<String>,
}

/// Typography overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyConfig {
    /// Body font stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Monospace font stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family_mono: Option<String>,
    /// Per-size overrides, merged one level deeper than the rest of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSizesConfig>,
    /// Per-weight overrides, merged one level deeper than the rest of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeightsConfig>,
    /// Body line height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

/// Spacing overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct SpacingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_padding: Option<String>,
}

/// Border overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct BordersConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_thick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_double: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_thin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
}

/// Container overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerConfig {
    /// Maximum width of the email body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
}

/// A partial theme. Groups left as `None` inherit the whole base group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsConfig>,
    /// Typography overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyConfig>,
    /// Spacing overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingConfig>,
    /// Border overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<BordersConfig>,
    /// Container overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerConfig>,
}

impl ThemeConfig {
    /// Returns true if the override changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
