//! Theme merge engine.
//!
//! Overrides are applied per group: a key present in an override group
//! replaces the base key, absent keys keep the base value, and a group missing
//! from the override inherits the whole base group. `typography.fontSize` and
//! `typography.fontWeight` are merged one level deeper in the same way.
//! Nothing is validated, values are copied as given.

use crate::config::{
    BordersConfig, ColorsConfig, ContainerConfig, FontSizesConfig, FontWeightsConfig,
    SpacingConfig, ThemeConfig, TypographyConfig,
};
use crate::model::{Borders, Colors, Container, FontSizes, FontWeights, Spacing, Theme, Typography};

/// Copies each `Some` field of `$config` onto the matching field of `$base`.
macro_rules! overlay {
    ($base:expr, $config:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$config.$field {
                $base.$field.clone_from(value);
            }
        )+
    };
}

/// Merges `config` onto the default theme.
///
/// Returns a fresh default theme when `config` is `None` or empty.
#[must_use]
pub fn merge_theme(config: Option<&ThemeConfig>) -> Theme {
    let base = Theme::default();
    match config {
        Some(config) if !config.is_empty() => merge_onto(&base, config),
        _ => base,
    }
}

/// Builds a theme from an owned override.
#[must_use]
pub fn create_theme(config: ThemeConfig) -> Theme {
    merge_theme(Some(&config))
}

/// Merges `config` onto an arbitrary base theme.
#[must_use]
pub fn merge_onto(base: &Theme, config: &ThemeConfig) -> Theme {
    let mut theme = base.clone();
    if let Some(colors) = &config.colors {
        apply_colors(&mut theme.colors, colors);
    }
    if let Some(typography) = &config.typography {
        apply_typography(&mut theme.typography, typography);
    }
    if let Some(spacing) = &config.spacing {
        apply_spacing(&mut theme.spacing, spacing);
    }
    if let Some(borders) = &config.borders {
        apply_borders(&mut theme.borders, borders);
    }
    if let Some(container) = &config.container {
        apply_container(&mut theme.container, container);
    }
    theme
}

fn apply_colors(base: &mut Colors, config: &ColorsConfig) {
    overlay!(base, config;
        text, text_alt, text_muted, background, background_alt, border,
        accent, accent_hover, accent_muted, accent_text,
        success, warning, error, info,
    );
    // Optional in the theme as well, so an override sets rather than replaces.
    if config.background_subtle.is_some() {
        base.background_subtle.clone_from(&config.background_subtle);
    }
    if config.border_soft.is_some() {
        base.border_soft.clone_from(&config.border_soft);
    }
}

fn apply_typography(base: &mut Typography, config: &TypographyConfig) {
    overlay!(base, config; font_family, font_family_mono, line_height);
    if let Some(sizes) = &config.font_size {
        apply_font_sizes(&mut base.font_size, sizes);
    }
    if let Some(weights) = &config.font_weight {
        apply_font_weights(&mut base.font_weight, weights);
    }
}

fn apply_font_sizes(base: &mut FontSizes, config: &FontSizesConfig) {
    overlay!(base, config; xs, sm, base, lg, xl, xxl);
}

fn apply_font_weights(base: &mut FontWeights, config: &FontWeightsConfig) {
    overlay!(base, config; normal, medium, semibold, bold);
}

fn apply_spacing(base: &mut Spacing, config: &SpacingConfig) {
    overlay!(base, config; xs, sm, md, lg, xl, line, container_padding);
}

fn apply_borders(base: &mut Borders, config: &BordersConfig) {
    overlay!(base, config; width, width_thick, width_double, width_thin, radius);
}

fn apply_container(base: &mut Container, config: &ContainerConfig) {
    overlay!(base, config; max_width);
}
