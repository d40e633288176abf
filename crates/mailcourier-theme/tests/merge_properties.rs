//! Property tests for the theme merge engine and CSS generator.
//!
//! Overrides are generated for every leaf of every group. The expected merge
//! result is computed independently by overlaying the override's JSON onto the
//! default theme's JSON, so a leaf missing from the merge engine, or named
//! differently in the override and the theme, shows up as a mismatch.

#![allow(clippy::unwrap_used)]

use mailcourier_theme::{
    BordersConfig, ColorsConfig, ContainerConfig, FontSizesConfig, FontWeightsConfig,
    SpacingConfig, Theme, ThemeConfig, TypographyConfig, generate_css, merge_theme,
};
use proptest::option::of;
use proptest::prelude::*;
use serde_json::Value;

fn css_value() -> impl Strategy<Value = String> {
    "[#a-z0-9]{1,10}"
}

fn leaf() -> impl Strategy<Value = Option<String>> {
    of(css_value())
}

fn colors_config() -> impl Strategy<Value = ColorsConfig> {
    (
        (leaf(), leaf(), leaf(), leaf(), leaf(), leaf(), leaf(), leaf()),
        (leaf(), leaf(), leaf(), leaf(), leaf(), leaf(), leaf(), leaf()),
    )
        .prop_map(
            |(
                (text, text_alt, text_muted, background, background_alt, background_subtle, border, border_soft),
                (accent, accent_hover, accent_muted, accent_text, success, warning, error, info),
            )| ColorsConfig {
                text,
                text_alt,
                text_muted,
                background,
                background_alt,
                background_subtle,
                border,
                border_soft,
                accent,
                accent_hover,
                accent_muted,
                accent_text,
                success,
                warning,
                error,
                info,
            },
        )
}

fn font_sizes_config() -> impl Strategy<Value = FontSizesConfig> {
    (leaf(), leaf(), leaf(), leaf(), leaf(), leaf()).prop_map(|(xs, sm, base, lg, xl, xxl)| {
        FontSizesConfig {
            xs,
            sm,
            base,
            lg,
            xl,
            xxl,
        }
    })
}

fn font_weights_config() -> impl Strategy<Value = FontWeightsConfig> {
    (leaf(), leaf(), leaf(), leaf()).prop_map(|(normal, medium, semibold, bold)| {
        FontWeightsConfig {
            normal,
            medium,
            semibold,
            bold,
        }
    })
}

fn typography_config() -> impl Strategy<Value = TypographyConfig> {
    (
        leaf(),
        leaf(),
        of(font_sizes_config()),
        of(font_weights_config()),
        leaf(),
    )
        .prop_map(
            |(font_family, font_family_mono, font_size, font_weight, line_height)| {
                TypographyConfig {
                    font_family,
                    font_family_mono,
                    font_size,
                    font_weight,
                    line_height,
                }
            },
        )
}

fn spacing_config() -> impl Strategy<Value = SpacingConfig> {
    (leaf(), leaf(), leaf(), leaf(), leaf(), leaf(), leaf()).prop_map(
        |(xs, sm, md, lg, xl, line, container_padding)| SpacingConfig {
            xs,
            sm,
            md,
            lg,
            xl,
            line,
            container_padding,
        },
    )
}

fn borders_config() -> impl Strategy<Value = BordersConfig> {
    (leaf(), leaf(), leaf(), leaf(), leaf()).prop_map(
        |(width, width_thick, width_double, width_thin, radius)| BordersConfig {
            width,
            width_thick,
            width_double,
            width_thin,
            radius,
        },
    )
}

fn theme_config() -> impl Strategy<Value = ThemeConfig> {
    (
        of(colors_config()),
        of(typography_config()),
        of(spacing_config()),
        of(borders_config()),
        of(leaf().prop_map(|max_width| ContainerConfig { max_width })),
    )
        .prop_map(|(colors, typography, spacing, borders, container)| ThemeConfig {
            colors,
            typography,
            spacing,
            borders,
            container,
        })
}

/// Recursively copies every key of `overlay` onto `base`.
fn overlay_json(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(slot) if slot.is_object() => overlay_json(slot, value),
                    _ => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

fn expected_theme(config: &ThemeConfig) -> Theme {
    let mut json = serde_json::to_value(Theme::default()).unwrap();
    overlay_json(&mut json, &serde_json::to_value(config).unwrap());
    serde_json::from_value(json).unwrap()
}

proptest! {
    #[test]
    fn merge_takes_override_or_default(config in theme_config()) {
        prop_assert_eq!(merge_theme(Some(&config)), expected_theme(&config));
    }

    #[test]
    fn css_is_deterministic(config in theme_config()) {
        let first = generate_css(&merge_theme(Some(&config)));
        let second = generate_css(&merge_theme(Some(&config)));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn merge_survives_json_round_trip(config in theme_config()) {
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ThemeConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(merge_theme(Some(&parsed)), merge_theme(Some(&config)));
    }
}

#[test]
fn every_leaf_override_is_applied() {
    let config: ThemeConfig = serde_json::from_str(
        r##"{
            "colors": {
                "text": "#000001", "textAlt": "#000002", "textMuted": "#000003",
                "background": "#000004", "backgroundAlt": "#000005",
                "backgroundSubtle": "#000006", "border": "#000007", "borderSoft": "#000008",
                "accent": "#000009", "accentHover": "#00000a", "accentMuted": "#00000b",
                "accentText": "#00000c", "success": "#00000d", "warning": "#00000e",
                "error": "#00000f", "info": "#000010"
            },
            "typography": {
                "fontFamily": "F", "fontFamilyMono": "M", "lineHeight": "2",
                "fontSize": { "xs": "1px", "sm": "2px", "base": "3px", "lg": "4px", "xl": "5px", "xxl": "6px" },
                "fontWeight": { "normal": "100", "medium": "200", "semibold": "300", "bold": "800" }
            },
            "spacing": {
                "xs": "1em", "sm": "2em", "md": "3em", "lg": "40px", "xl": "5em",
                "line": "6em", "containerPadding": "7em"
            },
            "borders": {
                "width": "1pt", "widthThick": "5px", "widthDouble": "3pt",
                "widthThin": "4pt", "radius": "9pt"
            },
            "container": { "maxWidth": "700px" }
        }"##,
    )
    .unwrap();

    let merged = merge_theme(Some(&config));
    let default = Theme::default();

    assert_eq!(merged, expected_theme(&config));
    assert_eq!(merged.typography.font_weight.bold, "800");
    assert_eq!(merged.borders.width_thick, "5px");
    assert_eq!(merged.spacing.lg, "40px");
    assert_eq!(merged.colors.info, "#000010");
    assert_ne!(merged.colors, default.colors);
    assert_ne!(merged.typography, default.typography);
    assert_ne!(merged.spacing, default.spacing);
    assert_ne!(merged.borders, default.borders);
    assert_ne!(merged.container, default.container);
}
