//! # mailcourier-theme
//!
//! Runtime theming for HTML email bodies.
//!
//! ## Features
//!
//! - **Typed themes**: [`Theme`] is complete by construction, so CSS
//!   generation never sees a missing value
//! - **Partial overrides**: [`ThemeConfig`] mirrors the theme with every leaf
//!   optional and deserializes from camelCase JSON
//! - **Group-level merging**: overriding `colors.accent` leaves every other
//!   color untouched
//! - **Deterministic CSS**: identical themes produce byte-identical stylesheets
//!
//! ## Quick Start
//!
//! ```
//! use mailcourier_theme::{ColorsConfig, ThemeConfig, generate_css, merge_theme};
//!
//! let config = ThemeConfig {
//!     colors: Some(ColorsConfig {
//!         accent: Some("#ff5a1f".into()),
//!         ..ColorsConfig::default()
//!     }),
//!     ..ThemeConfig::default()
//! };
//!
//! let theme = merge_theme(Some(&config));
//! let css = generate_css(&theme);
//! assert!(css.contains("#ff5a1f"));
//! ```
//!
//! ## Modules
//!
//! - [`model`]: The complete theme and its built-in presets
//! - [`config`]: Partial theme overrides
//! - [`merge`]: Overlaying overrides onto a base theme
//! - [`css`]: Stylesheet generation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod css;
mod error;
pub mod merge;
pub mod model;

pub use config::{
    BordersConfig, ColorsConfig, ContainerConfig, FontSizesConfig, FontWeightsConfig,
    SpacingConfig, ThemeConfig, TypographyConfig,
};
pub use css::{
    AVATAR_SIZE, CLASS_CONTAINER, FALLBACK_BACKGROUND_SUBTLE, FALLBACK_BORDER_SOFT,
    HEADING_LINE_HEIGHT, LOGO_HEIGHT, SUBHEADING_LINE_HEIGHT, generate_css,
    generate_css_from_value, generate_style_tag,
};
pub use error::{Error, Result};
pub use merge::{create_theme, merge_onto, merge_theme};
pub use model::{Borders, Colors, Container, FontSizes, FontWeights, Spacing, Theme, Typography};
