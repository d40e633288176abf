//! # mailcourier-template
//!
//! Template registry, directory loader, and layout composition for email
//! bodies, built on Handlebars.
//!
//! ## Features
//!
//! - **Instance-owned namespaces**: every [`TemplateRegistry`] has its own
//!   partials, layouts, helpers, and templates
//! - **Directory loading**: `partials/`, `layouts/`, root files, then
//!   `templates/`, with later registrations overriding earlier ones
//! - **Layout composition**: [`Composer`] wraps rendered templates in the
//!   `main` layout and injects a stylesheet generated from the theme
//!
//! ## Quick Start
//!
//! ```
//! use mailcourier_template::{Composer, MAIN_LAYOUT, TemplateRegistry};
//! use mailcourier_theme::Theme;
//!
//! # fn main() -> mailcourier_template::Result<()> {
//! let mut registry = TemplateRegistry::new();
//! registry.register_layout(MAIN_LAYOUT, "<style>{{{styles}}}</style>{{{body}}}")?;
//! registry.register_inline("hello", "<p>Hello {{name}}</p>")?;
//!
//! let theme = Theme::default();
//! let html = Composer::new(&registry, &theme)
//!     .render("hello", &serde_json::json!({ "name": "Ada" }))?;
//! assert!(html.contains("<p>Hello Ada</p>"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod compose;
mod error;
pub mod loader;
pub mod registry;

pub use compose::{Composer, layout_data};
pub use error::{Error, Result};
pub use loader::template_name;
pub use registry::{MAIN_LAYOUT, TemplateRegistry};

/// Re-exported so callers can implement helpers without a direct dependency.
pub use handlebars;
