//! Composition pipeline.
//!
//! Renders a named template, then wraps the result in the [`MAIN_LAYOUT`]
//! when one is registered. The layout receives the caller's data with these
//! keys set:
//!
//! | Key           | Value                                             |
//! |---------------|---------------------------------------------------|
//! | `body`        | rendered template, always overwritten             |
//! | `styles`      | CSS generated from the theme, always overwritten  |
//! | `lang`        | `"en"` unless provided                            |
//! | `year`        | current calendar year unless provided             |
//! | `companyName` | `"Your Company"` unless provided                  |
//! | `title`       | `subject`, else `"Notification"`, unless provided |
//!
//! A `null` value counts as not provided.

use chrono::Datelike;
use mailcourier_theme::{Theme, generate_css};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::registry::{MAIN_LAYOUT, TemplateRegistry};

/// Language used when the caller supplies none.
pub const DEFAULT_LANG: &str = "en";
/// Company name used when the caller supplies none.
pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
/// Title used when the caller supplies neither a title nor a subject.
pub const DEFAULT_TITLE: &str = "Notification";

/// Renders templates inside the main layout with a themed stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    registry: &'a TemplateRegistry,
    theme: &'a Theme,
}

impl<'a> Composer<'a> {
    /// Creates a composer over `registry` styled by `theme`.
    #[must_use]
    pub const fn new(registry: &'a TemplateRegistry, theme: &'a Theme) -> Self {
        Self { registry, theme }
    }

    /// Renders template `name`, wrapped in the main layout if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TemplateNotFound`] if `name` is not registered,
    /// or [`crate::Error::Render`] if the template or layout fails to render.
    pub fn render(&self, name: &str, data: &Value) -> Result<String> {
        let body = self.registry.render(name, data)?;
        if !self.registry.has_layout(MAIN_LAYOUT) {
            return Ok(body);
        }

        let layout_data = layout_data(data, body, generate_css(self.theme));
        self.registry.render_layout(MAIN_LAYOUT, &layout_data)
    }
}

/// Builds the data passed to the layout. Non-object `data` starts empty.
#[must_use]
pub fn layout_data(data: &Value, body: String, styles: String) -> Value {
    let mut map = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    map.insert("body".into(), Value::String(body));
    map.insert("styles".into(), Value::String(styles));

    let title = match map.get("subject") {
        Some(Value::String(subject)) => subject.clone(),
        _ => DEFAULT_TITLE.to_string(),
    };
    set_default(&mut map, "lang", DEFAULT_LANG.into());
    set_default(&mut map, "year", chrono::Local::now().year().into());
    set_default(&mut map, "companyName", DEFAULT_COMPANY_NAME.into());
    set_default(&mut map, "title", title.into());

    Value::Object(map)
}

fn set_default(map: &mut Map<String, Value>, key: &str, value: Value) {
    if map.get(key).is_none_or(Value::is_null) {
        map.insert(key.to_string(), value);
    }
}
