//! Template registry.
//!
//! Each [`TemplateRegistry`] owns its own compiler, so partials, layouts, and
//! templates registered on one instance are never visible to another.
//!
//! Keys inside the compiler:
//!
//! | Kind     | Key               | Referenced from templates as |
//! |----------|-------------------|------------------------------|
//! | Partial  | `<name>`          | `{{> name}}`                 |
//! | Layout   | `layouts/<name>`  | `{{> layouts/name}}`         |
//! | Template | `templates/<name>`| not referenced               |
//!
//! Registering an existing name replaces the previous entry.

use std::path::Path;

use handlebars::{Handlebars, HelperDef};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the layout the composition pipeline wraps templates in.
pub const MAIN_LAYOUT: &str = "main";

const LAYOUT_PREFIX: &str = "layouts/";
const TEMPLATE_PREFIX: &str = "templates/";

/// Name-to-compiled-template mapping with separate partial and layout namespaces.
pub struct TemplateRegistry {
    engine: Handlebars<'static>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.template_names())
            .finish_non_exhaustive()
    }
}

impl TemplateRegistry {
    /// Creates an empty registry. HTML escaping of `{{value}}` is on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Handlebars::new(),
        }
    }

    /// Compiles `source` and registers it as template `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] if the source is not a valid template.
    pub fn register_inline(&mut self, name: &str, source: &str) -> Result<()> {
        self.compile(&template_key(name), name, source)?;
        debug!(template = name, "Registered template");
        Ok(())
    }

    /// Registers a partial under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] if the source is not a valid template.
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine
            .register_partial(name, source)
            .map_err(|e| compile_error(name, e))?;
        debug!(partial = name, "Registered partial");
        Ok(())
    }

    /// Registers a layout under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] if the source is not a valid template.
    pub fn register_layout(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine
            .register_partial(&layout_key(name), source)
            .map_err(|e| compile_error(name, e))?;
        debug!(layout = name, "Registered layout");
        Ok(())
    }

    /// Registers a helper callable from every template in this registry.
    pub fn register_helper(&mut self, name: &str, helper: Box<dyn HelperDef + Send + Sync>) {
        self.engine.register_helper(name, helper);
    }

    /// Reads `path` and registers its content as template `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Compile`].
    pub async fn load_from_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        self.register_inline(name, &source)
    }

    /// Returns true if a template is registered under `name`.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(&template_key(name))
    }

    /// Returns true if a layout is registered under `name`.
    #[must_use]
    pub fn has_layout(&self, name: &str) -> bool {
        self.engine.has_template(&layout_key(name))
    }

    /// Returns registered template names, sorted.
    #[must_use]
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .engine
            .get_templates()
            .keys()
            .filter_map(|key| key.strip_prefix(TEMPLATE_PREFIX))
            .map(str::to_string)
            .collect();
        names.sort_unstable();
        names
    }

    /// Renders template `name` with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] for an unknown name, or
    /// [`Error::Render`] if rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let key = template_key(name);
        if !self.engine.has_template(&key) {
            return Err(Error::TemplateNotFound(name.to_string()));
        }
        self.engine
            .render(&key, data)
            .map_err(|e| render_error(name, e))
    }

    /// Renders layout `name` with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] for an unknown layout, or
    /// [`Error::Render`] if rendering fails.
    pub fn render_layout<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let key = layout_key(name);
        if !self.engine.has_template(&key) {
            return Err(Error::TemplateNotFound(key));
        }
        self.engine
            .render(&key, data)
            .map_err(|e| render_error(&key, e))
    }

    fn compile(&mut self, key: &str, name: &str, source: &str) -> Result<()> {
        self.engine
            .register_template_string(key, source)
            .map_err(|e| compile_error(name, e))
    }
}

fn template_key(name: &str) -> String {
    format!("{TEMPLATE_PREFIX}{name}")
}

fn layout_key(name: &str) -> String {
    format!("{LAYOUT_PREFIX}{name}")
}

fn compile_error(name: &str, source: handlebars::TemplateError) -> Error {
    Error::Compile {
        name: name.to_string(),
        source: Box::new(source),
    }
}

fn render_error(name: &str, source: handlebars::RenderError) -> Error {
    Error::Render {
        name: name.to_string(),
        source: Box::new(source),
    }
}
