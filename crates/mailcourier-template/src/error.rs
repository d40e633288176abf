//! Error types for template operations.

use std::io;
use std::path::PathBuf;

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Template error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No template is registered under this name.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A template root directory does not exist.
    #[error("Template directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A file or directory could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Template source failed to compile.
    #[error("Failed to compile template {name}: {source}")]
    Compile {
        /// Registration name.
        name: String,
        /// Compiler error.
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Rendering failed.
    #[error("Failed to render template {name}: {source}")]
    Render {
        /// Template or layout being rendered.
        name: String,
        /// Renderer error.
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl Error {
    /// Wraps an I/O error with the path being read.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error means a file, directory, or template is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::TemplateNotFound(_) | Self::DirectoryNotFound(_) => true,
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::Compile { .. } | Self::Render { .. } => false,
        }
    }
}
