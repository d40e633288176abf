//! Template directory loading.
//!
//! A template root is scanned in a fixed order so templates can rely on
//! partials and layouts being present:
//!
//! 1. `partials/*` registered as partials
//! 2. `layouts/*` registered as layouts
//! 3. files directly inside the root registered as templates
//! 4. `templates/*` registered as templates
//!
//! Missing subdirectories are skipped. Files inside each directory are
//! registered in name order, and a later registration replaces an earlier one
//! with the same name.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::TemplateRegistry;

/// Subdirectory scanned for partials.
pub const PARTIALS_DIR: &str = "partials";
/// Subdirectory scanned for layouts.
pub const LAYOUTS_DIR: &str = "layouts";
/// Subdirectory scanned for additional templates.
pub const TEMPLATES_DIR: &str = "templates";

/// Derives a registration name by stripping the final extension.
///
/// `password-reset.hbs` becomes `password-reset` and `digest.en.hbs` becomes
/// `digest.en`. Returns `None` for names with an empty stem such as dotfiles.
#[must_use]
pub fn template_name(file_name: &str) -> Option<&str> {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    (!stem.is_empty()).then_some(stem)
}

impl TemplateRegistry {
    /// Loads partials, layouts, and templates from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryNotFound`] if `root` does not exist,
    /// [`Error::Io`] for any other read failure, or [`Error::Compile`].
    pub async fn load_directory(&mut self, root: impl AsRef<Path>) -> Result<()> {
        let root = root.as_ref();
        let root_files = match list_files(root).await {
            Ok(files) => files,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::DirectoryNotFound(root.to_path_buf()));
            }
            Err(e) => return Err(Error::io(root, e)),
        };

        let partials = list_optional(&root.join(PARTIALS_DIR)).await?;
        for (name, path) in &partials {
            let source = read_source(path).await?;
            self.register_partial(name, &source)?;
        }

        let layouts = list_optional(&root.join(LAYOUTS_DIR)).await?;
        for (name, path) in &layouts {
            let source = read_source(path).await?;
            self.register_layout(name, &source)?;
        }

        let nested = list_optional(&root.join(TEMPLATES_DIR)).await?;
        for (name, path) in root_files.iter().chain(&nested) {
            let source = read_source(path).await?;
            self.register_inline(name, &source)?;
        }

        debug!(
            root = %root.display(),
            partials = partials.len(),
            layouts = layouts.len(),
            templates = root_files.len() + nested.len(),
            "Loaded template directory"
        );
        Ok(())
    }
}

/// Lists a subdirectory that may legitimately be absent.
async fn list_optional(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    match list_files(dir).await {
        Ok(files) => Ok(files),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(Error::io(dir, e)),
    }
}

/// Lists regular files directly inside `dir` as `(name, path)`, sorted by name.
async fn list_files(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        // Follows symlinks; dangling links are skipped.
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => continue,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!(path = %path.display(), "Skipping file with non UTF-8 name");
            continue;
        };
        let Some(name) = template_name(file_name) else {
            continue;
        };
        files.push((name.to_string(), path));
    }

    files.sort();
    Ok(files)
}

async fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_name_strips_last_extension() {
        assert_eq!(template_name("password-reset.hbs"), Some("password-reset"));
        assert_eq!(template_name("digest.en.hbs"), Some("digest.en"));
        assert_eq!(template_name("plain"), Some("plain"));
    }

    #[test]
    fn test_template_name_rejects_empty_stem() {
        assert_eq!(template_name(".gitkeep"), None);
        assert_eq!(template_name(""), None);
    }
}
