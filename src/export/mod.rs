//! Persisting rendered documents.
//!
//! Rendering never touches the file system; a [`ViewSink`] takes the finished
//! string and a target name and decides where it goes.
//!
//! # Example
//!
//! ```no_run
//! use trellis::Page;
//! use trellis::export::DirectorySink;
//!
//! let page = Page::new("Home");
//! let sink = DirectorySink::new("Resources/Views").with_extension("leaf");
//!
//! // Writes Resources/Views/home.leaf
//! page.save(&sink, "home")?;
//! # Ok::<(), trellis::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// A destination for rendered documents.
pub trait ViewSink {
    /// Store `document` under `name`.
    fn write_view(&self, name: &str, document: &str) -> Result<()>;
}

/// Writes each view to `<root>/<name>.<extension>`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    extension: String,
}

impl DirectorySink {
    /// Sink writing `.html` files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "html".to_string(),
        }
    }

    /// Use a different file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file a view called `name` is written to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        if self.extension.is_empty() {
            Ok(self.root.join(name))
        } else {
            Ok(self.root.join(format!("{name}.{}", self.extension)))
        }
    }
}

impl ViewSink for DirectorySink {
    fn write_view(&self, name: &str, document: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, document)?;
        info!(path = %path.display(), bytes = document.len(), "wrote view");
        Ok(())
    }
}

/// View names are single path components.
fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::InvalidViewName(name.to_string()));
    }
    Ok(())
}
