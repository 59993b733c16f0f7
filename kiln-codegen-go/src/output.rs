//! Writing generated source files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A generated Go source file pending write.
///
/// Output files hold generated code only, so an existing file at the
/// destination is always overwritten. Nothing is written on failure; there
/// is no partial-write recovery.
#[derive(Debug, Clone)]
pub struct GoFile {
    name: String,
    content: String,
}

impl GoFile {
    /// Create a file with the given base name and content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Base file name of the output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generated source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Destination path under `out_dir`.
    pub fn path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.name)
    }

    /// Write the file into `out_dir`, creating the directory if needed.
    /// Returns the written path.
    pub fn write(&self, out_dir: &Path) -> Result<PathBuf> {
        let path = self.path(out_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                Box::new(Error::Io {
                    path: parent.to_path_buf(),
                    source,
                })
            })?;
        }
        std::fs::write(&path, &self.content).map_err(|source| {
            Box::new(Error::Io {
                path: path.clone(),
                source,
            })
        })?;
        Ok(path)
    }
}
