//! Document root discovery
//!
//! The server refuses to start unless the document root exists and holds an
//! `index.html`.

use std::fmt;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootError {
    MissingRoot(PathBuf),
    MissingIndex(PathBuf),
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootError::MissingRoot(path) => {
                write!(f, "Could not find server root path: {}", path.display())
            }
            RootError::MissingIndex(path) => {
                write!(f, "Could not find server index file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for RootError {}

/// Read-only directory that servable files are read from.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    path: PathBuf,
}

impl DocumentRoot {
    /// Resolves `path` against `base` (unless already absolute) and checks the
    /// startup preconditions.
    pub fn discover(base: &Path, path: &Path) -> Result<Self, RootError> {
        let path = base.join(path);

        if !path.is_dir() {
            return Err(RootError::MissingRoot(path));
        }

        let index = path.join(INDEX_FILE);
        if !index.is_file() {
            return Err(RootError::MissingIndex(index));
        }

        Ok(Self { path })
    }

    /// Same as [`DocumentRoot::discover`], relative to the working directory.
    pub fn from_current_dir(path: &Path) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::discover(&cwd, path)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}
