//! Source location tracking for error messages.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a configuration line came from (file and 1-indexed line number).
///
/// The file path is shared between all lines of the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub file: Arc<PathBuf>,
    pub line: u32,
}

impl Origin {
    pub fn new(file: Arc<PathBuf>, line: u32) -> Self {
        Self { file, line }
    }

    /// Origin for text that did not come from a file.
    pub fn inline(line: u32) -> Self {
        Self {
            file: Arc::new(PathBuf::from("<inline>")),
            line,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::inline(0)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}
