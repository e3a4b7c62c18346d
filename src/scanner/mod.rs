mod directory;
mod filter;
mod ignore;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, IgnoreFilter};
pub use ignore::{
    BINARY_EXTENSIONS, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_PATTERNS, IgnoreConfig,
    is_binary_extension,
};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, depth-first.
    ///
    /// # Errors
    /// Returns an error if `root` is missing, not a directory, or unreadable.
    /// Failures below the root are skipped.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
