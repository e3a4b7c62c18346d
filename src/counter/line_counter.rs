use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::language::GrammarRegistry;
use crate::scanner::{DirectoryScanner, FileScanner, IgnoreConfig, IgnoreFilter};

use super::{FileStats, NO_EXTENSION, ScanResult};

/// Walks a tree and folds every readable file into a [`ScanResult`].
pub struct LineCounter<'a> {
    ignore: IgnoreConfig,
    registry: &'a GrammarRegistry,
}

impl LineCounter<'static> {
    #[must_use]
    pub fn new(ignore: IgnoreConfig) -> Self {
        Self::with_registry(ignore, GrammarRegistry::builtin())
    }
}

impl Default for LineCounter<'static> {
    fn default() -> Self {
        Self::new(IgnoreConfig::default())
    }
}

impl<'a> LineCounter<'a> {
    #[must_use]
    pub const fn with_registry(ignore: IgnoreConfig, registry: &'a GrammarRegistry) -> Self {
        Self { ignore, registry }
    }

    /// Count every included file under `root`.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist, is not a directory, or
    /// cannot be listed. Unreadable files and sub-directories are skipped.
    pub fn count(&self, root: &Path) -> Result<ScanResult> {
        let scanner = DirectoryScanner::new(IgnoreFilter::new(&self.ignore));
        let files = scanner.scan(root)?;

        let mut result = ScanResult::new();
        for path in &files {
            let ext = extension_key(path);
            if let Some(stats) = self.measure_file(path, &ext) {
                result.record(&ext, &stats);
            }
        }

        tracing::debug!(
            root = %root.display(),
            candidates = files.len(),
            counted = result.total_files(),
            "scan complete"
        );
        Ok(result)
    }

    fn measure_file(&self, path: &Path, ext: &str) -> Option<FileStats> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unreadable file");
                return None;
            }
        };
        Some(FileStats::measure(&source, ext, self.registry))
    }
}

/// Extension including the leading dot, or [`NO_EXTENSION`].
#[must_use]
pub fn extension_key(path: &Path) -> String {
    path.extension().map_or_else(
        || NO_EXTENSION.to_string(),
        |ext| format!(".{}", ext.to_string_lossy()),
    )
}

#[cfg(test)]
#[path = "line_counter_tests.rs"]
mod tests;
