use indexmap::IndexMap;
use serde::Serialize;

use super::FileStats;

/// Key used for files without an extension.
pub const NO_EXTENSION: &str = "no-extension";

/// Running totals for one extension (or for the whole scan).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub files: usize,
    pub lines: usize,
    pub blank: usize,
    pub code: usize,
    pub comments: usize,
}

impl ExtensionStats {
    pub const fn add(&mut self, file: &FileStats) {
        self.files += 1;
        self.lines += file.lines;
        self.blank += file.blank;
        self.code += file.code;
        self.comments += file.comments;
    }
}

/// Aggregated result of one scan.
///
/// Totals are only ever updated together with the per-extension entry, so
/// every total equals the sum over `by_extension`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    totals: ExtensionStats,
    by_extension: IndexMap<String, ExtensionStats>,
}

impl ScanResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file into its extension entry and the totals.
    pub fn record(&mut self, extension: &str, file: &FileStats) {
        self.by_extension
            .entry(extension.to_string())
            .or_default()
            .add(file);
        self.totals.add(file);
    }

    #[must_use]
    pub const fn totals(&self) -> &ExtensionStats {
        &self.totals
    }

    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.totals.files
    }

    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.totals.lines
    }

    #[must_use]
    pub const fn total_blank(&self) -> usize {
        self.totals.blank
    }

    #[must_use]
    pub const fn total_code(&self) -> usize {
        self.totals.code
    }

    #[must_use]
    pub const fn total_comments(&self) -> usize {
        self.totals.comments
    }

    #[must_use]
    pub const fn by_extension(&self) -> &IndexMap<String, ExtensionStats> {
        &self.by_extension
    }

    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&ExtensionStats> {
        self.by_extension.get(extension)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Entries ordered by code lines, most first; ties by extension name.
    #[must_use]
    pub fn sorted_by_code(&self) -> Vec<(&str, &ExtensionStats)> {
        let mut entries: Vec<_> = self
            .by_extension
            .iter()
            .map(|(ext, stats)| (ext.as_str(), stats))
            .collect();
        entries.sort_by(|a, b| b.1.code.cmp(&a.1.code).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
