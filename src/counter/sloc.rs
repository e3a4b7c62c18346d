use crate::language::GrammarRegistry;

use super::CommentClassifier;

/// Line breakdown of a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    pub code: usize,
}

impl FileStats {
    /// Measure `source` as a file whose extension key is `extension`.
    ///
    /// Lines are split with [`str::lines`], so a trailing line feed does not
    /// add an empty final line.
    #[must_use]
    pub fn measure(source: &str, extension: &str, registry: &GrammarRegistry) -> Self {
        let lines: Vec<&str> = source.lines().collect();
        let blank = lines.iter().filter(|line| line.trim().is_empty()).count();
        let comments = registry
            .grammar_for(extension)
            .map_or(0, |grammar| CommentClassifier::new(grammar).count(&lines));

        let code = lines.len().checked_sub(blank + comments).unwrap_or_else(|| {
            tracing::warn!(
                extension,
                lines = lines.len(),
                blank,
                comments,
                "comment grammar overlapped blank lines; clamping code to 0"
            );
            0
        });

        Self {
            lines: lines.len(),
            blank,
            comments,
            code,
        }
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
