use crate::language::{CommentGrammar, GrammarRegistry};

/// Classifier state between two lines of the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Normal,
    InBlockComment,
}

/// Outcome of classifying a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Line-oriented comment classifier driven by one [`CommentGrammar`].
///
/// The classifier itself is stateless; block-comment state is threaded
/// through [`CommentClassifier::classify_line`] so one instance can be shared
/// across files.
pub struct CommentClassifier<'a> {
    grammar: &'a CommentGrammar,
}

impl<'a> CommentClassifier<'a> {
    #[must_use]
    pub const fn new(grammar: &'a CommentGrammar) -> Self {
        Self { grammar }
    }

    /// Classify one line and return the state for the next one.
    #[must_use]
    pub fn classify_line(&self, line: &str, state: BlockState) -> (LineKind, BlockState) {
        if line.trim().is_empty() {
            return (LineKind::Blank, state);
        }

        if state == BlockState::InBlockComment {
            let next = if self.closes_block(line) {
                BlockState::Normal
            } else {
                BlockState::InBlockComment
            };
            return (LineKind::Comment, next);
        }

        if let Some(rest) = self.block_start_remainder(line) {
            // The end marker only counts if it follows the opener.
            let next = if self.closes_block(rest) {
                BlockState::Normal
            } else {
                BlockState::InBlockComment
            };
            return (LineKind::Comment, next);
        }

        if self.is_single_line_comment(line) {
            return (LineKind::Comment, BlockState::Normal);
        }

        (LineKind::Code, BlockState::Normal)
    }

    /// Count comment lines in one file's lines, starting outside any block.
    #[must_use]
    pub fn count<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        let mut state = BlockState::Normal;
        let mut comments = 0;
        for line in lines {
            let (kind, next) = self.classify_line(line.as_ref(), state);
            if kind == LineKind::Comment {
                comments += 1;
            }
            state = next;
        }
        comments
    }

    #[must_use]
    pub fn is_single_line_comment(&self, line: &str) -> bool {
        self.grammar.single_line.iter().any(|re| re.is_match(line))
    }

    fn block_start_remainder<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.grammar
            .multi_line_start
            .iter()
            .find_map(|re| re.find(line))
            .map(|m| &line[m.end()..])
    }

    fn closes_block(&self, text: &str) -> bool {
        self.grammar.multi_line_end.iter().any(|re| re.is_match(text))
    }
}

/// Count comment lines for a file with the given extension key using the
/// built-in grammar table. Unknown extensions yield zero.
#[must_use]
pub fn count_comments<S: AsRef<str>>(lines: &[S], extension: &str) -> usize {
    GrammarRegistry::builtin()
        .grammar_for(extension)
        .map_or(0, |grammar| CommentClassifier::new(grammar).count(lines))
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
