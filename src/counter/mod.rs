mod aggregate;
mod comment;
mod line_counter;
mod sloc;

pub use aggregate::{ExtensionStats, NO_EXTENSION, ScanResult};
pub use comment::{BlockState, CommentClassifier, LineKind, count_comments};
pub use line_counter::{LineCounter, extension_key};
pub use sloc::FileStats;

#[cfg(test)]
mod test_fixtures;
