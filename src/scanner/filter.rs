use std::ffi::OsStr;
use std::path::Path;

use super::ignore::{IgnoreConfig, is_binary_extension};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a sub-directory with this basename should be traversed.
    fn should_enter_dir(&self, _name: &OsStr) -> bool {
        true
    }
}

/// Filter driven by an [`IgnoreConfig`] plus the binary-extension denylist.
pub struct IgnoreFilter<'a> {
    config: &'a IgnoreConfig,
}

impl<'a> IgnoreFilter<'a> {
    #[must_use]
    pub const fn new(config: &'a IgnoreConfig) -> Self {
        Self { config }
    }

    fn has_binary_extension(path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(is_binary_extension)
    }
}

impl FileFilter for IgnoreFilter<'_> {
    fn should_include(&self, path: &Path) -> bool {
        if Self::has_binary_extension(path) {
            return false;
        }

        let Some(file_name) = path.file_name() else {
            return false;
        };
        !self.config.matches_file_pattern(&file_name.to_string_lossy())
    }

    fn should_enter_dir(&self, name: &OsStr) -> bool {
        !self.config.is_ignored_dir(&name.to_string_lossy())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
