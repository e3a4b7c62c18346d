use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileScanner};
use crate::error::{LinecountError, Result};

/// Depth-first walker that prunes ignored directories and yields included
/// regular files. Symlinks and other special entries are neither followed nor
/// returned.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 || !e.file_type().is_dir() {
                    return true;
                }
                let enter = self.filter.should_enter_dir(e.file_name());
                if !enter {
                    tracing::debug!(path = %e.path().display(), "skipping ignored directory");
                }
                enter
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        check_root(root)?;
        Ok(self.scan_impl(root))
    }
}

/// Root problems are fatal, unlike anything found below it.
fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LinecountError::RootNotFound {
                path: root.to_path_buf(),
            }
        } else {
            LinecountError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(LinecountError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|source| LinecountError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
