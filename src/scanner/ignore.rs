use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{LinecountError, Result};

pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "out",
    "target",
    "coverage",
    ".next",
    ".nuxt",
    "vendor",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
    ".cache",
];

/// Suffix-anchored filename patterns for generated or lock files.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"package-lock\.json$",
    r"npm-shrinkwrap\.json$",
    r"pnpm-lock\.yaml$",
    r"\.lock$",
    r"\.min\.js$",
    r"\.min\.css$",
    r"\.bundle\.js$",
    r"\.map$",
    r"^\.DS_Store$",
];

/// Extensions (without the dot) of binary, media and archive formats.
pub const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tif", "tiff", "psd", "svg",
    // audio/video
    "mp3", "mp4", "wav", "ogg", "flac", "aac", "avi", "mov", "mkv", "webm",
    // archives
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war",
    // compiled
    "exe", "dll", "so", "dylib", "a", "o", "obj", "lib", "bin", "class", "pyc", "pyo", "wasm",
    // fonts
    "ttf", "otf", "woff", "woff2", "eot",
    // documents and data
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "db", "sqlite", "sqlite3",
];

/// Whether `ext` (without the leading dot) names a binary format.
#[must_use]
pub fn is_binary_extension(ext: &str) -> bool {
    BINARY_EXTENSIONS
        .iter()
        .any(|binary| binary.eq_ignore_ascii_case(ext))
}

/// Directories and filenames to leave out of a scan.
#[derive(Debug, Clone)]
pub struct IgnoreConfig {
    /// Exact directory basenames, skipped at any depth.
    pub directories: BTreeSet<String>,
    /// Filename patterns; a match excludes the file.
    pub file_patterns: Vec<Regex>,
}

impl IgnoreConfig {
    /// No ignored directories and no filename patterns. The binary
    /// denylist still applies.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            directories: BTreeSet::new(),
            file_patterns: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, name: &str) {
        self.directories.insert(name.to_string());
    }

    /// Add a raw regex filename pattern.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regex.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let re = Regex::new(pattern).map_err(|source| LinecountError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.file_patterns.push(re);
        Ok(())
    }

    /// Exclude every file ending in `.ext`. A leading dot is optional.
    ///
    /// # Errors
    /// Returns an error if the resulting pattern fails to compile.
    pub fn add_extension(&mut self, ext: &str) -> Result<()> {
        let ext = ext.trim_start_matches('.');
        self.add_pattern(&format!(r"\.{}$", regex::escape(ext)))
    }

    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    #[must_use]
    pub fn matches_file_pattern(&self, file_name: &str) -> bool {
        self.file_patterns.iter().any(|re| re.is_match(file_name))
    }
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        for dir in DEFAULT_IGNORE_DIRS {
            config.add_directory(dir);
        }
        config.file_patterns = DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("valid built-in ignore pattern"))
            .collect();
        config
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
