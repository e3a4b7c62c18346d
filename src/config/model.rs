use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scanner::IgnoreConfig;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreSettings,
}

/// What to leave out of a scan, before compilation into an [`IgnoreConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IgnoreSettings {
    /// Start from the built-in directory and filename defaults (default: true).
    #[serde(default = "default_true")]
    pub use_defaults: bool,

    /// Directory basenames to skip at any depth.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Extensions to exclude, with or without the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Raw filename regexes to exclude.
    #[serde(default)]
    pub patterns: Vec<String>,
}

const fn default_true() -> bool {
    true
}

impl Default for IgnoreSettings {
    fn default() -> Self {
        Self {
            use_defaults: true,
            directories: Vec::new(),
            extensions: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

impl IgnoreSettings {
    /// Compile into an [`IgnoreConfig`].
    ///
    /// # Errors
    /// Returns an error if any extension or pattern fails to compile.
    pub fn build(&self) -> Result<IgnoreConfig> {
        let mut config = if self.use_defaults {
            IgnoreConfig::default()
        } else {
            IgnoreConfig::empty()
        };

        for dir in &self.directories {
            config.add_directory(dir);
        }
        for ext in &self.extensions {
            config.add_extension(ext)?;
        }
        for pattern in &self.patterns {
            config.add_pattern(pattern)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
