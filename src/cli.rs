use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::IgnoreSettings;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linecount")]
#[command(author, version, about = "Count blank, comment and code lines per file extension")]
#[command(long_about = "Recursively scans a directory and reports per-extension line counts \
    split into blank, comment and code lines.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - The path is missing, not a directory, unreadable, or the options are invalid")]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Additional directory names to skip at any depth (comma-separated)
    #[arg(long = "exclude-dir", value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// File extensions to skip, e.g. md,txt (comma-separated)
    #[arg(long = "exclude-ext", value_delimiter = ',')]
    pub exclude_exts: Vec<String>,

    /// Filename regex to skip (can be specified multiple times)
    #[arg(long = "exclude-pattern", short = 'x')]
    pub exclude_patterns: Vec<String>,

    /// Do not apply the built-in ignored directories and filename patterns
    #[arg(long)]
    pub no_default_ignores: bool,

    /// TOML file with an [ignore] table, applied before command-line excludes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the header and summary lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Layer the command-line excludes on top of `base`.
    #[must_use]
    pub fn apply_ignore_overrides(&self, mut base: IgnoreSettings) -> IgnoreSettings {
        if self.no_default_ignores {
            base.use_defaults = false;
        }
        base.directories.extend(self.exclude_dirs.iter().cloned());
        base.extensions.extend(self.exclude_exts.iter().cloned());
        base.patterns.extend(self.exclude_patterns.iter().cloned());
        base
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
