mod json;
mod text;

pub use json::StatsJsonFormatter;
pub use text::{ColorMode, StatsTextFormatter};

use crate::counter::{NO_EXTENSION, ScanResult};
use crate::error::Result;

/// Trait for rendering a scan result.
pub trait StatsFormatter {
    /// Format the scan result into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, result: &ScanResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Display label for an extension key.
#[must_use]
pub fn extension_label(ext: &str) -> String {
    if ext == NO_EXTENSION {
        "(no extension)".to_string()
    } else if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Render `n` with `,` thousands separators.
#[must_use]
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
