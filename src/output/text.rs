use std::fmt::Write;

use crate::counter::{ExtensionStats, ScanResult};
use crate::error::Result;

use super::{StatsFormatter, extension_label, format_count};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

const HEADERS: [&str; 6] = ["Language", "Files", "Lines", "Blank", "Comment", "Code"];
const COLUMN_COLORS: [&str; 6] = ["", ansi::YELLOW, ansi::BLUE, ansi::GRAY, ansi::MAGENTA, ansi::GREEN];

/// Bordered table, one row per extension sorted by code lines, plus a total row.
pub struct StatsTextFormatter {
    use_colors: bool,
}

impl Default for StatsTextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl StatsTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.use_colors || (color.is_empty() && !bold) {
            return text.to_string();
        }
        let weight = if bold { ansi::BOLD } else { "" };
        format!("{weight}{color}{text}{}", ansi::RESET)
    }

    fn row_cells(label: String, stats: &ExtensionStats) -> [String; 6] {
        [
            label,
            format_count(stats.files),
            format_count(stats.lines),
            format_count(stats.blank),
            format_count(stats.comments),
            format_count(stats.code),
        ]
    }

    fn border(widths: &[usize; 6]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    /// Pad before painting so escape codes do not skew the alignment.
    fn render_row(&self, cells: &[String; 6], widths: &[usize; 6], header: bool, bold: bool) -> String {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            let padded = if i == 0 {
                format!("{cell:<width$}", width = widths[i])
            } else {
                format!("{cell:>width$}", width = widths[i])
            };
            let color = if header { ansi::CYAN } else { COLUMN_COLORS[i] };
            write!(line, " {} |", self.paint(&padded, color, header || bold)).ok();
        }
        line
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let header = HEADERS.map(String::from);
        let rows: Vec<[String; 6]> = result
            .sorted_by_code()
            .into_iter()
            .map(|(ext, stats)| Self::row_cells(extension_label(ext), stats))
            .collect();
        let total = Self::row_cells("Total".to_string(), result.totals());

        let mut widths = [0usize; 6];
        for cells in std::iter::once(&header).chain(&rows).chain(std::iter::once(&total)) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = Self::border(&widths);
        let mut output = String::new();
        writeln!(output).ok();
        writeln!(output, "{border}").ok();
        writeln!(output, "{}", self.render_row(&header, &widths, true, false)).ok();
        writeln!(output, "{border}").ok();
        for cells in &rows {
            writeln!(output, "{}", self.render_row(cells, &widths, false, false)).ok();
        }
        if !rows.is_empty() {
            writeln!(output, "{border}").ok();
        }
        writeln!(output, "{}", self.render_row(&total, &widths, false, true)).ok();
        writeln!(output, "{border}").ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
