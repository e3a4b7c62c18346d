use serde::Serialize;

use crate::counter::ScanResult;
use crate::error::Result;
use crate::language::GrammarRegistry;

use super::StatsFormatter;

pub struct StatsJsonFormatter;

#[derive(Serialize)]
struct JsonStatsOutput<'a> {
    summary: JsonSummary,
    languages: Vec<JsonLanguage<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    lines: usize,
    blank: usize,
    comment: usize,
    code: usize,
}

#[derive(Serialize)]
struct JsonLanguage<'a> {
    extension: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'static str>,
    files: usize,
    lines: usize,
    blank: usize,
    comment: usize,
    code: usize,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, result: &ScanResult) -> Result<String> {
        let registry = GrammarRegistry::builtin();
        let totals = result.totals();
        let output = JsonStatsOutput {
            summary: JsonSummary {
                files: totals.files,
                lines: totals.lines,
                blank: totals.blank,
                comment: totals.comments,
                code: totals.code,
            },
            languages: result
                .sorted_by_code()
                .into_iter()
                .map(|(ext, stats)| JsonLanguage {
                    extension: ext,
                    language: registry.get_by_extension(ext).map(|lang| lang.name.as_str()),
                    files: stats.files,
                    lines: stats.lines,
                    blank: stats.blank,
                    comment: stats.comments,
                    code: stats.code,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
