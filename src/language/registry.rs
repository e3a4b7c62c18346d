use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LinecountError, Result};

/// Line-oriented comment delimiters for one family of file extensions.
///
/// Every pattern is matched against the raw (untrimmed) line, so start and
/// single-line patterns carry their own `^\s*` anchor.
#[derive(Debug, Clone)]
pub struct CommentGrammar {
    pub single_line: Vec<Regex>,
    pub multi_line_start: Vec<Regex>,
    pub multi_line_end: Vec<Regex>,
}

impl CommentGrammar {
    /// Compile a grammar from regex sources.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid regex.
    pub fn new(single_line: &[&str], multi_line_start: &[&str], multi_line_end: &[&str]) -> Result<Self> {
        Ok(Self {
            single_line: compile_all(single_line)?,
            multi_line_start: compile_all(multi_line_start)?,
            multi_line_end: compile_all(multi_line_end)?,
        })
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| LinecountError::InvalidPattern {
                pattern: (*pattern).to_string(),
                source,
            })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    /// Extensions including the leading dot, e.g. `.rs`.
    pub extensions: Vec<String>,
    pub grammar: CommentGrammar,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, grammar: CommentGrammar) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            grammar,
        }
    }
}

#[derive(Debug)]
pub struct GrammarRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl GrammarRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// The built-in extension table, compiled once and shared by every scan.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Register a language. An extension already claimed by an earlier
    /// language is re-pointed at this one, so each extension maps to exactly
    /// one grammar.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages.push(language);
    }

    /// Exact, case-sensitive lookup. Upper-case spellings only resolve where a
    /// language lists them (`.C`, `.H`, `.R`).
    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn grammar_for(&self, ext: &str) -> Option<&CommentGrammar> {
        self.get_by_extension(ext).map(|lang| &lang.grammar)
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

const C_LINE: &str = r"^\s*//";
const C_BLOCK_START: &str = r"^\s*/\*";
const C_BLOCK_END: &str = r"\*/\s*$";
const HASH_LINE: &str = r"^\s*#";

/// (name, extensions, single-line, block start, block end)
type GrammarRow = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

const BUILTIN_GRAMMARS: &[GrammarRow] = &[
    ("JavaScript", &[".js", ".jsx", ".mjs", ".cjs"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("TypeScript", &[".ts", ".tsx", ".mts", ".cts"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Java", &[".java"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("C", &[".c", ".h"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("C++", &[".cpp", ".cc", ".cxx", ".C", ".hpp", ".hh", ".hxx", ".H"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("C#", &[".cs"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Go", &[".go"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Rust", &[".rs"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Swift", &[".swift"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Kotlin", &[".kt", ".kts"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Scala", &[".scala"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Dart", &[".dart"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("PHP", &[".php"], &[C_LINE, HASH_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    (
        "Python",
        &[".py", ".pyi"],
        &[HASH_LINE],
        &[r#"^\s*""""#, r"^\s*'''"],
        &[r#""""\s*$"#, r"'''\s*$"],
    ),
    ("Ruby", &[".rb"], &[HASH_LINE], &[r"^\s*=begin"], &[r"^\s*=end"]),
    ("Shell", &[".sh", ".bash", ".zsh"], &[HASH_LINE], &[], &[]),
    ("YAML", &[".yaml", ".yml"], &[HASH_LINE], &[], &[]),
    ("TOML", &[".toml"], &[HASH_LINE], &[], &[]),
    ("R", &[".r", ".R"], &[HASH_LINE], &[], &[]),
    ("Elixir", &[".ex", ".exs"], &[HASH_LINE], &[], &[]),
    ("SQL", &[".sql"], &[r"^\s*--"], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Lua", &[".lua"], &[r"^\s*--"], &[r"^\s*--\[\["], &[r"\]\]\s*$"]),
    ("Vim script", &[".vim"], &[r#"^\s*""#], &[], &[]),
    ("Lisp", &[".el", ".clj", ".cljs", ".lisp", ".scm"], &[r"^\s*;"], &[], &[]),
    ("Erlang", &[".erl", ".hrl"], &[r"^\s*%"], &[], &[]),
    ("Haskell", &[".hs"], &[r"^\s*--"], &[r"^\s*\{-"], &[r"-\}\s*$"]),
    ("OCaml", &[".ml", ".mli"], &[], &[r"^\s*\(\*"], &[r"\*\)\s*$"]),
    ("MATLAB", &[".m"], &[r"^\s*%"], &[r"^\s*%\{"], &[r"^\s*%\}"]),
    ("HTML", &[".html", ".htm"], &[], &[r"^\s*<!--"], &[r"-->\s*$"]),
    ("XML", &[".xml"], &[], &[r"^\s*<!--"], &[r"-->\s*$"]),
    ("CSS", &[".css"], &[], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("SCSS", &[".scss"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
    ("Sass", &[".sass"], &[C_LINE], &[], &[]),
    ("Less", &[".less"], &[C_LINE], &[C_BLOCK_START], &[C_BLOCK_END]),
];

static BUILTIN: LazyLock<GrammarRegistry> = LazyLock::new(|| {
    let mut registry = GrammarRegistry::new();
    for &(name, extensions, single, start, end) in BUILTIN_GRAMMARS {
        let grammar = CommentGrammar::new(single, start, end).expect("valid built-in comment grammar");
        registry.register(Language::new(name, extensions.to_vec(), grammar));
    }
    registry
});

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
