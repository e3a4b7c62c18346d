use super::*;

#[test]
fn default_ignores_common_directories() {
    let config = IgnoreConfig::default();

    assert!(config.is_ignored_dir("node_modules"));
    assert!(config.is_ignored_dir(".git"));
    assert!(config.is_ignored_dir("target"));
    assert!(!config.is_ignored_dir("src"));
}

#[test]
fn directory_match_is_exact() {
    let config = IgnoreConfig::default();

    assert!(!config.is_ignored_dir("node_modules_old"));
    assert!(!config.is_ignored_dir("Build"));
}

#[test]
fn default_patterns_exclude_noise_files() {
    let config = IgnoreConfig::default();

    assert!(config.matches_file_pattern("package-lock.json"));
    assert!(config.matches_file_pattern("Cargo.lock"));
    assert!(config.matches_file_pattern("app.min.js"));
    assert!(config.matches_file_pattern("style.min.css"));
    assert!(config.matches_file_pattern("app.js.map"));
    assert!(!config.matches_file_pattern("app.js"));
    assert!(!config.matches_file_pattern("package.json"));
}

#[test]
fn empty_config_ignores_nothing() {
    let config = IgnoreConfig::empty();

    assert!(!config.is_ignored_dir("node_modules"));
    assert!(!config.matches_file_pattern("Cargo.lock"));
}

#[test]
fn add_extension_is_suffix_anchored() {
    let mut config = IgnoreConfig::empty();
    config.add_extension("md").unwrap();
    config.add_extension(".txt").unwrap();

    assert!(config.matches_file_pattern("README.md"));
    assert!(config.matches_file_pattern("notes.txt"));
    assert!(!config.matches_file_pattern("README.mdx"));
    assert!(!config.matches_file_pattern("md"));
}

#[test]
fn add_extension_escapes_metacharacters() {
    let mut config = IgnoreConfig::empty();
    config.add_extension("c++").unwrap();

    assert!(config.matches_file_pattern("main.c++"));
    assert!(!config.matches_file_pattern("main.cc"));
}

#[test]
fn add_pattern_rejects_invalid_regex() {
    let mut config = IgnoreConfig::empty();
    let err = config.add_pattern("[invalid").unwrap_err();

    assert!(matches!(err, LinecountError::InvalidPattern { .. }));
    assert!(config.file_patterns.is_empty());
}

#[test]
fn binary_extensions_are_case_insensitive() {
    assert!(is_binary_extension("png"));
    assert!(is_binary_extension("PNG"));
    assert!(is_binary_extension("exe"));
    assert!(!is_binary_extension("rs"));
    assert!(!is_binary_extension(""));
}
