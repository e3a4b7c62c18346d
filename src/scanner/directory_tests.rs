use std::ffi::OsStr;
use std::path::Path;

use super::*;
use crate::scanner::{IgnoreConfig, IgnoreFilter};
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct SkipVendorFilter;

impl FileFilter for SkipVendorFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }

    fn should_enter_dir(&self, name: &OsStr) -> bool {
        name != "vendor"
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn scanner_finds_files_in_directory() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "test.rs", "fn main() {}");
    write(temp_dir.path(), "lib.rs", "pub fn foo() {}");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/nested/deep/main.rs", "fn main() {}");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/nested/deep/main.rs"));
}

#[test]
fn scanner_order_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "b.rs", "");
    write(temp_dir.path(), "a/z.rs", "");
    write(temp_dir.path(), "c.rs", "");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let first = scanner.scan(temp_dir.path()).unwrap();
    let second = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(first, second);
    assert!(first[0].ends_with("a/z.rs"));
}

#[test]
fn scanner_prunes_ignored_directory_at_any_depth() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "vendor/top.rs", "");
    write(temp_dir.path(), "src/vendor/inner.rs", "");
    write(temp_dir.path(), "src/keep.rs", "");

    let scanner = DirectoryScanner::new(SkipVendorFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/keep.rs"));
}

#[test]
fn ignored_name_does_not_apply_to_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("vendor");
    write(&root, "a.rs", "");

    let scanner = DirectoryScanner::new(SkipVendorFilter);
    let files = scanner.scan(&root).unwrap();

    assert_eq!(files.len(), 1);
}

#[test]
fn scanner_respects_ignore_filter() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "app.js", "");
    write(temp_dir.path(), "app.min.js", "");
    write(temp_dir.path(), "logo.png", "");
    write(temp_dir.path(), "node_modules/dep/index.js", "");

    let config = IgnoreConfig::default();
    let scanner = DirectoryScanner::new(IgnoreFilter::new(&config));
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.js"));
}

#[cfg(unix)]
#[test]
fn scanner_ignores_symlinks() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "real/a.rs", "");
    std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("link")).unwrap();
    std::os::unix::fs::symlink(
        temp_dir.path().join("real/a.rs"),
        temp_dir.path().join("b.rs"),
    )
    .unwrap();
    std::os::unix::fs::symlink(temp_dir.path().join("missing"), temp_dir.path().join("dangling.rs"))
        .unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("real/a.rs"));
}

#[cfg(unix)]
#[test]
fn scanner_skips_unreadable_subdirectory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "top.rs", "");
    write(temp_dir.path(), "locked/hidden.rs", "");
    let locked = temp_dir.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to root
    let denied = std::fs::read_dir(&locked).is_err();
    let files = denied.then(|| DirectoryScanner::new(AcceptAllFilter).scan(temp_dir.path()));
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    let Some(files) = files else {
        return;
    };
    let files = files.unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top.rs"));
}

// =============================================================================
// Root errors
// =============================================================================

#[test]
fn missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let err = scanner.scan(&missing).unwrap_err();

    assert!(matches!(err, LinecountError::RootNotFound { .. }));
}

#[test]
fn file_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "main.rs", "");

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let err = scanner.scan(&temp_dir.path().join("main.rs")).unwrap_err();

    assert!(matches!(err, LinecountError::NotADirectory { .. }));
}

#[test]
fn empty_root_yields_no_files() {
    let temp_dir = TempDir::new().unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    assert!(scanner.scan(temp_dir.path()).unwrap().is_empty());
}
