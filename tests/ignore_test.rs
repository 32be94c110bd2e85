use kiln::constants::IGNORE_FILE;
use kiln::ignore::{build_excludes, parse_ignore_file};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();

    // Without .kilnignore only the defaults apply
    let glob_set = parse_ignore_file(temp_dir.path()).unwrap();
    assert!(glob_set.is_match("package.json"));
    assert!(glob_set.is_match("nested/README.md"));
    assert!(glob_set.is_match("node_modules/vue/index.js"));
    assert!(glob_set.is_match(".gitignore.sample"));
    assert!(!glob_set.is_match("src/main.js"));
    assert!(!glob_set.is_match("coverage/index.json"));

    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "# generated files\n\ncoverage/**\n*.log").unwrap();

    let glob_set = parse_ignore_file(temp_dir.path()).unwrap();
    assert!(glob_set.is_match("coverage/index.json"));
    assert!(glob_set.is_match("debug.log"));
    assert!(glob_set.is_match(IGNORE_FILE));
    assert!(glob_set.is_match("package.json")); // Default pattern still works
    assert!(!glob_set.is_match("src/main.js"));
}

#[test]
fn test_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(IGNORE_FILE), "src/[\n").unwrap();
    assert!(parse_ignore_file(temp_dir.path()).is_err());
}

#[test]
fn test_build_excludes() {
    let glob_set = build_excludes(&["**/*.tmp"]).unwrap();
    assert!(glob_set.is_match("a/b/c.tmp"));
    assert!(!glob_set.is_match("a/b/c.txt"));
}
