//! Integration tests for the blogo CLI
//!
//! These tests run the real binary in a scratch directory: init, publish
//! posts, list them, and analyze text and posts.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a blogo command running in `dir`
fn blogo(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("blogo"));
    cmd.current_dir(dir)
        .env_remove("BLOGO_PORT")
        .env_remove("BLOGO_DATA_DIR")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to initialize a site with known credentials
fn init_site(dir: &Path) {
    blogo(dir)
        .args(["init", "--email", "admin@example.com", "--password", "secret"])
        .assert()
        .success();
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("blogo v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("blogo --help"));
}

// =============================================================================
// ANALYZE
// =============================================================================

#[test]
fn test_analyze_argument_json() {
    let temp = TempDir::new().unwrap();
    let output = blogo(temp.path())
        .args(["--json", "analyze", "dog dog dog dog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalWords"], 4);
    assert_eq!(json["uniqueWords"], 1);
    assert_eq!(json["repetitions"], 3);
    assert_eq!(json["misspelled"], 0);
    assert_eq!(json["score"], 97);
}

#[test]
fn test_analyze_stdin() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .arg("analyze")
        .write_stdin("Cat cat CAT")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis of stdin"))
        .stdout(predicate::str::contains("Total words:  3"))
        .stdout(predicate::str::contains("Repetitions:  2"));
}

#[test]
fn test_analyze_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("essay.txt"), "one two three").unwrap();
    blogo(temp.path())
        .args(["--json", "analyze", "--file", "essay.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100"));
}

#[test]
fn test_analyze_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .args(["analyze", "--file", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read nope.txt"));
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_writes_hashed_config() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    let config = fs::read_to_string(temp.path().join("blogo.toml")).unwrap();
    assert!(config.contains("admin@example.com"));
    assert!(config.contains("password_hash"));
    assert!(!config.contains("\"secret\""));
    assert!(temp.path().join(".blogo").is_dir());
}

#[test]
fn test_init_twice_needs_force() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());
    let before = fs::read_to_string(temp.path().join("blogo.toml")).unwrap();

    blogo(temp.path())
        .args(["init", "--email", "other@example.com", "--password", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
    assert_eq!(fs::read_to_string(temp.path().join("blogo.toml")).unwrap(), before);

    blogo(temp.path())
        .args(["init", "--force", "--email", "other@example.com", "--password", "x"])
        .assert()
        .success();
    let after = fs::read_to_string(temp.path().join("blogo.toml")).unwrap();
    assert!(after.contains("other@example.com"));
}

// =============================================================================
// POSTS AND REPORT
// =============================================================================

#[test]
fn test_post_lifecycle() {
    let temp = TempDir::new().unwrap();
    init_site(temp.path());

    blogo(temp.path())
        .args(["post", "add", "--title", "Dogs", "--content", "dog dog dog dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]"));

    fs::write(temp.path().join("second.md"), "one two three").unwrap();
    blogo(temp.path())
        .args(["post", "add", "--title", "Counting", "--file", "second.md"])
        .assert()
        .success();

    blogo(temp.path())
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dogs"))
        .stdout(predicate::str::contains("Counting"));

    blogo(temp.path())
        .args(["post", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one two three"));

    blogo(temp.path())
        .args(["post", "show", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post with ID 9 not found"));

    let output = blogo(temp.path()).args(["--json", "report"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["posts"][0]["title"], "Dogs");
    assert_eq!(json["posts"][0]["score"], 97);
    assert_eq!(json["posts"][1]["score"], 100);

    assert!(temp.path().join(".blogo/posts.json").exists());
}

#[test]
fn test_post_add_short_flags() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .args(["post", "add", "-t", "Short", "-c", "flags work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Short"));

    fs::write(temp.path().join("custom.toml"), "[server]\nport = 3001\n").unwrap();
    blogo(temp.path())
        .args(["--config", "custom.toml", "post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]"));
}

#[test]
fn test_post_add_rejects_blank_title() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .args(["post", "add", "--title", "  ", "--content", "body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_report_empty() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts to analyze."));
}

#[test]
fn test_data_dir_override() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .env("BLOGO_DATA_DIR", "elsewhere")
        .args(["post", "add", "--title", "T", "--content", "c"])
        .assert()
        .success();
    assert!(temp.path().join("elsewhere/posts.json").exists());
    assert!(!temp.path().join(".blogo/posts.json").exists());
}

// =============================================================================
// HASH PASSWORD
// =============================================================================

#[test]
fn test_hash_password() {
    let temp = TempDir::new().unwrap();
    blogo(temp.path())
        .args(["hash-password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password_hash = \""))
        .stdout(predicate::str::contains("salt = \""))
        .stdout(predicate::str::contains("hunter2").not());
}
