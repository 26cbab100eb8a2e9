//! Integration tests for the `evx` CLI.
//!
//! Each test points the binary at a temp data directory with `-C` and
//! verifies stdout and/or file contents.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `evx` binary.
fn evx_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("evx");
    path
}

fn run_evx(dir: &TempDir, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(evx_bin())
        .arg("-C")
        .arg(dir.path())
        .args(args)
        .output()
        .expect("failed to run evx");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_profile(dir: &TempDir) {
    fs::write(
        dir.path().join("profile.json"),
        r#"{"id":"u-1","name":"Ana","role":"Dev","email":"ana@x.com"}"#,
    )
    .unwrap();
}

#[test]
fn profile_show_without_profile() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["profile", "show"]);
    assert!(ok);
    assert!(stdout.contains("no profile registered"));
}

#[test]
fn profile_show_prints_the_record() {
    let dir = TempDir::new().unwrap();
    write_profile(&dir);
    let (stdout, _, ok) = run_evx(&dir, &["profile"]);
    assert!(ok);
    assert!(stdout.contains("Ana <ana@x.com> — Dev"));
}

#[test]
fn profile_show_json() {
    let dir = TempDir::new().unwrap();
    write_profile(&dir);
    let (stdout, _, ok) = run_evx(&dir, &["profile", "show", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["name"], "Ana");
    assert_eq!(value["email"], "ana@x.com");
}

#[test]
fn profile_clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    write_profile(&dir);
    let (stdout, _, ok) = run_evx(&dir, &["profile", "clear"]);
    assert!(ok);
    assert!(stdout.contains("profile cleared"));
    assert!(!dir.path().join("profile.json").exists());

    let (stdout, _, ok) = run_evx(&dir, &["profile", "clear"]);
    assert!(ok);
    assert!(stdout.contains("no profile registered"));
}

#[test]
fn themes_lists_all_builtin_palettes() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["themes"]);
    assert!(ok);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["dark", "light", "darkPurple", "darkBlue"]);
}

#[test]
fn themes_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["themes", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
}

#[test]
fn branches_lists_seeded_backend_data() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["branches"]);
    assert!(ok);
    assert!(stdout.contains("north"));
    assert!(stdout.contains("South Branch"));
}

#[test]
fn tasks_can_be_scoped_to_a_branch() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["tasks", "--branch", "south", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = value.as_array().unwrap();
    assert!(!tasks.is_empty());
    assert!(tasks.iter().all(|t| t["branch"] == "south"));
}

#[test]
fn paths_prints_the_data_dir() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_evx(&dir, &["paths"]);
    assert!(ok);
    assert_eq!(stdout.trim(), dir.path().to_str().unwrap());
}

#[test]
fn unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, ok) = run_evx(&dir, &["frobnicate"]);
    assert!(!ok);
    assert!(!stderr.is_empty());
}
