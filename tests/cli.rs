use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn ffind() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ffind"))
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Stdout lines relative to the search root, sorted for stable assertions
/// (directory-read order is filesystem-dependent).
fn relative_lines(stdout: &[u8], root: &Path) -> Vec<String> {
    let prefix = format!("{}/", root.display());
    let s = String::from_utf8_lossy(stdout);
    let mut lines: Vec<String> = s
        .lines()
        .map(|l| {
            l.strip_prefix(&prefix)
                .unwrap_or_else(|| panic!("line {:?} not under root", l))
                .to_string()
        })
        .collect();
    lines.sort();
    lines
}

#[test]
fn finds_subsequence_within_one_component() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/main.c"), "");
    write_file(&temp.path().join("src/util.c"), "");
    write_file(&temp.path().join(".git/config"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("s/mc")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    // "m","c" are a subsequence of "main.c" but not of "util.c"; nothing
    // under .git is ever visited.
    assert_eq!(lines, vec!["src/main.c"]);
}

#[test]
fn segment_does_not_split_across_components() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("dev/example/foo"), "");
    write_file(&temp.path().join("dev/eta/text"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("d/ex/")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec!["dev/example/foo"]);
}

#[test]
fn dotfiles_shown_only_with_flag() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join(".hidden"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("hidden")
        .assert()
        .success();
    assert!(assert.get_output().stdout.is_empty());

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("-d")
        .arg("hidden")
        .assert()
        .success();
    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec![".hidden"]);
}

#[test]
fn only_dirs_filters_files() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("build")).unwrap();
    write_file(&temp.path().join("build.log"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("--only-dirs")
        .arg("build")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec!["build/"]);
}

#[test]
fn case_insensitive_flag() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("README.md"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("-i")
        .arg("readme")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec!["README.md"]);
}

#[test]
fn consecutive_run_with_custom_toggle() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("foobar"), "");
    write_file(&temp.path().join("fxoobar"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("-c")
        .arg("%")
        .arg("%foo%b")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec!["foobar"]);
}

#[test]
fn no_recurse_stays_shallow() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("deep/note"), "");
    write_file(&temp.path().join("note"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("--no-recurse")
        .arg("note")
        .assert()
        .success();

    let lines = relative_lines(&assert.get_output().stdout, temp.path());
    assert_eq!(lines, vec!["note"]);
}

#[test]
fn jsonl_format_emits_records() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    write_file(&temp.path().join("src/lib.rs"), "");

    let assert = ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("--format")
        .arg("jsonl")
        .arg("lib")
        .assert()
        .success();

    let s = String::from_utf8_lossy(&assert.get_output().stdout);
    let items: Vec<Value> = s
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("valid jsonl line"))
        .collect();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "file");
    assert!(items[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("src/lib.rs"));
}

#[test]
fn unreadable_root_warns_and_exits_zero() {
    let temp = tempdir().unwrap();

    ffind()
        .arg("--root")
        .arg(temp.path().join("missing"))
        .arg("x")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn rejects_unknown_format() {
    let temp = tempdir().unwrap();

    ffind()
        .arg("--root")
        .arg(temp.path())
        .arg("--format")
        .arg("yaml")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
