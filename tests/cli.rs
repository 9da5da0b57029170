// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the `review-ready` binary.

use assert_cmd::Command;
use git2::{BranchType, Repository, RepositoryInitOptions, Signature};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn commit(repo: &Repository, files: &[(&str, &str)], message: &str) {
    let workdir = repo.workdir().unwrap().to_path_buf();
    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full = workdir.join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(&full, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

/// A repository with `main` and a `feature` branch ahead of it.
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("trunk");
    let repo = Repository::init_opts(dir.path(), &opts).unwrap();

    commit(&repo, &[("README.md", "# demo\n")], "Initial commit");
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch("main", &head, false).unwrap();

    let big: String = (0..120).map(|i| format!("line {}\n", i)).collect();
    commit(
        &repo,
        &[
            ("auth/login.py", big.as_str()),
            ("requirements.txt", "flask==3.0\n"),
        ],
        "Add login",
    );
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch("feature", &head, false).unwrap();
    assert!(repo.find_branch("feature", BranchType::Local).is_ok());

    dir
}

fn review_ready(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("review-ready").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("REVIEW_READY_CONFIG")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".xdg"));
    cmd
}

#[test]
fn test_text_summary() {
    let dir = fixture();
    review_ready(&dir)
        .args(["feature", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Review Summary for feature (base: main)"))
        .stdout(predicate::str::contains("Sensitive areas touched: auth"))
        .stdout(predicate::str::contains("New/updated dependencies detected"))
        .stdout(predicate::str::contains("@auth"));
}

#[test]
fn test_piped_text_has_no_ansi_escapes() {
    let dir = fixture();
    let output = review_ready(&dir)
        .arg("feature")
        .env_remove("CLICOLOR_FORCE")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Review Summary for feature"));
    assert!(!stdout.contains('\u{1b}'), "{stdout}");
}

#[test]
fn test_unknown_branch_fails() {
    let dir = fixture();
    review_ready(&dir)
        .arg("no-such-branch")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("no-such-branch"));
}

#[test]
fn test_same_branch_has_no_differences() {
    let dir = fixture();
    review_ready(&dir)
        .args(["main", "--base", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences between main and main"));
}

#[test]
fn test_json_output() {
    let dir = fixture();
    let output = review_ready(&dir)
        .args(["feature", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["branch"], "feature");
    assert_eq!(json["base"], "main");
    assert_eq!(json["totals"]["files"], 2);
    assert_eq!(json["categories"]["added"].as_array().unwrap().len(), 2);
    assert_eq!(json["categories"]["dependencies"][0]["path"], "requirements.txt");
    assert_eq!(json["risks"]["large_changes"][0]["path"], "auth/login.py");
    assert_eq!(json["risks"]["new_dependencies"][0]["path"], "requirements.txt");
}

#[test]
fn test_config_sets_base_and_excludes() {
    let dir = fixture();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[review]\nbase = \"main\"\nexclude = [\"requirements.txt\"]\n",
    )
    .unwrap();

    let output = review_ready(&dir)
        .args(["feature", "--format", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totals"]["files"], 1);
    assert!(json["risks"]["new_dependencies"].as_array().unwrap().is_empty());
}

#[test]
fn test_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    review_ready(&dir)
        .arg("feature")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
