// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Test utilities for gitvita integration tests
//!
//! This module provides utilities for:
//! - Temporary directory management
//! - Git repository scaffolding with fixed commit dates
//! - Running the compiled binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU32, Ordering};

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is removed when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    /// Create a new uniquely named directory under the system temp directory
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "gitvita-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);

        fs::create_dir_all(&path).expect("Failed to create temp test directory");

        Self { path }
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file within the temp directory with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the temp directory
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.path.join(relative_path)).expect("Failed to read file")
    }

    /// Check if a file exists in the temp directory
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.path.join(relative_path).exists()
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Git Repository Scaffolding
// ============================================================================

/// Commit date used unless a test asks for another one
pub const DEFAULT_DATE: &str = "2024-01-15T12:00:00";

/// A temporary git repository with a configured identity
pub struct TestGitRepo {
    temp_dir: TempTestDir,
}

impl TestGitRepo {
    /// Create and initialize a new repository
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        let path = temp_dir.path();
        run_git(path, &["init", "--quiet"], None);
        run_git(path, &["config", "user.email", "test@example.com"], None);
        run_git(path, &["config", "user.name", "Test Author"], None);
        run_git(path, &["config", "commit.gpgsign", "false"], None);
        Self { temp_dir }
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the temp directory backing the repository
    pub fn dir(&self) -> &TempTestDir {
        &self.temp_dir
    }

    /// Create a file and stage it
    pub fn create_file(&self, relative_path: &str, content: &str) -> &Self {
        self.temp_dir.create_file(relative_path, content);
        run_git(self.path(), &["add", relative_path], None);
        self
    }

    /// Commit staged changes on [`DEFAULT_DATE`]
    pub fn commit(&self, message: &str) -> &Self {
        self.commit_at(message, DEFAULT_DATE)
    }

    /// Commit staged changes with both author and committer date set to `date`
    pub fn commit_at(&self, message: &str, date: &str) -> &Self {
        run_git(
            self.path(),
            &["commit", "--quiet", "--allow-empty", "-m", message],
            Some(date),
        );
        self
    }

    /// Get the SHA of HEAD
    pub fn head_sha(&self) -> String {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(["rev-parse", "HEAD"])
            .output()
            .expect("Failed to get HEAD SHA");

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

/// Initialize a repository with no identity configured and no commits
pub fn anonymous_repo(test_name: &str) -> TempTestDir {
    let dir = TempTestDir::new(test_name);
    run_git(dir.path(), &["init", "--quiet"], None);
    dir
}

/// Repository with one low-signal and two meaningful commits
///
/// History, oldest first:
/// - `chore: bump` touching `Cargo.toml`
/// - `fix: resolve login timeout` touching `src/auth/login.rs`
/// - `feat: add export to CSV` touching `src/export/csv.rs` and `web/app.ts`
pub fn three_commit_repo(test_name: &str) -> TestGitRepo {
    let repo = TestGitRepo::new(test_name);
    repo.create_file("Cargo.toml", "[package]\nname = \"demo\"\n")
        .commit_at("chore: bump", "2024-01-10T09:00:00");
    repo.create_file("src/auth/login.rs", "fn login() {}\n")
        .commit_at(
            "fix: resolve login timeout\n\nSee https://tracker.example.com/PROJ-42",
            "2024-01-12T09:00:00",
        );
    repo.create_file("src/export/csv.rs", "fn export() {}\n")
        .create_file("web/app.ts", "export const app = 1;\n")
        .commit_at("feat: add export to CSV", "2024-01-15T09:00:00");
    repo
}

/// Run a git command in the given directory
fn run_git(dir: &Path, args: &[&str], date: Option<&str>) {
    let mut command = Command::new("git");
    command.current_dir(dir).args(args);
    if let Some(date) = date {
        command
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date);
    }
    let output = command.output().expect("Failed to run git command");

    if !output.status.success() {
        panic!(
            "Git command failed: git {}\nstderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// ============================================================================
// Binary Invocation
// ============================================================================

/// Run the compiled `gitvita` binary with an isolated environment
pub fn run_gitvita(args: &[&str]) -> Output {
    run_gitvita_with_env(args, &[])
}

/// Run the compiled `gitvita` binary with extra environment variables
pub fn run_gitvita_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gitvita"))
        .args(args)
        .env_remove("GITVITA_REPO")
        .env_remove("GITVITA_AUTHOR")
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to run gitvita")
}

/// Parse stdout of a successful run as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "gitvita failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
