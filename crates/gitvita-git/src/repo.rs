// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Repository resolution and the `git log` invocation
//!
//! Repository discovery and identity lookup go through `git2`; the history
//! itself is read with one `git log` process so the delimited format and
//! `--numstat` rows come straight from git.

use crate::error::GitError;
use crate::parser::LogFormat;
use chrono::NaiveDate;
use git2::{Repository, RepositoryOpenFlags};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Configuration for a single `git log` fetch
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Maximum number of commits to retrieve
    pub limit: Option<usize>,
    /// Author pattern passed to `--author`
    pub author: Option<String>,
    /// Only include commits on or after this date
    pub since: Option<NaiveDate>,
    /// Only include commits up to this date
    pub until: Option<NaiveDate>,
    /// Output shape requested from git
    pub format: LogFormat,
}

impl LogOptions {
    /// Create options for the N most recent commits, without file stats
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            limit: Some(n),
            format: LogFormat::MessagesOnly,
            ..Default::default()
        }
    }

    /// Request hashes and per-file `--numstat` rows
    #[must_use]
    pub fn with_stats(mut self) -> Self {
        self.format = LogFormat::WithStats;
        self
    }

    /// Use the given log format
    #[must_use]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Filter by author
    #[must_use]
    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Filter commits since a date
    #[must_use]
    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Filter commits until a date
    #[must_use]
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Arguments for `git log`, excluding the `-C <repo>` prefix
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--no-merges".to_string(),
            "--date=short".to_string(),
        ];
        if self.format.includes_stats() {
            args.push("--numstat".to_string());
        }
        if let Some(limit) = self.limit {
            args.push(format!("--max-count={limit}"));
        }
        if let Some(ref author) = self.author {
            args.push(format!("--author={author}"));
        }
        args.push(format!("--pretty=format:{}", self.format.pretty_format()));
        if let Some(since) = self.since {
            args.push(format!("--since={}", since.format("%Y-%m-%d")));
        }
        if let Some(until) = self.until {
            args.push(format!("--until={}", until.format("%Y-%m-%d")));
        }
        args
    }
}

/// A resolved git work tree
pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Resolve `path` and open the work tree that contains it
    ///
    /// Discovery walks up from `path` and stops at the directories listed
    /// in `GIT_CEILING_DIRECTORIES`, as git does.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path does not exist and
    /// `GitError::NotARepository` if it is not inside a non-bare repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let ceilings: Vec<PathBuf> = std::env::var_os("GIT_CEILING_DIRECTORIES")
            .map(|value| std::env::split_paths(&value).collect())
            .unwrap_or_default();
        Self::open_bounded(path, &ceilings)
    }

    /// Like [`GitRepo::open`], with an explicit list of ceiling directories
    ///
    /// # Errors
    ///
    /// Same as [`GitRepo::open`].
    pub fn open_bounded(path: impl AsRef<Path>, ceilings: &[PathBuf]) -> Result<Self, GitError> {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if !path.exists() {
            return Err(GitError::RepositoryNotFound {
                path: path.display().to_string(),
            });
        }
        let path = path.canonicalize().unwrap_or(path);

        let repo = Repository::open_ext(&path, RepositoryOpenFlags::empty(), ceilings)
            .map_err(|_| GitError::NotARepository {
                path: path.display().to_string(),
            })?;
        if repo.is_bare() {
            return Err(GitError::NotARepository {
                path: path.display().to_string(),
            });
        }

        debug!(path = %path.display(), "resolved repository");
        Ok(Self { repo, path })
    }

    /// The resolved path that was opened
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detect the local git identity: `user.name`, falling back to `user.email`
    ///
    /// # Errors
    ///
    /// Returns `GitError::AuthorNotConfigured` if neither key has a value.
    pub fn detect_author(&self) -> Result<String, GitError> {
        let config = self.repo.config()?;
        ["user.name", "user.email"]
            .iter()
            .filter_map(|key| config.get_string(key).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or(GitError::AuthorNotConfigured)
    }

    /// Run `git log` with the given options and return its raw output
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if git cannot be started and
    /// `GitError::CommandFailed` with git's stderr if it exits non-zero.
    pub fn fetch_log(&self, options: &LogOptions) -> Result<String, GitError> {
        let mut args = vec!["-C".to_string(), self.path.display().to_string()];
        args.extend(options.to_args());
        debug!(?args, "running git");

        let output = Command::new("git").args(&args).output()?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
