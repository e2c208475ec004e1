// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Error types for gitvita-git

use thiserror::Error;

/// Errors that can occur while resolving a repository or reading its history
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// The repository path does not exist on disk
    #[error("Repository path does not exist: {path}")]
    RepositoryNotFound {
        /// The path that was requested
        path: String,
    },

    /// The path exists but is not inside a git work tree
    #[error("Not a git repository: {path}")]
    NotARepository {
        /// The path that was searched for a repository
        path: String,
    },

    /// Neither `user.name` nor `user.email` is configured
    #[error("Could not detect current git user. Provide --author explicitly.")]
    AuthorNotConfigured,

    /// The `git` executable could not be started
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A git command exited with a non-zero status
    #[error("Git command failed: {command}\n{stderr}")]
    CommandFailed {
        /// The full command line that was run
        command: String,
        /// Trimmed standard error of the command
        stderr: String,
    },
}
