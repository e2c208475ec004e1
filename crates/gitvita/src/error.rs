// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Error types for the gitvita pipeline

use std::path::PathBuf;

use gitvita_git::GitError;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for invalid invocations and git failures
pub const EXIT_INVALID: i32 = 2;

/// Exit status for failures after the history was read
pub const EXIT_FAILURE: i32 = 1;

/// Errors that end a gitvita run
///
/// Every variant is terminal; nothing is written to stdout once one occurs.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad dates, a reversed range or a non-positive commit limit
    #[error(transparent)]
    InputValidation(#[from] ConfigError),

    /// The repository path is missing or not a work tree
    #[error(transparent)]
    RepositoryResolution(GitError),

    /// No `--author` given and no git identity configured
    #[error(transparent)]
    AuthorDetection(GitError),

    /// `git log` could not run or exited non-zero
    #[error(transparent)]
    ExternalCommand(GitError),

    /// The Markdown document could not be written
    #[error("Failed to write {path}: {source}")]
    Output {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The result could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputValidation(_)
            | Self::RepositoryResolution(_)
            | Self::AuthorDetection(_)
            | Self::ExternalCommand(_) => EXIT_INVALID,
            Self::Output { .. } | Self::Json(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_exit_codes() {
        let validation = AppError::from(ConfigError::MaxCommits(0));
        assert_eq!(validation.exit_code(), 2);

        let repo = AppError::RepositoryResolution(GitError::NotARepository {
            path: "/tmp".to_string(),
        });
        assert_eq!(repo.exit_code(), 2);

        let author = AppError::AuthorDetection(GitError::AuthorNotConfigured);
        assert_eq!(author.exit_code(), 2);

        let output = AppError::Output {
            path: PathBuf::from("/x/out.md"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(output.exit_code(), 1);
    }

    #[test]
    fn test_messages_pass_through() {
        let err = AppError::ExternalCommand(GitError::CommandFailed {
            command: "git -C /repo log".to_string(),
            stderr: "fatal: bad revision".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Git command failed: git -C /repo log\nfatal: bad revision"
        );

        let err = AppError::AuthorDetection(GitError::AuthorNotConfigured);
        assert_eq!(
            err.to_string(),
            "Could not detect current git user. Provide --author explicitly."
        );
    }
}
