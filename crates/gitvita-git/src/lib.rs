// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! gitvita-git: Git history fetching and log parsing for gitvita
//!
//! This library crate resolves a repository, detects the local author
//! identity, runs a single `git log` invocation and parses its delimited
//! output into [`Commit`] records.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gitvita_git::{GitRepo, LogFormat, LogOptions, parse_log};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let author = repo.detect_author().expect("author");
//! let options = LogOptions::latest(50).author(&author).with_stats();
//! let raw = repo.fetch_log(&options).expect("git log");
//!
//! for c in parse_log(&raw, LogFormat::WithStats) {
//!     println!("{} {} - {}", c.short_hash(), c.date, c.subject);
//! }
//! ```

pub mod commit;
pub mod error;
pub mod parser;
pub mod repo;

pub use commit::Commit;
pub use error::GitError;
pub use parser::{LogFormat, normalize_space, parse_log, resolve_rename};
pub use repo::{GitRepo, LogOptions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::parser::{LogFormat, parse_log};
    pub use crate::repo::{GitRepo, LogOptions};
}
