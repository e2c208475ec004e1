//! Commit records parsed from `git log` output

use serde::{Deserialize, Serialize};

/// A single commit as emitted by the log fetch
///
/// Text fields are whitespace-normalized by the parser. `files`,
/// `insertions` and `deletions` stay empty/zero when the log was fetched
/// without per-file stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit hash, absent when the log format omits it
    pub hash: Option<String>,
    /// Author date in `YYYY-MM-DD` form
    pub date: String,
    /// First line of the commit message
    pub subject: String,
    /// Remaining message text collapsed to a single line
    pub body: String,
    /// Paths touched by the commit, rename syntax already resolved
    pub files: Vec<String>,
    /// Lines added across all files
    pub insertions: u64,
    /// Lines removed across all files
    pub deletions: u64,
}

impl Commit {
    /// Validate that a hash is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_hash(hash: &str) -> bool {
        hash.len() == 40 && hash.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short hash (first 7 characters), or an empty string
    #[must_use]
    pub fn short_hash(&self) -> &str {
        match self.hash.as_deref() {
            Some(hash) => hash
                .char_indices()
                .nth(7)
                .map_or(hash, |(end, _)| &hash[..end]),
            None => "",
        }
    }

}
