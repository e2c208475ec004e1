//! Low-signal commit filtering
//!
//! Maintenance-only commits (chores, version bumps, typo and formatting
//! fixes, docs) are dropped before anything is counted or summarized.

use std::sync::LazyLock;

use gitvita_git::Commit;
use regex::Regex;

/// Prefixes reported in the result document
pub const LOW_SIGNAL_PATTERNS: [&str; 8] = [
    "chore", "wip", "bump", "release", "typo", "format", "lint", "docs",
];

static LOW_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(chore|wip|bump|release|typo|formatting|format|lint|docs?)(\(|:|\b)")
        .expect("low-signal pattern is valid")
});

/// Whether a subject is empty or starts with a maintenance-only prefix
#[must_use]
pub fn is_low_signal(subject: &str) -> bool {
    let subject = subject.trim();
    subject.is_empty() || LOW_SIGNAL.is_match(subject)
}

/// Keep the commits worth summarizing, preserving order
#[must_use]
pub fn meaningful_commits(commits: &[Commit]) -> Vec<&Commit> {
    commits
        .iter()
        .filter(|commit| !is_low_signal(&commit.subject))
        .collect()
}
