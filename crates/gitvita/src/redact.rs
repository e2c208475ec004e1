//! Best-effort scrubbing of commit text
//!
//! Four pattern families are removed: URLs, ticket identifiers, hash-like
//! hex tokens and email-like tokens. Anything else passes through, so the
//! output still needs a human read before it is published.

use std::sync::LazyLock;

use gitvita_git::{Commit, normalize_space};
use regex::Regex;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

static TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,10}-\d+\b").expect("ticket pattern is valid"));

static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[0-9a-f]{7,40}\b").expect("hex pattern is valid"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("email pattern is valid"));

/// Remove URLs, ticket IDs, hex tokens and emails, in that order
#[must_use]
pub fn redact(text: &str) -> String {
    let mut scrubbed = normalize_space(text);
    for pattern in [&*URL, &*TICKET, &*HEX_TOKEN, &*EMAIL] {
        scrubbed = normalize_space(&pattern.replace_all(&scrubbed, " "));
    }
    scrubbed
}

/// Redact a commit's subject and body
#[must_use]
pub fn redact_commit(mut commit: Commit) -> Commit {
    commit.subject = redact(&commit.subject);
    commit.body = redact(&commit.body);
    commit
}
