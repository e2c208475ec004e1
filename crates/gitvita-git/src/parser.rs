// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Git log parsing utilities
//!
//! The fetch step asks `git log` for a delimited format: every record starts
//! with the [`COMMIT_SENTINEL`], header fields are separated by `0x1f`, and
//! the message header is terminated by `0x1e`. With `--numstat`, the lines
//! after the terminator are `added<TAB>deleted<TAB>path` rows.

use crate::commit::Commit;
use tracing::trace;

/// Marker that opens every commit record
pub const COMMIT_SENTINEL: &str = "__COMMIT__\x1f";

/// Separator between header fields (unit separator)
pub const FIELD_SEPARATOR: char = '\x1f';

/// Terminator after the last header field (record separator)
pub const HEADER_END: char = '\x1e';

/// Shape of the requested log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Hash, date, subject, body and per-file `--numstat` rows
    #[default]
    WithStats,
    /// Date, subject and body only; no hash and no file stats
    MessagesOnly,
}

impl LogFormat {
    /// The `--pretty=format:` template for this format
    #[must_use]
    pub fn pretty_format(self) -> &'static str {
        match self {
            Self::WithStats => "__COMMIT__%x1f%H%x1f%ad%x1f%s%x1f%b%x1e",
            Self::MessagesOnly => "__COMMIT__%x1f%ad%x1f%s%x1f%b%x1e",
        }
    }

    /// Whether records carry the commit hash
    #[must_use]
    pub fn includes_hash(self) -> bool {
        matches!(self, Self::WithStats)
    }

    /// Whether records are followed by numstat rows
    #[must_use]
    pub fn includes_stats(self) -> bool {
        matches!(self, Self::WithStats)
    }

    fn field_count(self) -> usize {
        if self.includes_hash() { 4 } else { 3 }
    }
}

/// Collapse every whitespace run to a single space and trim the ends
#[must_use]
pub fn normalize_space(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve numstat rename syntax to the post-rename path
///
/// `src/{a => b}/x.rs` becomes `src/b/x.rs`, `{old/a.py => new/a.py}`
/// becomes `new/a.py` and `old.rs => new.rs` becomes `new.rs`. Paths
/// without rename syntax are returned trimmed.
#[must_use]
pub fn resolve_rename(path: &str) -> String {
    let path = path.trim();

    if let (Some(open), Some(close)) = (path.find('{'), path.rfind('}')) {
        if open < close {
            if let Some((_, new)) = path[open + 1..close].split_once("=>") {
                let joined = format!("{}{}{}", &path[..open], new.trim(), &path[close + 1..]);
                return joined
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .collect::<Vec<_>>()
                    .join("/");
            }
        }
    }

    match path.split_once("=>") {
        Some((_, new)) => new.trim().to_string(),
        None => path.to_string(),
    }
}

/// Parse a numstat count; anything but plain digits (e.g. `-` for binary files) is zero
fn parse_count(raw: &str) -> u64 {
    let raw = raw.trim();
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Parse raw `git log` output into commit records
///
/// Records keep the order in which git emitted them (newest first). A
/// record whose header has too few fields is dropped; numstat rows with
/// the wrong column count are skipped.
#[must_use]
pub fn parse_log(raw: &str, format: LogFormat) -> Vec<Commit> {
    let mut commits = Vec::new();

    // Anything before the first sentinel is not part of a record
    for record in raw.split(COMMIT_SENTINEL).skip(1) {
        let (header, rest) = record.split_once(HEADER_END).unwrap_or((record, ""));

        let fields: Vec<&str> = header.splitn(format.field_count(), FIELD_SEPARATOR).collect();
        if fields.len() < format.field_count() {
            trace!(fields = fields.len(), "skipping truncated commit header");
            continue;
        }

        let (hash, fields) = if format.includes_hash() {
            (Some(fields[0].trim().to_string()), &fields[1..])
        } else {
            (None, &fields[..])
        };

        let mut commit = Commit {
            hash,
            date: fields[0].trim().to_string(),
            subject: normalize_space(fields[1]),
            body: normalize_space(fields[2]),
            ..Default::default()
        };

        if format.includes_stats() {
            for line in rest.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let columns: Vec<&str> = line.split('\t').collect();
                if columns.len() != 3 {
                    trace!(line, "skipping malformed numstat row");
                    continue;
                }
                commit.insertions += parse_count(columns[0]);
                commit.deletions += parse_count(columns[1]);
                commit.files.push(resolve_rename(columns[2]));
            }
        }

        commits.push(commit);
    }

    commits
}
