// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Result documents and Markdown rendering
//!
//! Both presentation modes produce a serializable report. The JSON form is
//! always printed; the Markdown form is written only when `--out` is given.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{DATE_FORMAT, TimeRange};

/// Title line of every Markdown draft
pub const MARKDOWN_TITLE: &str = "# LinkedIn Experience Draft";

/// Inputs shared by both report builders
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    /// Resolved repository path
    pub repo: String,
    /// Role title
    pub role: String,
    /// Company name
    pub company: String,
    /// Author filter that was applied
    pub author: String,
    /// Validated time window
    pub range: TimeRange,
    /// Commit limit passed to git
    pub max_commits: usize,
}

/// Time window as reported in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeReport {
    /// `all-time` or `bounded`
    pub mode: String,
    /// Start date, if any
    pub since: Option<String>,
    /// End date, if any
    pub until: Option<String>,
}

impl From<&TimeRange> for TimeRangeReport {
    fn from(range: &TimeRange) -> Self {
        Self {
            mode: range.mode().to_string(),
            since: range.since.map(|d| d.format(DATE_FORMAT).to_string()),
            until: range.until.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Filtering settings echoed back in stats mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersReport {
    /// Commit limit passed to git
    pub max_commits: usize,
    /// Whether low-signal filtering was applied
    pub low_signal_filter: bool,
    /// Prefixes treated as low-signal
    pub low_signal_patterns: Vec<String>,
}

/// Counters for stats mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsCounts {
    /// Commits returned by git
    pub raw_commits: usize,
    /// Commits left after low-signal filtering
    pub meaningful_commits: usize,
    /// Distinct paths touched by meaningful commits
    pub unique_files_touched: usize,
    /// Distinct areas touched by meaningful commits
    pub areas_touched: usize,
    /// Lines added by meaningful commits
    pub insertions: u64,
    /// Lines removed by meaningful commits
    pub deletions: u64,
}

/// A label with its file-level change count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    /// Area or technology name
    pub name: String,
    /// File-level changes attributed to it
    pub changes: usize,
}

/// A recent meaningful commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    /// Short (7 character) hash
    pub hash: String,
    /// Author date
    pub date: String,
    /// Subject line
    pub subject: String,
}

/// Statistics-oriented result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub repo: String,
    pub role: String,
    pub company: String,
    pub author: String,
    pub time_range: TimeRangeReport,
    pub filters: FiltersReport,
    pub stats: StatsCounts,
    pub areas: Vec<NamedCount>,
    pub tech_signals: Vec<NamedCount>,
    pub recent_meaningful_commits: Vec<CommitRef>,
    pub summary: String,
    pub highlights: Vec<String>,
    pub guidance: Option<String>,
}

/// What the narrative document deliberately leaves out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidentiality {
    /// The repository path appears in the output
    pub includes_repository_path: bool,
    /// Commit hashes appear in the output
    pub includes_commit_hashes: bool,
    /// The author identity appears in the output
    pub includes_author_identity: bool,
}

/// Narrative-oriented, redacted result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeReport {
    pub role: String,
    pub company: String,
    pub time_range: TimeRangeReport,
    pub summary: String,
    pub feature_highlights: Vec<String>,
    pub end_user_outcomes: Vec<String>,
    pub business_relevance: Vec<String>,
    pub source_mode: String,
    pub confidentiality: Confidentiality,
    pub guidance: Option<String>,
}

/// The document produced by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// `--mode stats`
    Stats(StatsReport),
    /// `--mode narrative`
    Narrative(NarrativeReport),
}

/// Guidance shown when the run found nothing to summarize
#[must_use]
pub fn guidance_for(raw_commits: usize, meaningful_commits: usize) -> Option<String> {
    if raw_commits == 0 {
        Some(
            "No commits found in this range. Widen the date range or verify the author filter."
                .to_string(),
        )
    } else if meaningful_commits == 0 {
        Some(
            "Commits were found but all were filtered as low-signal. \
             Adjust commit naming or lower filtering strictness."
                .to_string(),
        )
    } else {
        None
    }
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String], empty: &str) {
    lines.push(String::new());
    lines.push(format!("## {heading}"));
    lines.push(String::new());
    if items.is_empty() {
        lines.push(format!("- {empty}"));
    } else {
        lines.extend(items.iter().map(|item| format!("- {item}")));
    }
}

impl Report {
    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Guidance text, if any
    #[must_use]
    pub fn guidance(&self) -> Option<&str> {
        match self {
            Self::Stats(r) => r.guidance.as_deref(),
            Self::Narrative(r) => r.guidance.as_deref(),
        }
    }

    /// Render the Markdown draft, ending with a newline
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![MARKDOWN_TITLE.to_string(), String::new()];

        match self {
            Self::Stats(r) => {
                lines.push(format!("- Role: {}", r.role));
                lines.push(format!("- Company: {}", r.company));
                lines.push(format!("- Author filter: {}", r.author));
                lines.push(format!("- Time mode: {}", r.time_range.mode));
                lines.extend([String::new(), "## Summary".to_string(), String::new()]);
                lines.push(r.summary.clone());
                push_section(
                    &mut lines,
                    "Highlights",
                    &r.highlights,
                    "No meaningful commit highlights were detected.",
                );
            }
            Self::Narrative(r) => {
                lines.push(format!("- Role: {}", r.role));
                lines.push(format!("- Company: {}", r.company));
                lines.push(format!("- Time mode: {}", r.time_range.mode));
                lines.extend([String::new(), "## Summary".to_string(), String::new()]);
                lines.push(r.summary.clone());
                push_section(
                    &mut lines,
                    "Feature Highlights",
                    &r.feature_highlights,
                    "No feature highlights were detected.",
                );
                push_section(
                    &mut lines,
                    "End-User Outcomes",
                    &r.end_user_outcomes,
                    "No end-user outcomes were detected.",
                );
                push_section(
                    &mut lines,
                    "Business Relevance",
                    &r.business_relevance,
                    "No business relevance points were detected.",
                );
            }
        }

        if let Some(guidance) = self.guidance() {
            lines.extend([
                String::new(),
                "## Guidance".to_string(),
                String::new(),
                guidance.to_string(),
            ]);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Write the Markdown draft, creating parent directories as needed
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn write_markdown(path: &Path, report: &Report) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, report.to_markdown())
}
