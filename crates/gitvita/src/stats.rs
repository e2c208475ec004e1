// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Statistics-oriented aggregation
//!
//! Meaningful commits are tallied by area (top-level path segment) and by
//! technology (file extension), then turned into a summary sentence and a
//! short list of highlights.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use gitvita_git::{Commit, resolve_rename};
use tracing::debug;

use crate::report::{
    CommitRef, FiltersReport, NamedCount, ReportContext, StatsCounts, StatsReport,
    TimeRangeReport, guidance_for,
};
use crate::signal::{LOW_SIGNAL_PATTERNS, meaningful_commits};

/// Rows kept in the area and technology tables
pub const TOP_N: usize = 10;

/// Meaningful commits listed in the report
pub const RECENT_COMMITS: usize = 10;

const MAX_HIGHLIGHTS: usize = 6;
const MIN_HIGHLIGHTS: usize = 4;
const RECENT_SUBJECTS: usize = 3;

/// Area used for files at the repository root
pub const ROOT_AREA: &str = "root";

const EXTENSION_TO_TECH: [(&str, &str); 18] = [
    (".py", "Python"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "React/TypeScript"),
    (".jsx", "React/JavaScript"),
    (".java", "Java"),
    (".kt", "Kotlin"),
    (".go", "Go"),
    (".rs", "Rust"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".swift", "Swift"),
    (".sql", "SQL"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
    (".json", "JSON"),
    (".tf", "Terraform"),
    (".dockerfile", "Docker"),
];

/// `singular` or its plural form for `count`
#[must_use]
pub fn pluralize(count: u64, singular: &str) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

/// Top-level path segment of a touched file
///
/// Rename syntax is resolved to the new path first; files at the root
/// (empty or `.` first segment) map to [`ROOT_AREA`].
#[must_use]
pub fn infer_area(path: &str) -> String {
    let normalized = resolve_rename(&path.replace('\\', "/"));
    match normalized.split('/').next() {
        None | Some("") | Some(".") => ROOT_AREA.to_string(),
        Some(top) => top.to_string(),
    }
}

/// Technology label for a file, from its extension
#[must_use]
pub fn infer_technology(path: &str) -> Option<&'static str> {
    let lowered = path.trim().to_lowercase();
    let extension = if lowered.ends_with("dockerfile") {
        ".dockerfile".to_string()
    } else {
        format!(".{}", Path::new(&lowered).extension()?.to_str()?)
    };
    EXTENSION_TO_TECH
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, tech)| *tech)
}

/// Counter that remembers first-insertion order
///
/// `most_common` sorts by descending count and breaks ties by the order
/// in which keys were first added.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` largest counts
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

/// Totals over the meaningful commits of one run
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Number of meaningful commits
    pub commits: usize,
    /// Distinct touched paths
    pub unique_files: BTreeSet<String>,
    /// File-level changes per area
    pub areas: Tally,
    /// File-level changes per technology
    pub technologies: Tally,
    /// Lines added
    pub insertions: u64,
    /// Lines removed
    pub deletions: u64,
}

/// Tally areas, technologies and line counts
#[must_use]
pub fn aggregate(meaningful: &[&Commit]) -> Aggregate {
    let mut agg = Aggregate {
        commits: meaningful.len(),
        ..Default::default()
    };

    for commit in meaningful {
        agg.insertions += commit.insertions;
        agg.deletions += commit.deletions;
        for file in &commit.files {
            agg.unique_files.insert(file.clone());
            agg.areas.add(&infer_area(file));
            if let Some(tech) = infer_technology(file) {
                agg.technologies.add(tech);
            }
        }
    }

    agg
}

/// One-sentence summary for the role
#[must_use]
pub fn build_summary(role: &str, company: &str, time_label: &str, agg: &Aggregate) -> String {
    if agg.commits == 0 {
        return format!(
            "As {role} at {company}, no meaningful commits were detected {time_label}; \
             widen the time range or adjust the author filter."
        );
    }

    let top_area = agg
        .areas
        .most_common(1)
        .into_iter()
        .next()
        .map_or_else(|| "core project areas".to_string(), |(name, _)| name);
    let top_tech = agg
        .technologies
        .most_common(1)
        .into_iter()
        .next()
        .map_or_else(|| "multiple technologies".to_string(), |(name, _)| name);
    let files = agg.unique_files.len() as u64;

    format!(
        "As {role} at {company}, shipped {} meaningful {} {time_label}, \
         touching {files} {} with notable focus on {top_area} and {top_tech}.",
        agg.commits,
        pluralize(agg.commits as u64, "commit"),
        pluralize(files, "file"),
    )
}

/// Between four and six highlight lines; empty when nothing was meaningful
#[must_use]
pub fn build_highlights(meaningful: &[&Commit], agg: &Aggregate) -> Vec<String> {
    if meaningful.is_empty() {
        return Vec::new();
    }

    let mut highlights = Vec::new();
    let files = agg.unique_files.len() as u64;
    let areas = agg.areas.len() as u64;
    highlights.push(format!(
        "Shipped {} meaningful {} touching {files} {} across {areas} project {}.",
        agg.commits,
        pluralize(agg.commits as u64, "commit"),
        pluralize(files, "file"),
        pluralize(areas, "area"),
    ));

    if agg.insertions > 0 || agg.deletions > 0 {
        highlights.push(format!(
            "Drove substantial code evolution with about {} {} and {} {}.",
            agg.insertions,
            pluralize(agg.insertions, "insertion"),
            agg.deletions,
            pluralize(agg.deletions, "deletion"),
        ));
    }

    if let Some((area, changes)) = agg.areas.most_common(1).into_iter().next() {
        highlights.push(format!(
            "Focused strongly on {area}, contributing {changes} file-level {} in that area.",
            pluralize(changes as u64, "change"),
        ));
    }

    if !agg.technologies.is_empty() {
        let top: Vec<String> = agg
            .technologies
            .most_common(3)
            .into_iter()
            .map(|(tech, count)| format!("{tech} ({count})"))
            .collect();
        highlights.push(format!(
            "Worked across a broad stack with visible activity in {}.",
            top.join(", ")
        ));
    }

    let mut recent: Vec<&str> = Vec::new();
    for commit in meaningful {
        let subject = commit.subject.trim();
        if !subject.is_empty() && !recent.contains(&subject) {
            recent.push(subject);
        }
        if recent.len() == RECENT_SUBJECTS {
            break;
        }
    }

    for subject in &recent {
        if highlights.len() >= MAX_HIGHLIGHTS {
            break;
        }
        highlights.push(format!("Delivered changes such as: {subject}."));
    }

    while highlights.len() < MIN_HIGHLIGHTS && !recent.is_empty() {
        let idx = highlights.len() % recent.len();
        highlights.push(format!(
            "Delivered iterative improvements, including: {}.",
            recent[idx]
        ));
    }

    highlights.truncate(MAX_HIGHLIGHTS);
    highlights
}

fn named_counts(tally: &Tally) -> Vec<NamedCount> {
    tally
        .most_common(TOP_N)
        .into_iter()
        .map(|(name, changes)| NamedCount { name, changes })
        .collect()
}

/// Build the statistics-oriented report from parsed commits
#[must_use]
pub fn build_report(ctx: &ReportContext, commits: &[Commit]) -> StatsReport {
    let meaningful = meaningful_commits(commits);
    let agg = aggregate(&meaningful);
    debug!(
        raw = commits.len(),
        meaningful = meaningful.len(),
        files = agg.unique_files.len(),
        areas = agg.areas.len(),
        "aggregated commit statistics"
    );

    let summary = build_summary(&ctx.role, &ctx.company, &ctx.range.label(), &agg);
    let highlights = build_highlights(&meaningful, &agg);

    StatsReport {
        repo: ctx.repo.clone(),
        role: ctx.role.clone(),
        company: ctx.company.clone(),
        author: ctx.author.clone(),
        time_range: TimeRangeReport::from(&ctx.range),
        filters: FiltersReport {
            max_commits: ctx.max_commits,
            low_signal_filter: true,
            low_signal_patterns: LOW_SIGNAL_PATTERNS.iter().map(|p| p.to_string()).collect(),
        },
        stats: StatsCounts {
            raw_commits: commits.len(),
            meaningful_commits: meaningful.len(),
            unique_files_touched: agg.unique_files.len(),
            areas_touched: agg.areas.len(),
            insertions: agg.insertions,
            deletions: agg.deletions,
        },
        areas: named_counts(&agg.areas),
        tech_signals: named_counts(&agg.technologies),
        recent_meaningful_commits: meaningful
            .iter()
            .take(RECENT_COMMITS)
            .map(|c| CommitRef {
                hash: c.short_hash().to_string(),
                date: c.date.clone(),
                subject: c.subject.clone(),
            })
            .collect(),
        summary,
        highlights,
        guidance: guidance_for(commits.len(), meaningful.len()),
    }
}
