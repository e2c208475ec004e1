// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Narrative-oriented aggregation
//!
//! Commit text reaching this module has already been redacted. The report
//! never carries hashes, the repository path or the author identity; it is
//! built from fixed sentence pools selected by which intent categories
//! appear, plus one templated line per recent commit.

use std::collections::HashSet;
use std::sync::LazyLock;

use gitvita_git::Commit;
use regex::Regex;
use tracing::debug;

use crate::classify::{Category, classify};
use crate::report::{
    Confidentiality, NarrativeReport, ReportContext, TimeRangeReport, guidance_for,
};
use crate::signal::meaningful_commits;
use crate::stats::{Tally, pluralize};

/// Meaningful commits sampled for category presence
pub const CATEGORY_SAMPLE: usize = 12;

/// Meaningful commits turned into feature highlights
pub const FEATURE_SAMPLE: usize = 6;

/// Cap on outcome and relevance lists
pub const LIST_CAP: usize = 4;

/// Topic tokens kept per highlight
pub const TOKEN_LIMIT: usize = 4;

/// Value of `source_mode` in the narrative report
pub const SOURCE_MODE: &str = "local-git-history";

const REVIEW_GUIDANCE: &str = "Review every line before publishing. Redaction only removes URLs, \
     ticket IDs, hash-like tokens and email addresses; other confidential details may remain.";

const FALLBACK_HIGHLIGHTS: [&str; 4] = [
    "Contributions were delivered across the codebase during this period.",
    "Engineering work was carried out in collaboration with the wider team.",
    "Existing functionality was maintained and supported.",
    "Development practices were applied consistently across changes.",
];

const BASELINE_OUTCOMES: [&str; 2] = [
    "Users receive a more dependable product experience over time.",
    "Teams can build on a codebase that is easier to extend.",
];

const BASELINE_RELEVANCE: [&str; 2] = [
    "Contributed consistent engineering output aligned with team priorities.",
    "Supported delivery commitments through steady, reviewable changes.",
];

static CONVENTIONAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+(\([^)]*\))?!?:\s+").expect("conventional prefix pattern is valid")
});

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+").expect("word pattern is valid"));

const ACTION_VERBS: &[&str] = &[
    "add", "adds", "added", "adding", "allow", "allows", "bump", "change", "changed", "changes",
    "clean", "create", "created", "creates", "enable", "enabled", "ensure", "fix", "fixed",
    "fixes", "fixing", "handle", "handles", "implement", "implemented", "implements", "improve",
    "improved", "improves", "introduce", "introduced", "make", "makes", "move", "moved",
    "refactor", "refactored", "remove", "removed", "removes", "rename", "renamed", "replace",
    "replaced", "resolve", "resolved", "resolves", "rework", "reworked", "set", "support",
    "supports", "update", "updated", "updates", "use", "uses",
];

const STOP_WORDS: &[&str] = &[
    "all", "also", "and", "any", "are", "but", "can", "for", "from", "has", "have", "into",
    "its", "more", "new", "not", "now", "off", "only", "our", "out", "per", "some", "than",
    "that", "the", "their", "then", "this", "too", "via", "was", "were", "when", "with",
    "without", "your",
];

fn end_user_outcome(category: Category) -> &'static str {
    match category {
        Category::IssueResolution => {
            "Users hit fewer errors and interruptions in everyday workflows."
        }
        Category::Performance => "Users experience faster, more responsive interactions.",
        Category::Security => "Users can rely on stronger protection of their data and access.",
        Category::Integration => {
            "Users can move data between connected tools with less manual effort."
        }
        Category::Maintainability => {
            "Users benefit from steadier releases built on a cleaner codebase."
        }
        Category::FeatureDelivery => {
            "Users gained new capabilities that broaden what the product can do."
        }
    }
}

fn business_relevance(category: Category) -> &'static str {
    match category {
        Category::IssueResolution => {
            "Reduced support load and operational risk by resolving defects quickly."
        }
        Category::Performance => {
            "Improved efficiency and scalability, supporting growth without proportional cost."
        }
        Category::Security => "Strengthened compliance posture and customer trust.",
        Category::Integration => {
            "Expanded interoperability with partner and internal systems, increasing platform value."
        }
        Category::Maintainability => {
            "Lowered long-term maintenance cost and accelerated future delivery."
        }
        Category::FeatureDelivery => {
            "Advanced the product roadmap with shippable, customer-facing increments."
        }
    }
}

fn highlight_template(category: Category) -> &'static str {
    match category {
        Category::IssueResolution => "A reliability issue was resolved",
        Category::Performance => "Performance improvements were delivered",
        Category::Security => "Security and access controls were strengthened",
        Category::Integration => "An integration capability was delivered",
        Category::Maintainability => "Code maintainability was improved",
        Category::FeatureDelivery => "A new feature was delivered",
    }
}

/// Drop duplicates keeping first occurrences, then cap the list
fn dedup_capped(items: impl IntoIterator<Item = String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(cap)
        .collect()
}

/// Remove a `type:` or `type(scope):` prefix
#[must_use]
pub fn strip_conventional_prefix(subject: &str) -> &str {
    match CONVENTIONAL_PREFIX.find(subject) {
        Some(m) => &subject[m.end()..],
        None => subject,
    }
}

/// Up to four distinct topic words from a subject
///
/// Tokens are lowercase alphabetic runs of at least three letters that are
/// neither action verbs nor stop words.
#[must_use]
pub fn topic_tokens(subject: &str) -> Vec<String> {
    let lowered = strip_conventional_prefix(subject).to_lowercase();
    let mut tokens: Vec<String> = Vec::new();
    for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
        if word.len() < 3 || ACTION_VERBS.contains(&word) || STOP_WORDS.contains(&word) {
            continue;
        }
        if !tokens.iter().any(|t| t == word) {
            tokens.push(word.to_string());
        }
        if tokens.len() == TOKEN_LIMIT {
            break;
        }
    }
    tokens
}

/// Render one passive-voice highlight for a commit subject
#[must_use]
pub fn feature_highlight(subject: &str) -> String {
    let template = highlight_template(classify(subject));
    let tokens = topic_tokens(subject);
    if tokens.is_empty() {
        format!("{template}.")
    } else {
        format!("{template} in {}.", tokens.join(" "))
    }
}

/// Feature highlights for the first meaningful commits, or the fallback set
#[must_use]
pub fn build_feature_highlights(meaningful: &[&Commit]) -> Vec<String> {
    if meaningful.is_empty() {
        return FALLBACK_HIGHLIGHTS.iter().map(|s| s.to_string()).collect();
    }
    dedup_capped(
        meaningful
            .iter()
            .take(FEATURE_SAMPLE)
            .map(|c| feature_highlight(&c.subject)),
        FEATURE_SAMPLE,
    )
}

/// Categories present among the sampled commits, in classification order
#[must_use]
pub fn present_categories(meaningful: &[&Commit]) -> Vec<Category> {
    let seen: HashSet<Category> = meaningful
        .iter()
        .take(CATEGORY_SAMPLE)
        .map(|c| classify(&c.subject))
        .collect();
    Category::ALL
        .into_iter()
        .filter(|category| seen.contains(category))
        .collect()
}

/// End-user outcome sentences for the present categories
#[must_use]
pub fn build_end_user_outcomes(categories: &[Category]) -> Vec<String> {
    let selected = categories.iter().map(|&c| end_user_outcome(c));
    dedup_capped(
        selected.chain(BASELINE_OUTCOMES).map(str::to_string),
        LIST_CAP,
    )
}

/// Business relevance sentences for the present categories
#[must_use]
pub fn build_business_relevance(categories: &[Category]) -> Vec<String> {
    let selected = categories.iter().map(|&c| business_relevance(c));
    dedup_capped(
        selected.chain(BASELINE_RELEVANCE).map(str::to_string),
        LIST_CAP,
    )
}

fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// One-sentence summary naming the dominant kinds of work
#[must_use]
pub fn build_summary(role: &str, company: &str, time_label: &str, meaningful: &[&Commit]) -> String {
    if meaningful.is_empty() {
        return format!(
            "As {role} at {company}, no meaningful commits were detected {time_label}; \
             widen the time range or adjust the author filter."
        );
    }

    let mut tally = Tally::new();
    for commit in meaningful.iter().take(CATEGORY_SAMPLE) {
        tally.add(classify(&commit.subject).label());
    }
    let top: Vec<String> = tally.most_common(3).into_iter().map(|(l, _)| l).collect();
    let top: Vec<&str> = top.iter().map(String::as_str).collect();

    format!(
        "As {role} at {company}, delivered {} meaningful {} {time_label}, \
         with emphasis on {}.",
        meaningful.len(),
        pluralize(meaningful.len() as u64, "change"),
        join_labels(&top),
    )
}

/// Build the narrative report from already-redacted commits
#[must_use]
pub fn build_report(ctx: &ReportContext, commits: &[Commit]) -> NarrativeReport {
    let meaningful = meaningful_commits(commits);
    let categories = present_categories(&meaningful);
    debug!(
        raw = commits.len(),
        meaningful = meaningful.len(),
        categories = ?categories,
        "classified commits"
    );

    NarrativeReport {
        role: ctx.role.clone(),
        company: ctx.company.clone(),
        time_range: TimeRangeReport::from(&ctx.range),
        summary: build_summary(&ctx.role, &ctx.company, &ctx.range.label(), &meaningful),
        feature_highlights: build_feature_highlights(&meaningful),
        end_user_outcomes: build_end_user_outcomes(&categories),
        business_relevance: build_business_relevance(&categories),
        source_mode: SOURCE_MODE.to_string(),
        confidentiality: Confidentiality::default(),
        guidance: guidance_for(commits.len(), meaningful.len())
            .or_else(|| Some(REVIEW_GUIDANCE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn commit(subject: &str) -> Commit {
        Commit {
            date: "2024-01-15".to_string(),
            subject: subject.to_string(),
            ..Default::default()
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            repo: "/secret/path".to_string(),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            author: "Test Author".to_string(),
            max_commits: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_conventional_prefix() {
        assert_eq!(strip_conventional_prefix("feat: add export"), "add export");
        assert_eq!(strip_conventional_prefix("fix(auth): login"), "login");
        assert_eq!(strip_conventional_prefix("feat!: breaking"), "breaking");
        assert_eq!(strip_conventional_prefix("no prefix here"), "no prefix here");
        assert_eq!(strip_conventional_prefix("feat:nospace"), "feat:nospace");
    }

    #[test]
    fn test_topic_tokens() {
        assert_eq!(topic_tokens("fix: resolve login timeout"), vec!["login", "timeout"]);
        assert_eq!(topic_tokens("feat: add export to CSV"), vec!["export", "csv"]);
        assert_eq!(
            topic_tokens("feat(ui): add dark mode toggle for settings page and profile"),
            vec!["dark", "mode", "toggle", "settings"]
        );
        assert_eq!(topic_tokens("fix: the bug bug"), vec!["bug"]);
        assert!(topic_tokens("fix: it").is_empty());
    }

    #[test]
    fn test_feature_highlight_templates() {
        assert_eq!(
            feature_highlight("fix: resolve login timeout"),
            "A reliability issue was resolved in login timeout."
        );
        assert_eq!(
            feature_highlight("feat: add export to CSV"),
            "An integration capability was delivered in export csv."
        );
        assert_eq!(feature_highlight("feat: add it"), "A new feature was delivered.");
    }

    #[test]
    fn test_feature_highlights_fallback() {
        let highlights = build_feature_highlights(&[]);
        assert_eq!(highlights.len(), 4);
        assert_eq!(highlights[0], FALLBACK_HIGHLIGHTS[0]);
    }

    #[test]
    fn test_feature_highlights_limited_to_six() {
        let commits: Vec<Commit> = (0..10)
            .map(|i| commit(&format!("feat: widget{}", "x".repeat(i))))
            .collect();
        let refs: Vec<&Commit> = commits.iter().collect();
        assert_eq!(build_feature_highlights(&refs).len(), FEATURE_SAMPLE);
    }

    #[test]
    fn test_present_categories_in_fixed_order() {
        let commits = [
            commit("refactor parser"),
            commit("fix crash"),
            commit("feat: onboarding"),
        ];
        let refs: Vec<&Commit> = commits.iter().collect();
        assert_eq!(
            present_categories(&refs),
            vec![
                Category::IssueResolution,
                Category::Maintainability,
                Category::FeatureDelivery,
            ]
        );
    }

    #[test]
    fn test_present_categories_only_samples_first_twelve() {
        let mut commits: Vec<Commit> = (0..12).map(|_| commit("feat: widget")).collect();
        commits.push(commit("fix: crash"));
        let refs: Vec<&Commit> = commits.iter().collect();
        assert_eq!(present_categories(&refs), vec![Category::FeatureDelivery]);
    }

    #[test]
    fn test_outcomes_include_baseline_and_cap() {
        let outcomes = build_end_user_outcomes(&[Category::Performance]);
        assert_eq!(
            outcomes,
            vec![
                end_user_outcome(Category::Performance).to_string(),
                BASELINE_OUTCOMES[0].to_string(),
                BASELINE_OUTCOMES[1].to_string(),
            ]
        );

        let all = build_business_relevance(&Category::ALL);
        assert_eq!(all.len(), LIST_CAP);
        assert_eq!(all[0], business_relevance(Category::IssueResolution));

        let none = build_business_relevance(&[]);
        assert_eq!(none.len(), BASELINE_RELEVANCE.len());
    }

    #[test]
    fn test_dedup_capped() {
        let items = ["a", "b", "a", "c", "b", "d", "e"].map(String::from);
        assert_eq!(dedup_capped(items, 4), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_summary() {
        let commits = [commit("fix: a"), commit("fix: b"), commit("feat: export")];
        let refs: Vec<&Commit> = commits.iter().collect();
        assert_eq!(
            build_summary("Engineer", "Acme", "from 2024-01-01 onward", &refs),
            "As Engineer at Acme, delivered 3 meaningful changes from 2024-01-01 onward, \
             with emphasis on issue resolution and integrations."
        );
        assert!(build_summary("Engineer", "Acme", "x", &[]).contains("no meaningful commits"));
    }

    #[test]
    fn test_join_labels() {
        assert_eq!(join_labels(&[]), "");
        assert_eq!(join_labels(&["a"]), "a");
        assert_eq!(join_labels(&["a", "b"]), "a and b");
        assert_eq!(join_labels(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn test_build_report_scenario() {
        let commits = vec![
            commit("chore: bump"),
            commit("fix: resolve login timeout"),
            commit("feat: add export to CSV"),
        ];
        let report = build_report(&context(), &commits);

        assert_eq!(
            report.feature_highlights,
            vec![
                "A reliability issue was resolved in login timeout.",
                "An integration capability was delivered in export csv.",
            ]
        );
        assert_eq!(report.end_user_outcomes.len(), 4);
        assert_eq!(report.source_mode, SOURCE_MODE);
        assert_eq!(report.confidentiality, Confidentiality::default());
        assert_eq!(report.guidance.as_deref(), Some(REVIEW_GUIDANCE));

        let json = serde_json::to_string(&report).expect("serialize");
        assert!(!json.contains("/secret/path"));
        assert!(!json.contains("Test Author"));
    }

    #[test]
    fn test_build_report_without_commits() {
        let report = build_report(&context(), &[]);
        assert_eq!(report.feature_highlights.len(), FALLBACK_HIGHLIGHTS.len());
        assert!(
            report
                .guidance
                .as_deref()
                .is_some_and(|g| g.starts_with("No commits found"))
        );
        assert_eq!(report.end_user_outcomes, BASELINE_OUTCOMES.map(String::from).to_vec());
    }

    #[test]
    fn test_build_report_all_low_signal() {
        let commits = vec![commit("chore: a"), commit("docs: b")];
        let report = build_report(&context(), &commits);
        assert!(
            report
                .guidance
                .as_deref()
                .is_some_and(|g| g.contains("low-signal"))
        );
        assert_eq!(report.feature_highlights.len(), FALLBACK_HIGHLIGHTS.len());
    }
}
