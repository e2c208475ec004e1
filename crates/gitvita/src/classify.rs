//! Commit intent classification
//!
//! A subject is lowercased and tested for keyword substrings, group by
//! group; the first group with a hit wins.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a commit was about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Bug fixes and hotfixes
    IssueResolution,
    /// Speed, latency and caching work
    Performance,
    /// Security, privacy and access control
    Security,
    /// APIs, webhooks, sync, import and export
    Integration,
    /// Refactoring and cleanup
    Maintainability,
    /// Everything else
    FeatureDelivery,
}

/// Keyword groups in match order
const KEYWORD_GROUPS: [(Category, &[&str]); 5] = [
    (
        Category::IssueResolution,
        &["fix", "resolve", "repair", "bug", "hotfix"],
    ),
    (
        Category::Performance,
        &["optimiz", "perf", "latency", "speed", "cache"],
    ),
    (
        Category::Security,
        &["secure", "security", "privacy", "permission", "access"],
    ),
    (
        Category::Integration,
        &["integrat", "api", "webhook", "sync", "export", "import"],
    ),
    (
        Category::Maintainability,
        &["refactor", "cleanup", "simplify", "maintain"],
    ),
];

impl Category {
    /// All categories, in classification order
    pub const ALL: [Category; 6] = [
        Category::IssueResolution,
        Category::Performance,
        Category::Security,
        Category::Integration,
        Category::Maintainability,
        Category::FeatureDelivery,
    ];

    /// Stable identifier, e.g. `issue-resolution`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IssueResolution => "issue-resolution",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Integration => "integration",
            Self::Maintainability => "maintainability",
            Self::FeatureDelivery => "feature-delivery",
        }
    }

    /// Human-readable label for prose
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::IssueResolution => "issue resolution",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Integration => "integrations",
            Self::Maintainability => "maintainability",
            Self::FeatureDelivery => "feature delivery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a commit subject
#[must_use]
pub fn classify(subject: &str) -> Category {
    let lowered = subject.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map_or(Category::FeatureDelivery, |(category, _)| *category)
}
