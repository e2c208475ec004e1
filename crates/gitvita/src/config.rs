// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! Command-line configuration for gitvita
//!
//! This module provides the clap-derived [`Config`], its validation into a
//! [`TimeRange`], and path helpers for the repository and output file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use gitvita_git::LogFormat;

/// Default number of commits inspected per run
pub const DEFAULT_MAX_COMMITS: i64 = 400;

/// Date format accepted by `--since` and `--until`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// gitvita - draft professional experience summaries from local git history
#[derive(Parser, Debug, Clone)]
#[command(name = "gitvita")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository path (defaults to the current directory)
    #[arg(long, env = "GITVITA_REPO")]
    pub repo: Option<PathBuf>,

    /// Role title to write the summary for
    #[arg(long)]
    pub role: String,

    /// Company name to write the summary for
    #[arg(long)]
    pub company: String,

    /// Start date in YYYY-MM-DD
    #[arg(long)]
    pub since: Option<String>,

    /// End date in YYYY-MM-DD
    #[arg(long)]
    pub until: Option<String>,

    /// Git author filter; defaults to the local git user
    #[arg(long, env = "GITVITA_AUTHOR")]
    pub author: Option<String>,

    /// Optional Markdown output file path
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Maximum commits to inspect
    #[arg(long, default_value_t = DEFAULT_MAX_COMMITS, allow_negative_numbers = true)]
    pub max_commits: i64,

    /// Presentation mode for the result
    ///
    /// `stats` reports areas, technologies and line counts. `narrative`
    /// redacts commit text and writes outcome-oriented prose without hashes
    /// or author identity.
    #[arg(long, value_enum, default_value_t = Mode::Stats)]
    pub mode: Mode,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout only carries the JSON result.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: None,
            role: String::new(),
            company: String::new(),
            since: None,
            until: None,
            author: None,
            out: None,
            max_commits: DEFAULT_MAX_COMMITS,
            mode: Mode::Stats,
            verbose: false,
            quiet: false,
        }
    }
}

/// Presentation modes over the shared fetch-parse-filter pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Statistics: areas, technology signals, insertions and deletions
    #[default]
    Stats,
    /// Redacted narrative: feature highlights, outcomes, business relevance
    Narrative,
}

impl Mode {
    /// Log format requested from git in this mode
    #[must_use]
    pub fn log_format(self) -> LogFormat {
        match self {
            Self::Stats => LogFormat::WithStats,
            Self::Narrative => LogFormat::MessagesOnly,
        }
    }

    /// Whether commit text is redacted before use
    #[must_use]
    pub fn redacts(self) -> bool {
        matches!(self, Self::Narrative)
    }
}

/// A validated `--since`/`--until` window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRange {
    /// Inclusive start date
    pub since: Option<NaiveDate>,
    /// Inclusive end date
    pub until: Option<NaiveDate>,
}

impl TimeRange {
    /// `all-time` when unbounded, otherwise `bounded`
    #[must_use]
    pub fn mode(&self) -> &'static str {
        if self.since.is_none() && self.until.is_none() {
            "all-time"
        } else {
            "bounded"
        }
    }

    /// Prose fragment describing the window, e.g. `between 2024-01-01 and 2024-06-30`
    #[must_use]
    pub fn label(&self) -> String {
        match (self.since, self.until) {
            (None, None) => "across the repository's full history".to_string(),
            (Some(since), Some(until)) => format!(
                "between {} and {}",
                since.format(DATE_FORMAT),
                until.format(DATE_FORMAT)
            ),
            (Some(since), None) => format!("from {} onward", since.format(DATE_FORMAT)),
            (None, Some(until)) => format!("up to {}", until.format(DATE_FORMAT)),
        }
    }
}

impl Config {
    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        expand_home(self.repo.as_deref().unwrap_or(Path::new(".")))
    }

    /// Get the Markdown output path, if one was requested
    #[must_use]
    pub fn out_path(&self) -> Option<PathBuf> {
        self.out.as_deref().map(expand_home)
    }

    /// Explicit author filter, ignoring blank values
    #[must_use]
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// `--max-commits` as a count; only meaningful after [`Config::validate`]
    #[must_use]
    pub fn max_commits(&self) -> usize {
        usize::try_from(self.max_commits).unwrap_or(0)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `--max-commits` is not positive
    /// - `--since` or `--until` is not a `YYYY-MM-DD` date
    /// - `--since` is after `--until`
    pub fn validate(&self) -> Result<TimeRange, ConfigError> {
        if self.max_commits <= 0 {
            return Err(ConfigError::MaxCommits(self.max_commits));
        }

        let since = self
            .since
            .as_deref()
            .map(|value| parse_date(value, "since"))
            .transpose()?;
        let until = self
            .until
            .as_deref()
            .map(|value| parse_date(value, "until"))
            .transpose()?;

        if let (Some(since), Some(until)) = (since, until) {
            if since > until {
                return Err(ConfigError::InvalidRange {
                    since: since.format(DATE_FORMAT).to_string(),
                    until: until.format(DATE_FORMAT).to_string(),
                });
            }
        }

        Ok(TimeRange { since, until })
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Expand a leading `~` to the home directory
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--max-commits` was zero or negative
    #[error("--max-commits must be greater than 0")]
    MaxCommits(i64),

    /// A date flag did not parse as `YYYY-MM-DD`
    #[error("Invalid {field} date '{value}'. Expected format: YYYY-MM-DD")]
    InvalidDate {
        /// Which flag was invalid (`since` or `until`)
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// `--since` is after `--until`
    #[error("Invalid range: since ({since}) is after until ({until})")]
    InvalidRange {
        /// The start date
        since: String,
        /// The end date
        until: String,
    },
}
