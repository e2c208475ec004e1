// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! End-to-end run: validate, read history, filter and build the report
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use gitvita::config::Config;
//! use gitvita::pipeline;
//!
//! let config = Config::parse_from(["gitvita", "--role", "Engineer", "--company", "Acme"]);
//! let report = pipeline::run(&config).expect("run");
//! println!("{}", report.to_json().expect("json"));
//! ```

use gitvita_git::{Commit, GitRepo, LogOptions, parse_log};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::narrative;
use crate::redact::redact_commit;
use crate::report::{Report, ReportContext, write_markdown};
use crate::signal::meaningful_commits;
use crate::stats;

/// Read the repository history described by `config` and build its report
///
/// When an output path is configured the Markdown draft is written before
/// returning. Nothing is returned (and nothing written) on error.
///
/// # Errors
///
/// Returns an [`AppError`] if validation, repository resolution, author
/// detection, the `git log` call or the Markdown write fails.
pub fn run(config: &Config) -> Result<Report, AppError> {
    let range = config.validate()?;
    let repo = GitRepo::open(config.repo_path()).map_err(AppError::RepositoryResolution)?;
    info!(path = %repo.path().display(), mode = ?config.mode, "Reading git history");

    let author = match config.author_filter() {
        Some(author) => author.to_string(),
        None => repo.detect_author().map_err(AppError::AuthorDetection)?,
    };
    debug!(%author, "Using author filter");

    let format = config.mode.log_format();
    let mut options = LogOptions::latest(config.max_commits())
        .format(format)
        .author(&author);
    if let Some(since) = range.since {
        options = options.since(since);
    }
    if let Some(until) = range.until {
        options = options.until(until);
    }

    let raw = repo
        .fetch_log(&options)
        .map_err(AppError::ExternalCommand)?;
    let mut commits = parse_log(&raw, format);
    if config.mode.redacts() {
        commits = commits.into_iter().map(redact_commit).collect::<Vec<Commit>>();
    }
    info!(commits = commits.len(), "Parsed git history");
    if commits.is_empty() {
        warn!(%author, range = %range.label(), "No commits matched");
    } else if meaningful_commits(&commits).is_empty() {
        warn!(commits = commits.len(), "Every commit was filtered as low-signal");
    }

    let ctx = ReportContext {
        repo: repo.path().display().to_string(),
        role: config.role.clone(),
        company: config.company.clone(),
        author,
        range,
        max_commits: config.max_commits(),
    };
    let report = build(config, &ctx, &commits);

    if let Some(path) = config.out_path() {
        write_markdown(&path, &report).map_err(|source| AppError::Output {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Wrote Markdown draft");
    }

    Ok(report)
}

/// Build the report for the configured mode from already-parsed commits
#[must_use]
pub fn build(config: &Config, ctx: &ReportContext, commits: &[Commit]) -> Report {
    if config.mode.redacts() {
        Report::Narrative(narrative::build_report(ctx, commits))
    } else {
        Report::Stats(stats::build_report(ctx, commits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Mode};
    use similar_asserts::assert_eq;

    fn config() -> Config {
        Config {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_runs_before_repository_lookup() {
        let config = Config {
            repo: Some("/definitely/not/a/real/path".into()),
            max_commits: 0,
            ..config()
        };
        let err = run(&config).expect_err("should fail");
        assert!(matches!(
            err,
            AppError::InputValidation(ConfigError::MaxCommits(0))
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_repository() {
        let config = Config {
            repo: Some("/definitely/not/a/real/path".into()),
            ..config()
        };
        let err = run(&config).expect_err("should fail");
        assert!(matches!(err, AppError::RepositoryResolution(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_build_selects_report_kind() {
        let commits = vec![Commit {
            subject: "feat: add export".to_string(),
            ..Default::default()
        }];
        let ctx = ReportContext::default();

        let stats = build(&config(), &ctx, &commits);
        assert!(matches!(stats, Report::Stats(_)));

        let narrative_config = Config {
            mode: Mode::Narrative,
            ..config()
        };
        let narrative = build(&narrative_config, &ctx, &commits);
        assert!(matches!(narrative, Report::Narrative(_)));
    }
}
