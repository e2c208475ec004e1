#![no_main]

//! Fuzz target for report building from arbitrary `git log` output
//!
//! Whatever the parser produces, both report builders and the Markdown
//! renderer must complete without panicking.

use libfuzzer_sys::fuzz_target;

use gitvita::report::{Report, ReportContext};
use gitvita::{classify::classify, narrative, signal::is_low_signal, stats};
use gitvita_git::{LogFormat, parse_log};

fuzz_target!(|raw: &str| {
    let ctx = ReportContext::default();
    for format in [LogFormat::WithStats, LogFormat::MessagesOnly] {
        let commits = parse_log(raw, format);
        for commit in &commits {
            let _ = is_low_signal(&commit.subject);
            let _ = classify(&commit.subject);
        }
        let _ = Report::Stats(stats::build_report(&ctx, &commits)).to_markdown();
        let _ = Report::Narrative(narrative::build_report(&ctx, &commits)).to_markdown();
    }
});
