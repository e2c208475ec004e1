#![no_main]

use gitvita_git::{LogFormat, parse_log, resolve_rename};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    for commit in parse_log(&raw, LogFormat::WithStats) {
        let _ = resolve_rename(&commit.subject);
    }
    let _ = parse_log(&raw, LogFormat::MessagesOnly);
});
