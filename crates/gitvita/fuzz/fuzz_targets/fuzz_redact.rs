#![no_main]

//! Fuzz target for commit text redaction
//!
//! Redaction must never panic and must be idempotent.

use libfuzzer_sys::fuzz_target;

use gitvita::redact::redact;

fuzz_target!(|text: &str| {
    let once = redact(text);
    assert_eq!(redact(&once), once);
});
