// Copyright (c) 2026 - present gitvita contributors
// SPDX-License-Identifier: MIT

//! gitvita library
//!
//! Turns a repository's local commit history into a draft professional
//! experience summary. The binary is a thin wrapper over [`pipeline::run`];
//! the modules are exported for integration tests and benchmarks.

pub mod classify;
pub mod config;
pub mod error;
pub mod narrative;
pub mod pipeline;
pub mod redact;
pub mod report;
pub mod signal;
pub mod stats;

pub use config::{Config, Mode, TimeRange};
pub use error::AppError;
pub use report::Report;
