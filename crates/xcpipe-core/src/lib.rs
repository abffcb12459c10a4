//! xcpipe core - xcodebuild orchestration for CI
//!
//! Provides the process runner that:
//! - Spawns `xcodebuild` with caller-supplied arguments
//! - Optionally pipes its live output through a log formatter
//!   (`xcpretty` or `xcbeautify`)
//! - Waits for both processes and reduces them to one pass/fail result

pub mod error;
pub mod formatter;
pub mod outcome;
pub mod runner;
pub mod telemetry;

// Re-export key types
pub use error::{Result, RunnerError};
pub use formatter::FormatterProfile;
pub use outcome::ProcessOutcome;
pub use runner::{run, XcodebuildRunner};
pub use telemetry::init_tracing;
