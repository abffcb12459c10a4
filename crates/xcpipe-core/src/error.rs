//! Error types for the xcpipe runner.

use crate::outcome::ProcessOutcome;
use thiserror::Error;

/// Errors produced while orchestrating the build tool and formatter.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// A process could not be created (missing executable, permissions, ...)
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Underlying platform error.
        #[source]
        source: std::io::Error,
    },

    /// The pipe carrying the build tool's stdout into the formatter's stdin
    /// could not be prepared.
    #[error("failed to pipe `{program}` output: {source}")]
    Pipe {
        /// Build tool whose output was being piped.
        program: String,
        /// Underlying platform error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting on a child process failed at the OS level.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The build tool terminated with a non-success status.
    #[error("`{command}` aborted ({status})")]
    Aborted {
        /// Full command line that was run (program + space-joined args).
        command: String,
        /// Terminal status of the build tool.
        status: ProcessOutcome,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aborted_display_names_command_and_status() {
        let err = RunnerError::Aborted {
            command: "xcodebuild test".to_string(),
            status: ProcessOutcome::Exited(1),
        };
        assert_eq!(err.to_string(), "`xcodebuild test` aborted (1)");
    }

    #[test]
    fn test_aborted_display_bare_command() {
        let err = RunnerError::Aborted {
            command: "xcodebuild".to_string(),
            status: ProcessOutcome::Exited(1),
        };
        assert_eq!(err.to_string(), "`xcodebuild` aborted (1)");
    }

    #[test]
    fn test_aborted_display_with_signal() {
        let err = RunnerError::Aborted {
            command: "xcodebuild build".to_string(),
            status: ProcessOutcome::Signaled(15),
        };
        assert_eq!(err.to_string(), "`xcodebuild build` aborted (SIGTERM)");
    }

    #[test]
    fn test_launch_display_carries_platform_error() {
        let err = RunnerError::Launch {
            program: "xcpretty".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("xcpretty"));
        assert!(msg.contains("no such file"));
    }
}
