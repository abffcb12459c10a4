//! Terminal process status reduced to a single comparable value.

use std::fmt;
use std::process::ExitStatus;

/// Terminal result of a child process.
///
/// Exactly one outcome is produced per process, and it is consumed once:
/// compared against the success code to decide pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Process exited on its own with a code.
    Exited(i32),

    /// Process was terminated by a signal (unix only).
    Signaled(i32),

    /// Terminal state could not be determined.
    Unknown,
}

impl ProcessOutcome {
    /// Reduce a wait status to an outcome.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ProcessOutcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ProcessOutcome::Signaled(signal);
            }
        }
        ProcessOutcome::Unknown
    }

    /// Whether this outcome counts as success (exit code 0).
    ///
    /// Signal terminations and unknown states never succeed.
    pub fn success(&self) -> bool {
        matches!(self, ProcessOutcome::Exited(0))
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessOutcome::Exited(code) => write!(f, "{}", code),
            ProcessOutcome::Signaled(signal) => match signal_name(*signal) {
                Some(name) => f.write_str(name),
                None => write!(f, "signal {}", signal),
            },
            ProcessOutcome::Unknown => f.write_str("unknown"),
        }
    }
}

/// Conventional names for the signals a build is realistically killed by.
fn signal_name(signal: i32) -> Option<&'static str> {
    let name = match signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        14 => "SIGALRM",
        15 => "SIGTERM",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_exit_zero() {
        assert!(ProcessOutcome::Exited(0).success());
        assert!(!ProcessOutcome::Exited(1).success());
        assert!(!ProcessOutcome::Exited(-1).success());
        assert!(!ProcessOutcome::Signaled(15).success());
        assert!(!ProcessOutcome::Unknown.success());
    }

    #[test]
    fn test_display_exit_codes_as_bare_integers() {
        assert_eq!(ProcessOutcome::Exited(0).to_string(), "0");
        assert_eq!(ProcessOutcome::Exited(65).to_string(), "65");
    }

    #[test]
    fn test_display_signals_by_name() {
        assert_eq!(ProcessOutcome::Signaled(9).to_string(), "SIGKILL");
        assert_eq!(ProcessOutcome::Signaled(15).to_string(), "SIGTERM");
    }

    #[test]
    fn test_display_unnamed_signal_falls_back_to_number() {
        assert_eq!(ProcessOutcome::Signaled(64).to_string(), "signal 64");
    }

    #[test]
    fn test_display_unknown() {
        assert_eq!(ProcessOutcome::Unknown.to_string(), "unknown");
    }

    #[cfg(unix)]
    #[test]
    fn test_from_status_extracts_exit_code() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: exit code lives in the high byte.
        let clean = ExitStatus::from_raw(0);
        assert_eq!(ProcessOutcome::from_status(clean), ProcessOutcome::Exited(0));

        let failed = ExitStatus::from_raw(2 << 8);
        assert_eq!(ProcessOutcome::from_status(failed), ProcessOutcome::Exited(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_status_extracts_signal() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status: a killing signal lives in the low seven bits.
        let killed = ExitStatus::from_raw(15);
        assert_eq!(
            ProcessOutcome::from_status(killed),
            ProcessOutcome::Signaled(15)
        );
        assert!(!ProcessOutcome::from_status(killed).success());
    }
}
