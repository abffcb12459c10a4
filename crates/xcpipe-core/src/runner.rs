//! Build-tool execution: spawn `xcodebuild`, optionally pipe its live
//! output through a formatter, and reduce both processes to one
//! pass/fail result.

use crate::error::{Result, RunnerError};
use crate::formatter::FormatterProfile;
use crate::outcome::ProcessOutcome;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Runs the build tool and the optional formatter pipeline.
pub struct XcodebuildRunner {
    /// Build tool executable (resolved via PATH).
    pub program: String,
}

impl XcodebuildRunner {
    /// Create a runner for a specific build tool executable.
    pub fn new(program: String) -> Self {
        XcodebuildRunner { program }
    }

    /// Run the build tool with `args`, formatting its output per `verbosity`.
    ///
    /// Selectors not present in the formatter mapping run the tool with
    /// full stream passthrough.
    pub async fn run(&self, args: &[String], verbosity: &str) -> Result<()> {
        let formatter = FormatterProfile::for_selector(verbosity);
        self.run_with_formatter(args, formatter.as_ref()).await
    }

    /// Run the build tool, piping its stdout into `formatter` when given.
    ///
    /// The build tool's terminal status alone decides pass/fail: the
    /// formatter is a presentation stage, so its own exit code is observed
    /// (both children are waited on, nothing is leaked) but never overrides
    /// the build status. On failure this logs the full command line at info
    /// and returns [`RunnerError::Aborted`].
    pub async fn run_with_formatter(
        &self,
        args: &[String],
        formatter: Option<&FormatterProfile>,
    ) -> Result<()> {
        // stdout is captured only when a formatter consumes it; stdin and
        // stderr always stay connected to the calling process.
        let stdout = if formatter.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        };

        let mut build = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunnerError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let formatter_child = match formatter {
            Some(profile) => Some(self.spawn_formatter(&mut build, profile)?),
            None => None,
        };

        let status = ProcessOutcome::from_status(build.wait().await?);

        if let Some(mut child) = formatter_child {
            let formatter_status = ProcessOutcome::from_status(child.wait().await?);
            debug!("formatter exited ({})", formatter_status);
        }

        if status.success() {
            return Ok(());
        }

        let command = full_command(&self.program, args);
        info!("exec: {}", command);
        Err(RunnerError::Aborted { command, status })
    }

    /// Spawn the formatter with its stdin wired directly to the build
    /// tool's captured stdout (a kernel pipe, no relay loop in between).
    fn spawn_formatter(&self, build: &mut Child, profile: &FormatterProfile) -> Result<Child> {
        let captured = build.stdout.take().ok_or_else(|| RunnerError::Pipe {
            program: self.program.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout was not captured",
            ),
        })?;
        let relay: Stdio = captured.try_into().map_err(|source| RunnerError::Pipe {
            program: self.program.clone(),
            source,
        })?;

        Command::new(&profile.program)
            .args(&profile.args)
            .stdin(relay)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| RunnerError::Launch {
                program: profile.program.clone(),
                source,
            })
    }
}

impl Default for XcodebuildRunner {
    /// Use `xcodebuild` from PATH.
    fn default() -> Self {
        XcodebuildRunner {
            program: "xcodebuild".to_string(),
        }
    }
}

/// Run `xcodebuild` with `args`, formatting its output per `verbosity`.
pub async fn run(args: &[String], verbosity: &str) -> Result<()> {
    XcodebuildRunner::default().run(args, verbosity).await
}

/// Program name plus space-joined arguments, as shown in logs and failures.
fn full_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        return program.to_string();
    }
    format!("{} {}", program, args.join(" "))
}
