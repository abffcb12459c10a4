//! Formatter selection and configuration.

use serde::{Deserialize, Serialize};

/// Command for an output-formatting process: program plus fixed arguments.
///
/// The build tool's stdout is piped into this command's stdin; the
/// formatter's own stdout/stderr go straight to the CI log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatterProfile {
    /// Executable to spawn (resolved via PATH).
    pub program: String,

    /// Fixed argument list.
    pub args: Vec<String>,
}

impl FormatterProfile {
    /// Resolve a verbosity selector to its formatter command.
    ///
    /// Recognized selectors:
    /// - `"xcpretty"` runs `xcpretty`
    /// - `"xcbeautify"` runs `xcbeautify --renderer github-actions`
    ///
    /// Anything else (including the empty string) selects no formatter:
    /// the build tool's streams pass through untouched.
    pub fn for_selector(selector: &str) -> Option<Self> {
        match selector {
            "xcpretty" => Some(FormatterProfile {
                program: "xcpretty".to_string(),
                args: vec![],
            }),
            "xcbeautify" => Some(FormatterProfile {
                program: "xcbeautify".to_string(),
                args: vec!["--renderer".to_string(), "github-actions".to_string()],
            }),
            _ => None,
        }
    }

    /// Create a profile for an arbitrary formatter command.
    pub fn custom(program: String, args: Vec<String>) -> Self {
        FormatterProfile { program, args }
    }
}
