//! xcpipe - run `xcodebuild` with formatted output for CI logs.
//!
//! The CI action invokes this binary with the xcodebuild argument list and
//! a verbosity selector:
//!
//! ```text
//! xcpipe --verbosity xcbeautify test -scheme App
//! ```
//!
//! Exits non-zero when the build fails, so the surrounding job fails
//! with it.

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "xcpipe")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run xcodebuild with formatted CI output", long_about = None)]
struct Cli {
    /// Output formatter: "xcpretty", "xcbeautify", or anything else for
    /// untouched passthrough
    #[arg(long, default_value = "", env = "XCPIPE_VERBOSITY")]
    verbosity: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,

    /// Arguments passed verbatim to xcodebuild
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    xcpipe_core::init_tracing(cli.json, cli.verbose);

    xcpipe_core::run(&cli.args, &cli.verbosity).await?;

    Ok(())
}
