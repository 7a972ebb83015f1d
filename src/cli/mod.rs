//! Command line interface for the runtime bundle check.
//!
//! Parses arguments, resolves the repository root and platform, runs the
//! sweep and prints the report to standard output.

mod args;

pub use args::{Args, RuntimeConfig};

use crate::bundle::BundleChecker;
use crate::error::Result;
use std::io::Write;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let Some(args) = Args::parse_args()? else {
        return Ok(0);
    };
    let stdout = std::io::stdout();
    run_with(&args, &mut stdout.lock())
}

/// Runs the check for already-parsed arguments, writing the report to `out`.
///
/// Returns the process exit code: 0 when every expected artifact exists,
/// 1 when any is missing.
pub fn run_with<W: Write>(args: &Args, out: &mut W) -> Result<i32> {
    args.validate()?;
    let config = RuntimeConfig::try_from(args)?;

    log::info!(
        "Checking {} runtime bundle under {}",
        config.platform(),
        config.root().display()
    );

    let report = BundleChecker::new(config.root(), config.platform()).run();
    report.write_to(out)?;
    out.flush()?;

    Ok(report.exit_code())
}
