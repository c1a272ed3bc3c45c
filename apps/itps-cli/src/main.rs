//! `itps` binary entry point.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    itps_cli::run()
}
