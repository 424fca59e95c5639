//! portfolio - headless portfolio navigation.
//!
//! Replays navigation tours against the bundled (or a custom) portfolio and
//! lists its sections, projects and skills.

use std::process::ExitCode;

use clap::Parser;

use portfolio_nav::input::cli::{Cli, commands};
use portfolio_nav::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match commands::run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
