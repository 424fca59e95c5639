use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Maps `-v` repetitions to a default filter. `RUST_LOG` overrides it.
#[must_use]
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,portfolio_nav=info",
        1 => "info,portfolio_nav=debug",
        2 => "debug,portfolio_nav=trace",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber. Does nothing when `quiet`.
pub fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
