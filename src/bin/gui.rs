use std::process::ExitCode;

use portfolio_nav::logging::init_tracing;
use portfolio_nav::{PixelsPresenterFactory, PortfolioConfig, RunGuiCommand};

fn main() -> ExitCode {
    init_tracing(0, false);

    let config_path = std::env::var_os("PORTFOLIO_CONFIG").map(std::path::PathBuf::from);
    let config = match PortfolioConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
