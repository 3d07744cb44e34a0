use std::process::ExitCode;

use clap::Parser;

use simple_calculator::{Config, logger, run};

fn main() -> ExitCode {
    let config = Config::parse();
    logger::init(config.verbose);
    tracing::debug!(?config, "starting calculator");

    let outcome = run(&config);
    ExitCode::from(config.exit_code(&outcome))
}
