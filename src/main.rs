mod app;
mod checks;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use std::io;

use clap::Parser;

use app::Controller;
use checks::{BoxedCheck, EnvironmentChecker, FileSystemProbe};
use cli::Cli;
use config::{Config, resolve_log_path};
use crate::core::Logger;
use error::AppError;
use utils::{ProcessEnv, Timezone, set_echo_log};

fn main() {
    let cli = Cli::parse();
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    set_echo_log(cli.debug);
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let interfaces = cli.interfaces(config)?;

    let home = dirs::home_dir();
    let log_path = resolve_log_path(cli.log_file.as_deref(), &ProcessEnv, home.as_deref())?;
    let logger = Logger::open(&log_path, timezone)?;
    eprintln!("Logging to: {}", logger.path().display());

    let checks: Vec<BoxedCheck> = vec![
        Box::new(EnvironmentChecker::new(interfaces)),
        Box::new(FileSystemProbe::new(home)),
    ];
    let mut controller = Controller::new(logger, checks, cli.output_mode(), timezone);

    let stdout = io::stdout();
    let summary = if cli.once {
        controller.run_once(stdout.lock())?
    } else {
        controller.run(io::stdin().lock(), stdout.lock())?
    };

    if cli.debug {
        eprintln!(
            "Session ended after {} check run(s), {} invalid input(s)",
            summary.check_runs, summary.invalid_inputs
        );
    }
    Ok(())
}
