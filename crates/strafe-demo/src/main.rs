//! Headless demo that runs the movement controller through a few scripted
//! scenarios and logs what happened.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p strafe-demo -- --scenario avoid --log-level debug`.

mod rig;
mod scenarios;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use strafe_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".strafe"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    strafe_log::init_logging(Some(&log_dir), config.debug.log_to_file, Some(&config));

    if let Err(e) = config.validate() {
        error!("Refusing to run: {e}");
        return ExitCode::FAILURE;
    }

    let ticks = args.ticks.unwrap_or(config.simulation.tick_rate_hz * 2);
    info!(
        "Running {:?} for {} ticks at {} Hz",
        args.scenario, ticks, config.simulation.tick_rate_hz
    );

    let mut failed = false;
    for scenario in args.scenario.expand() {
        match scenarios::run(scenario, &config, ticks) {
            Ok(summary) => summary.log(),
            Err(e) => {
                error!("Scenario {scenario:?} failed: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
