//! Configuration system for Strafe.
//!
//! Loads and saves settings as RON files from the platform config directory,
//! with command-line overrides for the demo runner.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Scenario};
pub use config::{Config, DebugConfig, SimulationConfig, default_config_dir};
pub use error::ConfigError;
