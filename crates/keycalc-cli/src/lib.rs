//! keycalc CLI library
//!
//! Command-line front end for the keycalc engine: evaluate key sequences,
//! run an interactive session, print the keypad or the configuration.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, ConfigFormat, EvalArgs, ReplArgs};
pub use config::{
    load_engine_config, parse_engine_config, CliConfig, ColorChoice, Verbosity,
};
pub use error::{CliError, CliResult};
pub use runner::{ReplOptions, ReplSummary};
