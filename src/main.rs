mod argsets;
mod command;
mod config;
mod constants;
mod helpers;
mod interfaces;

use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;

use crate::constants::{defaults, envvars};

fn main() -> ExitCode {
    let _ = dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    let run_args = argsets::RunArgs {
        interactive: args.contains("--interactive"),
    };

    let unexpected = args.finish();
    if !unexpected.is_empty() {
        eprintln!("Error: unexpected arguments: {unexpected:?}; only --interactive is accepted");
        return ExitCode::FAILURE;
    }

    command::run(run_args)
}
