use std::env;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::constants::{defaults, envvars};

fn worker_cmd() -> String {
    env::var(envvars::WORKER_CMD).unwrap_or_else(|_| defaults::WORKER_CMD.to_string())
}

/// Spawn the bridge worker with the full configuration serialized into its
/// environment and block until it terminates. Signals are not intercepted;
/// an operator interrupt reaches the worker through the shared process
/// group and surfaces here as its exit status.
pub fn launch(config: &Config) -> Result<ExitStatus> {
    let cmd = worker_cmd();
    log::info!("Starting worker: {cmd}");

    let status = Command::new(&cmd)
        .envs(config.to_env())
        .status()
        .with_context(|| format!("could not start worker '{cmd}'"))?;

    log::info!("Worker exited with {status}");
    Ok(status)
}
