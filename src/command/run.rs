use std::process::ExitCode;

use crate::argsets::RunArgs;
use crate::config::Config;
use crate::constants::envvars;
use crate::helpers;
use crate::interfaces::worker;

/// Load the configuration, validate credentials, print the summary banner
/// and hand off to the worker process, mirroring its exit code.
pub fn run(args: RunArgs) -> ExitCode {
    let config = Config::from_env();

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        eprintln!("Set environment variables:");
        eprintln!("  {}=your_access_id", envvars::TUYA_API_KEY);
        eprintln!("  {}=your_access_secret", envvars::TUYA_API_SECRET);
        if args.interactive {
            helpers::pause();
        }
        return ExitCode::FAILURE;
    }

    config.print_summary();

    let code = match worker::launch(&config) {
        Ok(status) => match status.code() {
            Some(code) => u8::try_from(code).unwrap_or(1),
            // Killed by a signal; there is no code to mirror.
            None => {
                log::warn!("Worker terminated by signal");
                1
            }
        },
        Err(e) => {
            log::error!("{e:#}");
            1
        }
    };

    if args.interactive {
        helpers::pause();
    }
    ExitCode::from(code)
}
