mod launcher;

use crate::launcher::{report, Launcher};
use clap::command;
use clap::error::ErrorKind;
use common::configuration::launcher_config::LauncherConfig;
use common::configuration::load_launcher_config;
use common::errors::launch_error::LaunchError;
use common::logging::{default_env_filter, init_logging};
use std::process::ExitCode;

static PREFIX: &str = "LAUNCHER";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // No options besides --help and --version; everything else is deploy-time config.
    if let Err(e) = command!().try_get_matches() {
        let _ = e.print();
        return match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::from(1),
        };
    }

    let settings = match setup_launcher_config() {
        Ok(settings) => settings,
        Err(e) => return fail(&e),
    };

    let env_log = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| default_env_filter(&settings.logging_level));
    let (non_blocking_stderr, _guard) = tracing_appender::non_blocking(std::io::stderr());
    init_logging(&env_log, non_blocking_stderr);

    let launcher = Launcher::new(settings.to_request());
    match launcher.launch().await {
        Ok(handle) => {
            println!("{}", report(&handle));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn setup_launcher_config() -> Result<LauncherConfig, LaunchError> {
    let default_config = include_str!("../../configs/default_config.toml");
    Ok(load_launcher_config(default_config, PREFIX)?)
}

fn fail(e: &LaunchError) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::from(e.exit_code())
}
