mod app;
mod effects;
mod input;
mod render;

use std::process::ExitCode;

use dashboard_client::BackendConfig;
use dashboard_logging::{dash_error, LogDestination};

fn main() -> ExitCode {
    dashboard_logging::initialize(LogDestination::Terminal);

    // The backend URL is required configuration; there is no placeholder
    // fallback to a non-functional host.
    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            dash_error!("{err}");
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
