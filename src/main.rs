mod app;
mod config;
mod dashboard;
mod logging;
mod metrics;
mod rates;
mod tui;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use config::Config;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "kawaii-monitor",
    version,
    about = "A cute auto-refreshing terminal system monitor"
)]
struct Cli {}

fn main() -> ExitCode {
    // No options; parsing still answers --help and --version.
    Cli::parse();
    let log_file = logging::init();
    let config = Config::default();
    info!(log_file = ?log_file, ?config, "starting kawaii-monitor");

    tui::install_panic_hook();

    match run(config) {
        Ok(exit) => {
            info!(?exit, "bye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // The terminal guard has been dropped by now, so this lands on a
            // normal screen.
            error!(error = %format!("{:#}", e), "monitor stopped");
            eprintln!("kawaii-monitor: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> anyhow::Result<app::Exit> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(app::run(config))
}
