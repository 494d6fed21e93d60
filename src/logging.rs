use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "KAWAII_MONITOR_LOG";
const LOG_FILE: &str = "kawaii-monitor.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("kawaii-monitor"))
}

/// Send `tracing` output to a file; the terminal belongs to the dashboard.
/// Returns the log file path, or `None` if logging could not be set up.
pub fn init() -> Option<PathBuf> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&dir)
        .ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .ok()?;

    Some(dir.join(LOG_FILE))
}
