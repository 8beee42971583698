//! Diagnostics for the CLI. Everything goes to stderr without timestamps;
//! stdout carries only the verdict.

use crate::config::AppConfig;
use tracing_subscriber::filter::LevelFilter;

/// Installs the process-wide subscriber at the configured level. Later
/// calls keep the first subscriber.
pub fn init_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(config.log_level))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
