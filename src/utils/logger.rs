use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber
///
/// With a `log_dir`, logs go to a timestamped file inside it (the directory
/// is created if needed); otherwise they go to stderr so stdout only carries
/// the final confirmation. Verbosity comes from `RUST_LOG`.
pub fn init_logger(log_dir: Option<&Path>) -> Result<()> {
    match log_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }

            // Create log file with timestamp
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = dir.join(format!("subfilter_{}.log", timestamp));

            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter())
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(fs::File::create(&log_file)?))
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            info!("Logger initialized, writing to {}", log_file.display());
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            info!("Logger initialized");
        }
    }

    Ok(())
}
