//! File logging
//!
//! The terminal owns stdout, so log output goes to a file. Records emitted
//! through the `log` facade (the client crate) are bridged into tracing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "storefront-tui.log";

/// `<data_local_dir>/storefront-tui/storefront-tui.log`, or the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("storefront-tui"))
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE)
}

/// Install the global subscriber writing to `path`.
///
/// The returned guard flushes buffered records when dropped; keep it alive
/// until exit.
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| LOG_FILE.into(), |name| name.to_os_string());
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}
