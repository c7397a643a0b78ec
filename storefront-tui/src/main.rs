//! Storefront item detail view for the terminal
//!
//! ```text
//! Event ──▶ Message ──▶ Update ──▶ Model ──▶ View
//!                ▲         │
//!                │         ▼ Command
//!                └───── Backend ──▶ storefront-client (catalog, cart)
//! ```

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use storefront_client::StorefrontClient;

use backend::{Backend, ConfigService, LocalConfigService};
use message::{AppMessage, DetailMessage};
use model::{App, Location};
use util::{default_log_path, init_logging, init_terminal, install_panic_hook, restore_terminal};

/// Terminal item detail view for the Arian storefront
#[derive(Debug, Parser)]
#[command(name = "storefront-tui", version, about)]
struct Cli {
    /// Location to open: a URL or a query string such as `?code=ABC123`
    location: Option<String>,

    /// Config file (default: <config dir>/storefront-tui/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Interface language: en or fa
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Log file (default: <data dir>/storefront-tui/storefront-tui.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let _log_guard = init_logging(&log_path)?;
    tracing::info!("starting storefront-tui {}", env!("CARGO_PKG_VERSION"));

    let config_service = LocalConfigService::new(cli.config.clone());
    if let Some(path) = config_service.path() {
        tracing::debug!("config file: {}", path.display());
    }
    let mut config = config_service
        .load()
        .context("failed to load configuration")?;
    if let Some(code) = &cli.language {
        config.language = i18n::Language::from_code(code)
            .with_context(|| format!("unsupported language: {code}"))?;
    }
    i18n::set_language(config.language);
    tracing::info!(
        "language: {} ({})",
        config.language.display_name(),
        config.language.code()
    );
    view::theme::set_theme(config.theme);

    let client = Arc::new(
        StorefrontClient::new(config.endpoints.clone(), config.request_timeout)
            .context("failed to create storefront client")?,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let (backend, mut results) = Backend::new(runtime.handle().clone(), client.clone(), client);

    let mut app = App::new(config.endpoints).with_toast_duration(config.toast_duration);
    let initial = AppMessage::Detail(DetailMessage::Navigate(Location::parse(
        cli.location.as_deref().unwrap_or_default(),
    )));

    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, &mut results, initial);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {e:#}");
    } else {
        tracing::info!("bye");
    }
    result
}
