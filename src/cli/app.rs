//! Main app runner for the relay service

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use crate::application::RelayService;
use crate::domain::config::AppConfig;
use crate::infrastructure::server::{build_router, serve};
use crate::infrastructure::{FsAudioStore, HttpProcessingClient, TomlConfigStore};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Merge the config file (if any) under the CLI-provided values
pub async fn load_merged_config(cli_config: AppConfig, config_path: Option<PathBuf>) -> AppConfig {
    let store = match config_path {
        Some(path) => TomlConfigStore::with_path(path),
        None => TomlConfigStore::new(),
    };

    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, path = %store.path().display(), "ignoring config file");
            AppConfig::empty()
        }
    };

    file_config.merge(cli_config)
}

/// Wire up the adapters and run the relay service until shutdown
pub async fn run_server(config: AppConfig) -> ExitCode {
    let listen_addr = config.listen_addr_or_default();

    let listener = match tokio::net::TcpListener::bind(listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", listen_addr, e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let store = match FsAudioStore::create(config.storage_dir_or_default()).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to prepare storage directory: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let backend = HttpProcessingClient::new(
        config.processing_url_or_default(),
        Duration::from_secs(config.processing_timeout_or_default()),
    );

    let relay = Arc::new(RelayService::new(store, backend));
    let app = build_router(relay, config.allowed_origin_or_default());

    tracing::info!(
        addr = %listen_addr,
        storage = %config.storage_dir_or_default(),
        processing = %config.processing_url_or_default(),
        "relay service listening"
    );

    match serve(listener, app).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
