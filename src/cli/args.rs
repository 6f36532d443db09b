//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

use crate::domain::config::AppConfig;

/// EchoAudit - audio relay service with task extraction
#[derive(Parser, Debug)]
#[command(name = "echo-audit")]
#[command(version)]
#[command(about = "Relay recorded audio to a processing service and track extracted tasks")]
#[command(long_about = None)]
pub struct Cli {
    /// Address to listen on (e.g., 127.0.0.1:3001)
    #[arg(short, long, value_name = "ADDR", env = "ECHO_AUDIT_LISTEN")]
    pub listen: Option<String>,

    /// Directory for persisted recordings
    #[arg(short, long, value_name = "DIR", env = "ECHO_AUDIT_STORAGE_DIR")]
    pub storage_dir: Option<String>,

    /// Base URL of the processing service
    #[arg(short, long, value_name = "URL", env = "ECHO_AUDIT_PROCESSING_URL")]
    pub processing_url: Option<String>,

    /// Bound on one processing call, in seconds
    #[arg(long, value_name = "SECS")]
    pub processing_timeout: Option<u64>,

    /// Allowed CORS origin for the upload endpoint ("*" for any)
    #[arg(long, value_name = "ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Convert the parsed arguments into a partial config for merging
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            listen_addr: self.listen.clone(),
            storage_dir: self.storage_dir.clone(),
            processing_url: self.processing_url.clone(),
            processing_timeout_secs: self.processing_timeout,
            allowed_origin: self.allowed_origin.clone(),
        }
    }
}
