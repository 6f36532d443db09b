//! EchoAudit relay service entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use echo_audit::cli::{
    app::{load_merged_config, run_server},
    args::Cli,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("echo_audit=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let cli_config = cli.to_config();
    let config = load_merged_config(cli_config, cli.config).await;

    run_server(config).await
}
