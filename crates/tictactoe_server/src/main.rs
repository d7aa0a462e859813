//! Tic-tac-toe server binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_server::{GameService, ServerConfig, router};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = ServerConfig::load(cli.config.as_deref())?.apply(cli.overrides());
    run_http_server(config).await
}

/// Run the HTTP game server until Ctrl+C.
#[instrument(skip_all, fields(addr = %config.bind_addr()))]
async fn run_http_server(config: ServerConfig) -> Result<()> {
    info!("Starting tic-tac-toe server");

    let app = router(GameService::new(), config.static_dir());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        static_dir = %config.static_dir().display(),
        "Server ready at http://{}/",
        config.bind_addr()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down server");
        })
        .await?;

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_server=debug")),
        )
        .init();
}
