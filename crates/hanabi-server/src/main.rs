mod client;
mod config;
mod state;
mod table;

use anyhow::Context;
use config::ServerConfig;
use state::ServerState;
use tokio::net::TcpListener;
use tokio::select;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HANABI_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Server Version: {}", crate::VERSION);

    let config = ServerConfig::from_env()?;
    tracing::info!(
        players = config.options.player_count,
        deck = config.options.deck_size(),
        "Game options loaded"
    );
    let table = table::start_new_table(config.options.clone(), config.rng())
        .context("Failed to open table")?;
    let state = ServerState::new(table);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("Listening on port {}", config.port);

    loop {
        select! {
            accepted = listener.accept() => match accepted {
                Ok((socket, addr)) => {
                    tracing::debug!(%addr, connections = state.connection_count(), "Accepted connection");
                    tokio::spawn(client::handle_new_connection(state.clone(), socket));
                }
                Err(e) => tracing::error!("Failed to accept connection: {e}"),
            },
            _ = state.table().closed() => break,
        }
    }

    tracing::info!("Table closed, shutting down");
    Ok(())
}
