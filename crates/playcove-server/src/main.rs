//! PlayCove HTTP server.

mod auth;
mod error;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use playcove_core::config::AppConfig;
use playcove_infrastructure::catalog::import_catalog_file;
use playcove_infrastructure::seed::{SeedServices, seed_sample_data};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "playcove_server=debug,tower_http=info".to_string()),
        )
        .init();

    let config = AppConfig::load_default().context("loading configuration")?;
    let state = AppState::build(&config)?;

    if config.seed.enabled {
        seed_sample_data(SeedServices {
            users: &state.users,
            games: &state.games,
            reviews: &state.reviews,
            friendships: &state.friendships,
        })
        .await
        .context("seeding sample data")?;
    }

    if let Some(path) = &config.seed.catalog_path {
        let imported = import_catalog_file(path, &state.games)
            .await
            .context("importing catalog")?;
        info!(imported, %path, "catalog imported");
    }

    let app = routes::build_router(state);

    let bind_addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .context("invalid server.bind_addr")?;
    info!(%bind_addr, "playcove-server listening");
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
