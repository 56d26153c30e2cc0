use anyhow::Context;
use tracing::info;

use superheroes::config::AppConfig;
use superheroes::state::AppState;
use superheroes::{build_router, database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!("Database ready");

    if config.seed.enabled {
        seed::seed_demo_data(&db)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed database: {e:?}"))?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { db, config };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
