use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use translation_gateway::config::Config;
use translation_gateway::routes;
use translation_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(&config).context("failed to build translation client")?);

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("translation gateway listening at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
