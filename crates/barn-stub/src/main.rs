//! Barn analysis service stub
//!
//! Axum server answering the three console endpoints for local development.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use barn_stub::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let app = router(AppState::new());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("barn stub service running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  POST /risk-assessment    - Risk metrics for a price history");
    tracing::info!("  POST /execute-trade      - Simulated trade execution");
    tracing::info!("  POST /optimize-portfolio - Portfolio rebalancing");

    axum::serve(listener, app).await?;

    Ok(())
}
