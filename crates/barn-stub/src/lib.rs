//! # barn-stub
//!
//! Local stand-in for the analysis service the Barn console talks to.
//! Serves the three console endpoints with deterministic results so the
//! web console and the client integration tests run without the real
//! service.

pub mod analysis;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Build the service router
pub fn router(state: AppState) -> Router {
    // The console is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/risk-assessment", post(handlers::risk_assessment))
        .route("/execute-trade", post(handlers::execute_trade))
        .route("/optimize-portfolio", post(handlers::optimize_portfolio))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
