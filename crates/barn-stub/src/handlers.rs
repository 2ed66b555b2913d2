//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use barn_core::{OptimizationRequest, OptimizationResult, PricePoint, RiskResult, TradeResult};

use crate::analysis;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Trade body as received; `action` is validated here, not by serde
#[derive(Debug, Deserialize)]
pub struct TradeRequest {
    pub token: String,
    pub amount: f64,
    pub action: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Risk metrics for an ordered price history
pub async fn risk_assessment(
    Json(prices): Json<Vec<PricePoint>>,
) -> Result<Json<RiskResult>, ApiError> {
    let series: Vec<f64> = prices.iter().map(|p| p.price).collect();

    analysis::risk_metrics(&series).map(Json).map_err(|rejection| {
        tracing::info!(points = series.len(), ?rejection, "risk assessment rejected");
        api_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.message(), "INVALID_PRICES")
    })
}

/// Simulated trade execution
pub async fn execute_trade(
    State(state): State<AppState>,
    Json(order): Json<TradeRequest>,
) -> Json<TradeResult> {
    let verb = match order.action.as_str() {
        "buy" => "Bought",
        "sell" => "Sold",
        other => {
            tracing::info!(action = other, "trade rejected");
            return Json(TradeResult {
                status: "error".into(),
                message: "Invalid action. Use \"buy\" or \"sell\".".into(),
                transaction_id: None,
            });
        }
    };

    let transaction_id = state.next_transaction_id();
    tracing::info!(
        token = %order.token,
        amount = order.amount,
        action = %order.action,
        %transaction_id,
        "trade executed"
    );

    Json(TradeResult {
        status: "success".into(),
        message: format!("{verb} {} {}", order.amount, order.token),
        transaction_id: Some(transaction_id),
    })
}

/// Rebalance a portfolio for a risk tolerance in `[0, 1]`
pub async fn optimize_portfolio(
    Json(request): Json<OptimizationRequest>,
) -> Result<Json<OptimizationResult>, ApiError> {
    if !(0.0..=1.0).contains(&request.risk_tolerance) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Risk tolerance must be between 0 and 1",
            "INVALID_RISK_TOLERANCE",
        ));
    }

    Ok(Json(analysis::rebalance(&request.portfolio, request.risk_tolerance)))
}
