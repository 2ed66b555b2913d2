//! Result Renderer
//!
//! Pure mapping from a workflow outcome to what the console displays.
//! Nothing here touches the DOM; `barn-web` turns a [`View`] into markup.

use crate::error::ConsoleError;
use crate::model::{AmountMap, RiskResult, TradeResult};
use crate::outcome::RequestOutcome;

/// One labelled line in a result block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

impl DisplayRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled list of rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultBlock {
    pub title: &'static str,
    pub rows: Vec<DisplayRow>,
}

/// User-visible failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Message safe to show to the user
    pub message: String,
    /// Technical detail for the devtools console
    pub detail: String,
    pub retryable: bool,
}

impl From<&ConsoleError> for ErrorBanner {
    fn from(err: &ConsoleError) -> Self {
        Self {
            message: err.user_message(),
            detail: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}

/// What a workflow's result area shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Nothing submitted yet
    Hidden,
    /// Request in flight; no result block
    Busy,
    Failed(ErrorBanner),
    Ready(ResultBlock),
}

impl View {
    pub const fn block(&self) -> Option<&ResultBlock> {
        match self {
            Self::Ready(block) => Some(block),
            _ => None,
        }
    }

    pub const fn banner(&self) -> Option<&ErrorBanner> {
        match self {
            Self::Failed(banner) => Some(banner),
            _ => None,
        }
    }
}

/// A result type the console knows how to display
pub trait Render {
    fn render(&self) -> ResultBlock;
}

impl Render for RiskResult {
    fn render(&self) -> ResultBlock {
        ResultBlock {
            title: "Results",
            rows: vec![
                DisplayRow::new("Volatility", format!("{:.4}", self.volatility)),
                DisplayRow::new("Sharpe Ratio", format!("{:.4}", self.sharpe_ratio)),
                DisplayRow::new("Risk Score", format!("{:.4}", self.risk_score)),
            ],
        }
    }
}

impl Render for AmountMap {
    /// One row per token, in the order the service returned them
    fn render(&self) -> ResultBlock {
        ResultBlock {
            title: "Optimized Portfolio",
            rows: self
                .iter()
                .map(|e| DisplayRow::new(e.name.clone(), format!("{:.2}", e.amount)))
                .collect(),
        }
    }
}

impl Render for TradeResult {
    fn render(&self) -> ResultBlock {
        let mut rows = vec![
            DisplayRow::new("Status", self.status.clone()),
            DisplayRow::new("Message", self.message.clone()),
        ];
        if let Some(id) = &self.transaction_id {
            rows.push(DisplayRow::new("Transaction ID", id.clone()));
        }
        ResultBlock {
            title: "Result",
            rows,
        }
    }
}

/// Derive the view for an outcome
pub fn view<T: Render>(outcome: &RequestOutcome<T>) -> View {
    match outcome {
        RequestOutcome::Idle => View::Hidden,
        RequestOutcome::Pending => View::Busy,
        RequestOutcome::Success(value) => View::Ready(value.render()),
        RequestOutcome::Failure(err) => View::Failed(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(view: &View) -> Vec<(String, String)> {
        view.block()
            .map(|b| b.rows.iter().map(|r| (r.label.clone(), r.value.clone())).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_risk_uses_four_decimals() {
        let outcome = RequestOutcome::Success(RiskResult {
            volatility: 0.021_456_7,
            sharpe_ratio: -0.1,
            risk_score: 1.111_111,
        });
        let rows = values(&view(&outcome));
        assert_eq!(rows[0], ("Volatility".into(), "0.0215".into()));
        assert_eq!(rows[1], ("Sharpe Ratio".into(), "-0.1000".into()));
        assert_eq!(rows[2], ("Risk Score".into(), "1.1111".into()));
    }

    #[test]
    fn test_optimization_rows_follow_response_order() {
        let result: AmountMap = serde_json::from_str(r#"{"ETH": 1.4, "BTC": 0.6}"#).unwrap();
        let rows = values(&view(&RequestOutcome::Success(result)));
        assert_eq!(
            rows,
            [("ETH".to_string(), "1.40".to_string()), ("BTC".to_string(), "0.60".to_string())]
        );
    }

    #[test]
    fn test_trade_transaction_id_only_when_present() {
        let with_id = TradeResult {
            status: "ok".into(),
            message: "filled".into(),
            transaction_id: Some("tx1".into()),
        };
        let rows = values(&view(&RequestOutcome::Success(with_id)));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().filter(|(_, v)| v == "tx1").count(), 1);

        let without_id = TradeResult {
            status: "error".into(),
            message: "Invalid action".into(),
            transaction_id: None,
        };
        let rows = values(&view(&RequestOutcome::Success(without_id)));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|(label, _)| label != "Transaction ID"));
    }

    #[test]
    fn test_idle_pending_and_failure() {
        assert_eq!(view(&RequestOutcome::<RiskResult>::Idle), View::Hidden);
        assert_eq!(view(&RequestOutcome::<RiskResult>::Pending), View::Busy);

        let failed = view(&RequestOutcome::<RiskResult>::Failure(ConsoleError::Status {
            status: 502,
            body: "bad gateway".into(),
        }));
        let banner = failed.banner().unwrap();
        assert!(banner.retryable);
        assert!(banner.detail.contains("502"));
        assert!(failed.block().is_none());
    }
}
