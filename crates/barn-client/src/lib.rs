//! # barn-client
//!
//! HTTP access to the analysis service for the Barn console.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barn_client::ConsoleClient;
//! use barn_core::{TradeAction, TradeOrder};
//!
//! let client = ConsoleClient::from_env()?;
//! let mut trade = client.workflow();
//! let order = TradeOrder { token: "BTC".into(), amount: 1.5, action: TradeAction::Buy };
//! client.submit(&mut trade, &order).await;
//! ```

pub mod http;

pub use http::HttpTransport;

use barn_core::{
    ConsoleConfig, OptimizationRequest, OptimizationResult, PricePoint, Result, RiskAssessment,
    RiskResult, TradeExecution, TradeOrder, TradeResult, Transport, Workflow, WorkflowKind,
    workflow::PortfolioOptimization,
};

/// Configured transport plus typed calls for each workflow
#[derive(Clone, Debug)]
pub struct ConsoleClient<T = HttpTransport> {
    transport: T,
    config: ConsoleConfig,
}

impl ConsoleClient<HttpTransport> {
    pub fn from_config(config: ConsoleConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self { transport, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(ConsoleConfig::from_env()?)
    }
}

impl<T: Transport> ConsoleClient<T> {
    /// Use a custom transport (test doubles, alternative clients)
    pub const fn with_transport(transport: T, config: ConsoleConfig) -> Self {
        Self { transport, config }
    }

    /// Fresh workflow state using the configured submission policy
    pub const fn workflow<K: WorkflowKind>(&self) -> Workflow<K> {
        Workflow::new(self.config.policy)
    }

    /// Send one request of workflow `K`
    pub async fn send<K: WorkflowKind>(&self, request: &K::Request) -> Result<K::Response> {
        barn_core::transport::send::<K, T>(&self.transport, &self.config.endpoints, request).await
    }

    /// Drive `workflow` through one submission
    pub async fn submit<K: WorkflowKind>(
        &self,
        workflow: &mut Workflow<K>,
        request: &K::Request,
    ) -> bool {
        workflow.submit(&self.transport, &self.config.endpoints, request).await
    }

    pub async fn assess_risk(&self, prices: &[PricePoint]) -> Result<RiskResult> {
        self.send::<RiskAssessment>(&prices.to_vec()).await
    }

    pub async fn execute_trade(&self, order: &TradeOrder) -> Result<TradeResult> {
        self.send::<TradeExecution>(order).await
    }

    pub async fn optimize_portfolio(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult> {
        self.send::<PortfolioOptimization>(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use barn_core::{ConsoleError, TradeAction, TradeWorkflow};
    use serde_json::{Value, json};

    use super::*;

    /// Counts calls and answers every request the same way
    struct Canned {
        reply: Result<Value>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl Transport for Canned {
        async fn post_json(&self, _path: &str, _body: Value) -> Result<Value> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn client(reply: Result<Value>) -> ConsoleClient<Canned> {
        let transport = Canned {
            reply,
            calls: Cell::new(0),
        };
        ConsoleClient::with_transport(transport, ConsoleConfig::default())
    }

    #[tokio::test]
    async fn test_custom_transport_drives_workflow() {
        let client = client(Ok(json!({"status": "ok", "message": "filled"})));
        let order = TradeOrder {
            token: "BTC".into(),
            amount: 1.0,
            action: TradeAction::Buy,
        };

        let mut trade: TradeWorkflow = client.workflow();
        assert!(client.submit(&mut trade, &order).await);
        assert_eq!(trade.outcome().success().map(|r| r.message.as_str()), Some("filled"));
        assert_eq!(client.transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_custom_transport_failure_is_returned() {
        let client = client(Err(ConsoleError::Status {
            status: 503,
            body: String::new(),
        }));

        let err = client.assess_risk(&[PricePoint { price: 1.0 }]).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
