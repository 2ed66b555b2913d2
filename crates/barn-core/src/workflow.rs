//! Workflow Controller
//!
//! Owns the request lifecycle of one console workflow.
//!
//! ```text
//!            begin()                 settle(current ticket)
//!   Idle ─────────────▶ Pending ─────────────────────────▶ Success | Failure
//!                          ▲                                      │
//!                          └──────────────── begin() ─────────────┘
//! ```
//!
//! Every `begin` issues a [`Ticket`] stamped with a fresh generation. A
//! completion is applied only if its ticket still carries the current
//! generation, so a slow earlier request can never overwrite a later one.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{Endpoints, ResubmitPolicy, SubmissionPolicy};
use crate::error::{ConsoleError, Result};
use crate::model::{
    OptimizationRequest, OptimizationResult, PricePoint, RiskResult, TradeOrder, TradeResult,
};
use crate::outcome::RequestOutcome;
use crate::transport::{self, Transport};

/// Static description of a workflow: endpoint, payload and result types
pub trait WorkflowKind {
    /// Workflow name for logs
    const NAME: &'static str;

    type Request: Serialize + Clone + fmt::Debug;
    type Response: DeserializeOwned + Clone + fmt::Debug;

    /// Endpoint path for this workflow
    fn path(endpoints: &Endpoints) -> &str;

    /// Client-side checks; only enforced when the policy asks for them
    fn check(_request: &Self::Request, _policy: &SubmissionPolicy) -> Result<()> {
        Ok(())
    }
}

/// Risk assessment of a price history
#[derive(Clone, Copy, Debug)]
pub struct RiskAssessment;

impl WorkflowKind for RiskAssessment {
    const NAME: &'static str = "risk_assessment";

    type Request = Vec<PricePoint>;
    type Response = RiskResult;

    fn path(endpoints: &Endpoints) -> &str {
        &endpoints.risk_assessment
    }

    fn check(request: &Self::Request, policy: &SubmissionPolicy) -> Result<()> {
        if policy.block_non_numeric && request.iter().any(|p| p.price.is_nan()) {
            return Err(ConsoleError::Validation("Every price must be a number.".into()));
        }
        Ok(())
    }
}

/// Trade execution of a single order
#[derive(Clone, Copy, Debug)]
pub struct TradeExecution;

impl WorkflowKind for TradeExecution {
    const NAME: &'static str = "trade_execution";

    type Request = TradeOrder;
    type Response = TradeResult;

    fn path(endpoints: &Endpoints) -> &str {
        &endpoints.execute_trade
    }

    fn check(request: &Self::Request, policy: &SubmissionPolicy) -> Result<()> {
        if policy.block_non_numeric && request.amount.is_nan() {
            return Err(ConsoleError::Validation("Amount must be a number.".into()));
        }
        Ok(())
    }
}

/// Portfolio optimization for a risk tolerance
#[derive(Clone, Copy, Debug)]
pub struct PortfolioOptimization;

impl WorkflowKind for PortfolioOptimization {
    const NAME: &'static str = "portfolio_optimization";

    type Request = OptimizationRequest;
    type Response = OptimizationResult;

    fn path(endpoints: &Endpoints) -> &str {
        &endpoints.optimize_portfolio
    }

    fn check(request: &Self::Request, policy: &SubmissionPolicy) -> Result<()> {
        if policy.block_empty_portfolio && request.portfolio.is_empty() {
            return Err(ConsoleError::Validation("Add at least one token to the portfolio.".into()));
        }
        if policy.block_non_numeric {
            if request.portfolio.iter().any(|e| e.amount.is_nan()) {
                return Err(ConsoleError::Validation("Every token amount must be a number.".into()));
            }
            if request.risk_tolerance.is_nan() {
                return Err(ConsoleError::Validation("Risk tolerance must be a number.".into()));
            }
        }
        Ok(())
    }
}

/// Proof that a request was started, tagged with its generation
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket<K> {
    generation: u64,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Ticket<K> {
    const fn new(generation: u64) -> Self {
        Self {
            generation,
            _kind: PhantomData,
        }
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl<K> Clone for Ticket<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Ticket<K> {}

/// Request lifecycle for one workflow instance
#[derive(Debug)]
pub struct Workflow<K: WorkflowKind> {
    outcome: RequestOutcome<K::Response>,
    generation: u64,
    policy: SubmissionPolicy,
}

impl<K: WorkflowKind> Clone for Workflow<K> {
    fn clone(&self) -> Self {
        Self {
            outcome: self.outcome.clone(),
            generation: self.generation,
            policy: self.policy,
        }
    }
}

impl<K: WorkflowKind> Default for Workflow<K> {
    fn default() -> Self {
        Self::new(SubmissionPolicy::default())
    }
}

impl<K: WorkflowKind> Workflow<K> {
    pub const fn new(policy: SubmissionPolicy) -> Self {
        Self {
            outcome: RequestOutcome::Idle,
            generation: 0,
            policy,
        }
    }

    pub const fn outcome(&self) -> &RequestOutcome<K::Response> {
        &self.outcome
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_pending(&self) -> bool {
        self.outcome.is_pending()
    }

    /// Start a submission
    ///
    /// Returns `None` when no request should be issued: either a request is
    /// already in flight under [`ResubmitPolicy::IgnoreWhilePending`], or the
    /// policy rejected the payload (the outcome then holds the validation
    /// failure).
    pub fn begin(&mut self, request: &K::Request) -> Option<Ticket<K>> {
        if self.outcome.is_pending() && self.policy.resubmit == ResubmitPolicy::IgnoreWhilePending {
            tracing::debug!(
                workflow = K::NAME,
                generation = self.generation,
                "submission ignored while pending"
            );
            return None;
        }

        self.generation += 1;

        if let Err(err) = K::check(request, &self.policy) {
            tracing::info!(workflow = K::NAME, error = %err, "submission blocked by policy");
            self.outcome = RequestOutcome::Failure(err);
            return None;
        }

        self.outcome = RequestOutcome::Pending;
        tracing::debug!(workflow = K::NAME, generation = self.generation, "submission started");
        Some(Ticket::new(self.generation))
    }

    /// Apply a completion if `ticket` is still current
    ///
    /// Returns `false` when the completion was stale and discarded.
    pub fn settle(&mut self, ticket: Ticket<K>, result: Result<K::Response>) -> bool {
        if ticket.generation != self.generation || !self.outcome.is_pending() {
            tracing::debug!(
                workflow = K::NAME,
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale completion"
            );
            return false;
        }

        if let Err(err) = &result {
            tracing::warn!(
                workflow = K::NAME,
                generation = ticket.generation,
                error = %err,
                "submission failed"
            );
        }

        self.outcome = result.into();
        true
    }

    /// Return to `Idle`; any in-flight completion becomes stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.outcome = RequestOutcome::Idle;
    }

    /// Begin, send and settle in one call
    ///
    /// Returns `false` when no request was issued or its result was stale.
    pub async fn submit<T>(
        &mut self,
        transport: &T,
        endpoints: &Endpoints,
        request: &K::Request,
    ) -> bool
    where
        T: Transport + ?Sized,
    {
        let Some(ticket) = self.begin(request) else {
            return false;
        };
        let result = transport::send::<K, T>(transport, endpoints, request).await;
        self.settle(ticket, result)
    }
}

/// Risk assessment workflow state
pub type RiskWorkflow = Workflow<RiskAssessment>;

/// Trade execution workflow state
pub type TradeWorkflow = Workflow<TradeExecution>;

/// Portfolio optimization workflow state
pub type OptimizeWorkflow = Workflow<PortfolioOptimization>;
