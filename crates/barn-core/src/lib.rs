//! # barn-core
//!
//! Client-side state for the Barn console: collection editors, the request
//! lifecycle of each workflow, and the mapping from results to display rows.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Console page                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐  │
//! │  │  Collection  │   │   Workflow   │   │      Transport       │  │
//! │  │   Editor     │──▶│  Controller  │──▶│     (Strategy)       │  │
//! │  └──────────────┘   └──────┬───────┘   └──────────────────────┘  │
//! │                            ▼                                      │
//! │                     ┌──────────────┐                              │
//! │                     │   Renderer   │                              │
//! │                     └──────────────┘                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three workflows (risk assessment, trade execution, portfolio
//! optimization) share no state; each is a [`Workflow`] over its own
//! [`WorkflowKind`].

pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod outcome;
pub mod render;
pub mod transport;
pub mod workflow;

pub use config::{ConsoleConfig, Endpoints, ResubmitPolicy, SubmissionPolicy};
pub use editor::{CollectionEditor, EntryId, PortfolioEditor, PriceSeriesEditor};
pub use error::{ConsoleError, Result};
pub use model::{
    AmountMap, NamedAmount, OptimizationRequest, OptimizationResult, PricePoint, RiskResult,
    TradeAction, TradeOrder, TradeResult,
};
pub use outcome::RequestOutcome;
pub use render::{Render, View};
pub use transport::Transport;
pub use workflow::{
    OptimizeWorkflow, PortfolioOptimization, RiskAssessment, RiskWorkflow, Ticket, TradeExecution,
    TradeWorkflow, Workflow, WorkflowKind,
};
