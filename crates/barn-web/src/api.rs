//! API Client
//!
//! Bridges Leptos signals and the console workflows. The service location
//! and submission policy are fixed at build time through `BARN_*`
//! environment variables.

use leptos::prelude::*;

use barn_client::ConsoleClient;
use barn_core::{ConsoleConfig, ConsoleError, Result, SubmissionPolicy, Workflow, WorkflowKind};

/// Configuration baked into the WASM bundle
pub fn config() -> Result<ConsoleConfig> {
    ConsoleConfig::from_lookup(|key| {
        let value = match key {
            "BARN_API_URL" => option_env!("BARN_API_URL"),
            "BARN_BLOCK_NON_NUMERIC" => option_env!("BARN_BLOCK_NON_NUMERIC"),
            "BARN_BLOCK_EMPTY_PORTFOLIO" => option_env!("BARN_BLOCK_EMPTY_PORTFOLIO"),
            "BARN_RESUBMIT" => option_env!("BARN_RESUBMIT"),
            _ => None,
        };
        value.map(String::from)
    })
}

/// Submission policy for new workflow state
///
/// Falls back to the default policy if the build config is invalid; that
/// error is reported once at startup by [`check_config`].
pub fn policy() -> SubmissionPolicy {
    config().map(|c| c.policy).unwrap_or_default()
}

/// Fresh workflow state held in a signal
pub fn workflow<K>() -> RwSignal<Workflow<K>>
where
    K: WorkflowKind + 'static,
    K::Response: Send + Sync + 'static,
{
    RwSignal::new(Workflow::new(policy()))
}

/// Submit `request` for the workflow held in `workflow`
///
/// Returns immediately; the outcome lands in the signal when the request
/// settles. Completions of superseded requests are dropped by the workflow.
pub fn submit<K>(workflow: RwSignal<Workflow<K>>, request: K::Request)
where
    K: WorkflowKind + 'static,
    K::Request: 'static,
    K::Response: Send + Sync + 'static,
{
    let Some(ticket) = workflow.try_update(|wf| wf.begin(&request)).flatten() else {
        if let Some(err) = workflow.with_untracked(|wf| wf.outcome().failure().cloned()) {
            log_failure(K::NAME, &err);
        }
        return;
    };

    leptos::task::spawn_local(async move {
        let result = match config().and_then(ConsoleClient::from_config) {
            Ok(client) => client.send::<K>(&request).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            log_failure(K::NAME, err);
        }

        // The page may have been left while the request was in flight
        let _ = workflow.try_update(|wf| wf.settle(ticket, result));
    });
}

/// Report an invalid build-time configuration in the browser console
///
/// Every submission would fail with the same `Config` error, so the cause
/// is logged up front.
pub fn check_config() {
    if let Err(err) = config() {
        log_failure("config", &err);
    }
}

/// Developer-facing log in the browser console
fn log_failure(workflow: &str, err: &ConsoleError) {
    web_sys::console::error_1(&format!("{workflow}: {err}").into());
}
