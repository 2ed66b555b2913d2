//! Transport Strategy
//!
//! The console talks to the analysis service only through [`Transport`], so
//! the HTTP client (reqwest on native and in the browser) and in-memory test
//! doubles are interchangeable.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barn_core::{transport, workflow::TradeExecution};
//!
//! let result = transport::send::<TradeExecution, _>(&http, &config.endpoints, &order).await;
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Endpoints;
use crate::error::{ConsoleError, Result};
use crate::workflow::WorkflowKind;

/// Strategy trait for reaching the analysis service
///
/// Implementations issue exactly one POST per call and map every failure
/// (network, non-success status, unparsable body) to `Err`. Futures are not
/// required to be `Send` because the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait Transport {
    /// POST `body` as JSON to `path` and return the decoded JSON response
    async fn post_json(&self, path: &str, body: Value) -> Result<Value>;

    /// Transport name for logs
    fn name(&self) -> &str;
}

/// Send a typed workflow request and decode the typed response
///
/// Every response contract is a JSON object; any other body is a decode
/// failure even if serde could read it positionally.
pub async fn send<K, T>(
    transport: &T,
    endpoints: &Endpoints,
    request: &K::Request,
) -> Result<K::Response>
where
    K: WorkflowKind,
    T: Transport + ?Sized,
{
    let body = serde_json::to_value(request).map_err(|e| ConsoleError::Encode(e.to_string()))?;
    let path = K::path(endpoints);

    tracing::debug!(workflow = K::NAME, transport = transport.name(), path, "sending request");

    let response = transport.post_json(path, body).await?;
    if !response.is_object() {
        return Err(ConsoleError::Decode(format!(
            "{}: expected a JSON object, got {}",
            K::NAME,
            kind_of(&response)
        )));
    }
    serde_json::from_value(response).map_err(|e| ConsoleError::Decode(format!("{}: {e}", K::NAME)))
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
