//! Application State

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared application state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Source of transaction ids for executed trades
    trades: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next transaction id, e.g. `0x0000000000000001`
    pub fn next_transaction_id(&self) -> String {
        let n = self.trades.fetch_add(1, Ordering::SeqCst) + 1;
        format!("0x{n:016x}")
    }

    /// Number of trades executed so far
    pub fn trade_count(&self) -> u64 {
        self.trades.load(Ordering::SeqCst)
    }
}
