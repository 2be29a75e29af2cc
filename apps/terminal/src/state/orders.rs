//! # Order State
//!
//! The order completion sink for this screen. There is no payment backend
//! yet, so completed orders are logged and kept in memory as receipts.

use std::sync::{Arc, Mutex};

use tillbook_core::{CompletedOrder, CoreResult, MemorySink, Money, OrderSink};
use tracing::info;

use crate::error::ApiError;

/// Logs each order and keeps it.
#[derive(Debug, Default)]
pub struct ReceiptLog {
    inner: MemorySink,
}

impl ReceiptLog {
    pub fn orders(&self) -> &[CompletedOrder] {
        self.inner.orders()
    }

    pub fn takings(&self) -> Money {
        self.inner.takings()
    }
}

impl OrderSink for ReceiptLog {
    fn submit(&mut self, order: &CompletedOrder) -> CoreResult<()> {
        info!(
            order_id = %order.id,
            lines = order.lines.len(),
            items = order.item_count,
            total_cents = order.total_cents,
            "Order completed"
        );
        self.inner.submit(order)
    }
}

/// Shared order sink.
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    log: Arc<Mutex<ReceiptLog>>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with write access to the receipt log.
    pub fn with_log_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut ReceiptLog) -> R,
    {
        let mut log = self
            .log
            .lock()
            .map_err(|_| ApiError::internal("Order log lock poisoned"))?;
        Ok(f(&mut log))
    }
}
