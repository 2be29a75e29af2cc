//! # Order Completion
//!
//! Hands a finished cart to whatever processes payment and receipts, then
//! resets the cart for the next customer.
//!
//! ## Complete Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Complete Order                                                         │
//! │       │                                                                 │
//! │       ├── cart empty? ──► Err(EmptyCart), nothing changes               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CompletedOrder { lines, total } snapshot                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sink.submit(&order)                                                    │
//! │       │                                                                 │
//! │       ├── Err ──► propagated, cart kept for retry                       │
//! │       │                                                                 │
//! │       └── Ok ───► cart.clear() ──► Ok(order)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartLine;

/// Frozen copy of a cart at the moment the order was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedOrder {
    /// UUID v4.
    pub id: String,
    pub lines: Vec<CartLine>,
    /// Total units across all lines.
    pub item_count: i64,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl CompletedOrder {
    /// Snapshots the current contents of `cart`.
    pub fn from_cart(cart: &Cart) -> Self {
        CompletedOrder {
            id: Uuid::new_v4().to_string(),
            lines: cart.lines().to_vec(),
            item_count: cart.total_quantity(),
            total_cents: cart.total().cents(),
            completed_at: Utc::now(),
        }
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Receives finalized orders for payment/receipt processing.
pub trait OrderSink {
    /// Accepts the order, or refuses it with an error.
    fn submit(&mut self, order: &CompletedOrder) -> CoreResult<()>;
}

/// Keeps every submitted order in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    orders: Vec<CompletedOrder>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[CompletedOrder] {
        &self.orders
    }

    /// Sum of all submitted order totals.
    pub fn takings(&self) -> Money {
        self.orders.iter().map(CompletedOrder::total).sum()
    }
}

impl OrderSink for MemorySink {
    fn submit(&mut self, order: &CompletedOrder) -> CoreResult<()> {
        self.orders.push(order.clone());
        Ok(())
    }
}

/// Completes the in-progress order.
///
/// The cart is cleared only once `sink` has accepted the order.
///
/// ## Errors
/// - [`CoreError::EmptyCart`] when there is nothing to sell
/// - Whatever `sink` returns
pub fn complete_order<S>(cart: &mut Cart, sink: &mut S) -> CoreResult<CompletedOrder>
where
    S: OrderSink + ?Sized,
{
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let order = CompletedOrder::from_cart(cart);
    sink.submit(&order)?;
    cart.clear();

    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================
