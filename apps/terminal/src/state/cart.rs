//! # Cart State
//!
//! Holds the in-progress order for the POS screen.
//!
//! The session loop is single-threaded, but the cart sits behind
//! `Arc<Mutex<_>>` so every command goes through the same two closure
//! helpers and the state can be shared with whatever drives the screen.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command              CartState                  Cart Change            │
//! │  ───────              ─────────                  ───────────            │
//! │  add 1 ─────────────► with_cart_mut ───────────► add_product            │
//! │  inc 1 / dec 1 ─────► with_cart_mut ───────────► change_quantity        │
//! │  remove 1 ──────────► with_cart_mut ───────────► remove_product         │
//! │  cart ──────────────► with_cart ───────────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tillbook_core::{Cart, CartLine};

use crate::error::ApiError;
use crate::state::ConfigState;

/// Cart totals summary for replies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
    /// Total formatted with the configured currency
    pub total_display: String,
}

impl CartTotals {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let total_cents = cart.total().cents();
        CartTotals {
            line_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total_cents,
            total_display: config.format_currency(total_cents),
        }
    }
}

/// Full cart view: lines plus totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::new(cart, config),
        }
    }
}

/// Shared cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&cart))
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart lock poisoned"))?;
        Ok(f(&mut cart))
    }
}
