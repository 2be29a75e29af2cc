//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Completed│                         │
//! │  │  Cart    │     │          │     │  Order   │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                 │                              │
//! │       │           add / inc / dec     complete                          │
//! │       │           remove                 │                              │
//! │       │                │                 │                              │
//! │       └──── clear ─────┴─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the full cart so the screen can redraw.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{AppState, CartResponse};

/// Gets the current cart contents.
pub fn get_cart(state: &AppState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    state
        .cart
        .with_cart(|c| CartResponse::new(c, &state.config))
}

/// Adds one unit of a catalog product.
///
/// ## Errors
/// `NOT_FOUND` if `product_id` is not in the catalog.
pub fn add_to_cart(state: &AppState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = state.catalog.catalog.require(product_id)?;

    state.cart.with_cart_mut(|c| {
        let quantity = c.add_product(product);
        debug!(product_id, quantity, "product added");
        CartResponse::new(c, &state.config)
    })
}

/// Moves a line's quantity by `delta`; a line reaching zero is dropped.
///
/// A product that is not in the cart is left alone.
pub fn change_quantity(
    state: &AppState,
    product_id: u32,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, delta, "change_quantity command");

    state.cart.with_cart_mut(|c| {
        match c.change_quantity(product_id, delta) {
            Some(0) => debug!(product_id, "line removed"),
            Some(quantity) => debug!(product_id, quantity, "quantity changed"),
            None => debug!(product_id, "product not in cart, nothing changed"),
        }
        CartResponse::new(c, &state.config)
    })
}

/// Removes a product from the cart. No-op if it is not there.
pub fn remove_from_cart(state: &AppState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    state.cart.with_cart_mut(|c| {
        if c.remove_product(product_id).is_none() {
            debug!(product_id, "product not in cart, nothing changed");
        }
        CartResponse::new(c, &state.config)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(state: &AppState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    state.cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::new(c, &state.config)
    })
}
