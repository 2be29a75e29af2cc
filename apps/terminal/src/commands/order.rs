//! # Order Commands
//!
//! "Complete Order" on the POS screen.

use serde::Serialize;
use tillbook_core::CompletedOrder;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Receipt for a completed order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order: CompletedOrder,
    pub total_display: String,
    /// Orders completed in this session, this one included
    pub session_orders: usize,
    pub session_takings_display: String,
}

/// Hands the current cart to the order sink and starts a fresh cart.
///
/// ## Errors
/// - `CART_ERROR` if the cart is empty
/// - `ORDER_ERROR` if the sink refuses the order (cart is kept)
pub fn complete_order(state: &AppState) -> Result<OrderResponse, ApiError> {
    debug!("complete_order command");

    // Lock order: receipt log, then cart
    let order = state
        .orders
        .with_log_mut(|log| -> Result<CompletedOrder, ApiError> {
            let completed = state
                .cart
                .with_cart_mut(|c| tillbook_core::complete_order(c, log))??;
            Ok(completed)
        })??;

    let (session_orders, takings) = state
        .orders
        .with_log_mut(|log| (log.orders().len(), log.takings()))?;

    info!(order_id = %order.id, session_orders, "Receipt ready");

    Ok(OrderResponse {
        total_display: state.config.format_currency(order.total_cents),
        session_takings_display: state.config.format_currency(takings.cents()),
        session_orders,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart;
    use crate::error::ErrorCode;
    use crate::state::{CatalogState, ConfigState};

    fn state() -> AppState {
        AppState::new(CatalogState::sample(), ConfigState::default())
    }

    #[test]
    fn test_complete_empty_cart() {
        let err = complete_order(&state()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_complete_order_resets_cart() {
        let state = state();
        cart::add_to_cart(&state, 5).unwrap();
        cart::add_to_cart(&state, 6).unwrap();

        let receipt = complete_order(&state).unwrap();
        assert_eq!(receipt.total_display, "$14.50");
        assert_eq!(receipt.session_orders, 1);
        assert_eq!(receipt.order.lines.len(), 2);

        assert!(cart::get_cart(&state).unwrap().lines.is_empty());

        cart::add_to_cart(&state, 1).unwrap();
        let receipt = complete_order(&state).unwrap();
        assert_eq!(receipt.session_orders, 2);
        assert_eq!(receipt.session_takings_display, "$18.00");
    }
}
