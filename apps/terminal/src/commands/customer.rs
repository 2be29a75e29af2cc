//! # Customer Commands

use serde::Serialize;
use tillbook_core::{Customer, StatusFilter};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Customer row with spend formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(flatten)]
    pub customer: Customer,
    pub total_spent_display: String,
}

/// Filters the customer directory by name/email and status.
pub fn search_customers(
    state: &AppState,
    term: &str,
    status: StatusFilter,
) -> Result<Vec<CustomerDto>, ApiError> {
    debug!(term = %term, ?status, "search_customers command");

    let customers = state.catalog.customers.filter(term, status)?;
    Ok(customers
        .into_iter()
        .map(|c| CustomerDto {
            total_spent_display: state.config.format_currency(c.total_spent_cents),
            customer: c.clone(),
        })
        .collect())
}
