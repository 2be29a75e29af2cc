//! # Product Commands
//!
//! Catalog search for the product grid on the POS screen.

use serde::Serialize;
use tillbook_core::Product;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AppState, ConfigState};

/// Product tile shown in the grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub price_display: String,
}

impl ProductDto {
    fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price_cents: product.price_cents,
            price_display: config.format_currency(product.price_cents),
        }
    }
}

fn to_dtos(products: Vec<&Product>, config: &ConfigState) -> Vec<ProductDto> {
    products
        .into_iter()
        .map(|p| ProductDto::new(p, config))
        .collect()
}

/// Searches products by name. A blank term lists the whole catalog.
pub fn search_products(state: &AppState, term: &str) -> Result<Vec<ProductDto>, ApiError> {
    debug!(term = %term, "search_products command");

    let hits = state.catalog.catalog.search(term)?;
    debug!(count = hits.len(), "search complete");
    Ok(to_dtos(hits, &state.config))
}

/// Lists products in one category.
pub fn products_in_category(state: &AppState, category: &str) -> Vec<ProductDto> {
    debug!(category = %category, "products_in_category command");
    to_dtos(state.catalog.catalog.in_category(category), &state.config)
}

/// Lists categories in catalog order.
pub fn list_categories(state: &AppState) -> Vec<String> {
    debug!("list_categories command");
    state
        .catalog
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}
