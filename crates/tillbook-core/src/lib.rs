//! # tillbook-core: Pure Business Logic for Tillbook
//!
//! Everything the POS screen needs that is not input/output: money, the
//! product catalog, the order cart, order completion, the customer
//! directory and the dashboard's insights and AI settings. There are zero
//! I/O dependencies in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tillbook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              POS Screen (apps/terminal, web front-end)          │   │
//! │  │    Product Search ──► Current Order ──► Complete Order          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tillbook-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌───────────┐         │   │
//! │  │   │  money  │  │ catalog │  │  cart   │  │   order   │         │   │
//! │  │   │  Money  │  │ Catalog │  │  Cart   │  │ OrderSink │         │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └───────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, Customer)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only product lookup and search
//! - [`cart`] - The in-progress order
//! - [`order`] - Handing a finished cart to an [`order::OrderSink`]
//! - [`customer`] - Customer directory filtering
//! - [`insights`] - Business insights, filterable by impact
//! - [`settings`] - AI model parameters with bounded updates
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tillbook_core::{Cart, Catalog, Money};
//!
//! let catalog = Catalog::sample();
//! let espresso = catalog.get(1).unwrap();
//! let croissant = catalog.get(3).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_product(espresso);
//! cart.add_product(croissant);
//! assert_eq!(cart.total(), Money::from_cents(650));
//!
//! cart.change_quantity(espresso.id, -2);
//! assert_eq!(cart.total(), Money::from_cents(300));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod insights;
pub mod money;
pub mod order;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use customer::{CustomerDirectory, StatusFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use insights::{Impact, Insight, InsightDirectory};
pub use money::Money;
pub use order::{complete_order, CompletedOrder, MemorySink, OrderSink};
pub use settings::{AiModel, AiParameter, AiSettings, ParameterKind, ParameterValue};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a catalog or customer search term.
pub const MAX_SEARCH_LEN: usize = 100;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
