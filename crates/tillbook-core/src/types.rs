//! # Domain Types
//!
//! Core domain types used throughout Tillbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │◄──│  product        │   │  id (u32)       │       │
//! │  │  name           │   │  quantity (≥1)  │   │  name, email    │       │
//! │  │  price_cents    │   └─────────────────┘   │  status         │       │
//! │  │  category       │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: u32,

    /// Display name shown on the product tile and the order.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Category shown under the name, e.g. "Beverages".
    pub category: String,
}

impl Product {
    /// Creates a product.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents: price.cents(),
            category: category.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A (product, quantity) pairing within a cart.
///
/// The product is a snapshot taken when it was first added; the cart never
/// reaches back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    pub(crate) fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Whether a customer still visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A customer record shown in the customers dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_orders: u32,
    /// Lifetime spend in cents.
    pub total_spent_cents: i64,
    #[ts(as = "String")]
    pub last_visit: NaiveDate,
    pub loyalty_points: u32,
    pub status: CustomerStatus,
}

impl Customer {
    /// Returns lifetime spend as Money.
    #[inline]
    pub fn total_spent(&self) -> Money {
        Money::from_cents(self.total_spent_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
