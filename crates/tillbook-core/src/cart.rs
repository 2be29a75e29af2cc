//! # Order Cart
//!
//! The line items for one in-progress sale, and its running total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POS Action           Operation                  Cart Change            │
//! │  ──────────           ─────────                  ───────────            │
//! │                                                                         │
//! │  Click Product ──────► add_product(p) ─────────► qty += 1 / push line   │
//! │                                                                         │
//! │  Click + / − ────────► change_quantity(id, ±n) ► qty = max(0, qty ± n)  │
//! │                                                  qty == 0 → drop line   │
//! │                                                                         │
//! │  Click Trash ────────► remove_product(id) ─────► drop line              │
//! │                                                                         │
//! │  Complete Order ─────► clear() ────────────────► empty                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id, in the order they were first added
//! - Every line has quantity ≥ 1 (a line exists iff its quantity is > 0)
//!
//! None of these operations can fail. An id that is not in the cart is a
//! no-op, and an over-decrement clamps at zero. A cart decoded from JSON
//! goes through [`Cart::from_lines`], so it holds the same invariants.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CartLine, Product};
use crate::validation::{validate_product, ValidationResult};

/// The in-progress order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartRepr")]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Wire shape of a cart before its invariants are checked.
#[derive(Deserialize)]
struct CartRepr {
    lines: Vec<CartLine>,
}

impl TryFrom<CartRepr> for Cart {
    type Error = ValidationError;

    fn try_from(repr: CartRepr) -> Result<Self, Self::Error> {
        Cart::from_lines(repr.lines)
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from existing lines, e.g. a saved order.
    ///
    /// ## Errors
    /// - A line whose product fails [`validate_product`]
    /// - A quantity below 1 ([`ValidationError::OutOfRange`])
    /// - Two lines for the same product id ([`ValidationError::Duplicate`])
    pub fn from_lines(lines: Vec<CartLine>) -> ValidationResult<Self> {
        for (index, line) in lines.iter().enumerate() {
            validate_product(&line.product)?;

            if line.quantity < 1 {
                return Err(ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 1,
                    max: i64::MAX,
                });
            }

            if lines[..index]
                .iter()
                .any(|earlier| earlier.product.id == line.product.id)
            {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: line.product.id.to_string(),
                });
            }
        }

        Ok(Cart { lines })
    }

    /// Adds one unit of `product`.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with quantity 1. Returns the line's quantity afterwards.
    pub fn add_product(&mut self, product: &Product) -> i64 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::new(product));
        1
    }

    /// Moves a line's quantity by `delta`, clamping at zero.
    ///
    /// A line that reaches zero is removed. Returns the resulting quantity
    /// (`Some(0)` when the line was dropped), or `None` when `product_id` is
    /// not in the cart, in which case nothing changes.
    pub fn change_quantity(&mut self, product_id: u32, delta: i64) -> Option<i64> {
        let index = self.position(product_id)?;

        let quantity = self.lines[index].quantity.saturating_add(delta).max(0);

        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }

        Some(quantity)
    }

    /// Removes the line for `product_id`, returning it if it was present.
    pub fn remove_product(&mut self, product_id: u32) -> Option<CartLine> {
        let index = self.position(product_id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of price × quantity over all lines. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: u32) -> i64 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    fn position(&self, product_id: u32) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }

    fn line_mut(&mut self, product_id: u32) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product.id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_cents(price_cents),
            "Test",
        )
    }

    #[test]
    fn test_add_product_new_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        assert_eq!(cart.add_product(&product), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.total(), Money::from_cents(999));
    }

    #[test]
    fn test_repeated_adds_count_calls() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);

        for expected in 1..=25 {
            assert_eq!(cart.add_product(&product), expected);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), 25);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(3, 100));
        cart.add_product(&test_product(1, 100));
        cart.add_product(&test_product(3, 100));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_change_quantity_increments_and_decrements() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 200));

        assert_eq!(cart.change_quantity(1, 4), Some(5));
        assert_eq!(cart.change_quantity(1, -2), Some(3));
        assert_eq!(cart.total(), Money::from_cents(600));
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 200));
        cart.add_product(&test_product(1, 200));

        assert_eq!(cart.change_quantity(1, -2), Some(0));
        assert!(cart.line(1).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_over_decrement_clamps_and_removes() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 200));

        assert_eq!(cart.change_quantity(1, -10), Some(0));
        assert!(cart.line(1).is_none());
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_change_quantity_extreme_delta_saturates() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 1));

        assert_eq!(cart.change_quantity(1, i64::MIN), Some(0));
        assert!(cart.is_empty());

        cart.add_product(&test_product(1, 1));
        assert_eq!(cart.change_quantity(1, i64::MAX), Some(i64::MAX));
    }

    #[test]
    fn test_change_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 200));
        let before = cart.clone();

        assert_eq!(cart.change_quantity(42, 3), None);
        assert_eq!(cart.change_quantity(42, -3), None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_product_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 200));
        cart.add_product(&test_product(2, 300));

        let removed = cart.remove_product(1).unwrap();
        assert_eq!(removed.product.id, 1);
        let after_once = cart.clone();

        assert!(cart.remove_product(1).is_none());
        assert_eq!(cart, after_once);
        assert_eq!(cart.total(), Money::from_cents(300));
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut cart = Cart::new();
        assert!(cart.total().is_zero());

        cart.add_product(&test_product(1, 350));
        cart.add_product(&test_product(2, 450));
        cart.change_quantity(2, 2);

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.product.price_cents * l.quantity)
            .sum();
        assert_eq!(cart.total().cents(), expected);
        assert_eq!(cart.total(), Money::from_cents(350 + 3 * 450));
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 999));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut cart = Cart::new();
        cart.add_product(&test_product(1, 350));
        cart.add_product(&test_product(3, 300));
        cart.change_quantity(1, 1);

        let json = serde_json::to_string(&cart).unwrap();
        let decoded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, cart);
        assert_eq!(decoded.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_deserialize_rejects_broken_lines() {
        let line = |id: u32, quantity: i64| {
            serde_json::json!({
                "product": {
                    "id": id,
                    "name": "Espresso",
                    "price_cents": 350,
                    "category": "Beverages",
                },
                "quantity": quantity,
            })
        };

        let duplicate = serde_json::json!({ "lines": [line(1, 2), line(1, 1)] });
        assert!(serde_json::from_value::<Cart>(duplicate).is_err());

        let negative = serde_json::json!({ "lines": [line(1, -4)] });
        assert!(serde_json::from_value::<Cart>(negative).is_err());

        let zero = serde_json::json!({ "lines": [line(2, 0)] });
        assert!(serde_json::from_value::<Cart>(zero).is_err());
    }

    #[test]
    fn test_from_lines_errors() {
        let espresso = test_product(1, 350);
        let result = Cart::from_lines(vec![CartLine::new(&espresso), CartLine::new(&espresso)]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));

        let mut empty_line = CartLine::new(&espresso);
        empty_line.quantity = 0;
        assert!(matches!(
            Cart::from_lines(vec![empty_line]),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
