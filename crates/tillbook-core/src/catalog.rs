//! # Product Catalog
//!
//! The read-only set of purchasable products, supplied once when the POS
//! screen mounts.
//!
//! ## Lookup Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog provider ──► Catalog::new(products) ──► validated, ordered     │
//! │                                                                         │
//! │  Search box "esp" ────► search()       ──► [Espresso]                   │
//! │  Category "Food" ─────► in_category()  ──► [Chicken Sandwich, ...]      │
//! │  Tile click (id 3) ───► get()          ──► Croissant ──► Cart           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products keep the order the provider gave them in; every listing is in
//! that order.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_product, validate_search_query, ValidationResult};

/// Validated, ordered product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    /// product id → index into `products`
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    /// Builds a catalog from provider records.
    ///
    /// ## Errors
    /// - Any record failing [`validate_product`]
    /// - Two records sharing an id ([`ValidationError::Duplicate`])
    pub fn new(products: Vec<Product>) -> ValidationResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            validate_product(product)?;
            if by_id.insert(product.id, index).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                });
            }
        }

        Ok(Catalog { products, by_id })
    }

    /// Decodes a JSON array of products and validates it.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::Catalog;
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{"id": 1, "name": "Espresso", "price_cents": 350, "category": "Beverages"}]"#,
    /// ).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Catalog::new(products)?)
    }

    /// The café sample menu shown on the POS screen.
    pub fn sample() -> Self {
        let products = vec![
            Product::new(1, "Espresso", Money::from_cents(350), "Beverages"),
            Product::new(2, "Cappuccino", Money::from_cents(450), "Beverages"),
            Product::new(3, "Croissant", Money::from_cents(300), "Pastries"),
            Product::new(4, "Chicken Sandwich", Money::from_cents(850), "Food"),
            Product::new(5, "Greek Salad", Money::from_cents(900), "Food"),
            Product::new(6, "Chocolate Cake", Money::from_cents(550), "Desserts"),
        ];
        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, p)| (p.id, index))
            .collect();

        Catalog { products, by_id }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.by_id.get(&id).map(|&index| &self.products[index])
    }

    /// Looks up a product that must exist, e.g. one a tile click refers to.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] when `id` is not in the catalog.
    pub fn require(&self, id: u32) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// All products, in provider order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose name contains `term`, ignoring case.
    ///
    /// A blank term matches everything.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::Catalog;
    ///
    /// let catalog = Catalog::sample();
    /// let hits = catalog.search("CAKE").unwrap();
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Chocolate Cake");
    /// ```
    pub fn search(&self, term: &str) -> ValidationResult<Vec<&Product>> {
        let needle = validate_search_query(term)?.to_lowercase();

        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Products in `category`, compared case-insensitively.
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        let category = category.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.category.to_lowercase() == category)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(1).unwrap().name, "Espresso");
        assert_eq!(catalog.get(3).unwrap().price(), Money::from_cents(300));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_sample_passes_validation() {
        let rebuilt = Catalog::new(Catalog::sample().products().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = Catalog::sample();
        assert_eq!(
            names(&catalog.search("ch").unwrap()),
            vec!["Chicken Sandwich", "Chocolate Cake"]
        );
        assert_eq!(names(&catalog.search("ESPRESSO").unwrap()), vec!["Espresso"]);
        assert!(catalog.search("pizza").unwrap().is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything_in_order() {
        let catalog = Catalog::sample();
        let all = catalog.search("   ").unwrap();
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_search_rejects_overlong_term() {
        let catalog = Catalog::sample();
        assert!(matches!(
            catalog.search(&"e".repeat(101)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog::sample();
        assert_eq!(
            names(&catalog.in_category("food")),
            vec!["Chicken Sandwich", "Greek Salad"]
        );
        assert!(catalog.in_category("Hardware").is_empty());
    }

    #[test]
    fn test_in_category_folds_non_ascii_case() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Éclair", Money::from_cents(400), "Pâtisserie"),
            Product::new(2, "Espresso", Money::from_cents(350), "Beverages"),
        ])
        .unwrap();

        assert_eq!(names(&catalog.in_category("PÂTISSERIE")), vec!["Éclair"]);
        assert_eq!(names(&catalog.in_category(" pâtisserie ")), vec!["Éclair"]);
    }

    #[test]
    fn test_require() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.require(3).unwrap().name, "Croissant");
        assert!(matches!(
            catalog.require(99),
            Err(CoreError::ProductNotFound(99))
        ));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.categories(),
            vec!["Beverages", "Pastries", "Food", "Desserts"]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Product::new(1, "Espresso", Money::from_cents(350), "Beverages"),
            Product::new(1, "Ristretto", Money::from_cents(350), "Beverages"),
        ]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": 1, "name": "", "price_cents": 1, "category": "X"}]"#),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }
}
