//! # Validation Module
//!
//! Input validation for data entering the core from outside: catalog records
//! supplied by the catalog provider, and search terms typed on the POS screen.
//!
//! Cart operations do not validate anything. They are total over their
//! inputs, so there is nothing here for them.
//!
//! ## Usage
//! ```rust
//! use tillbook_core::validation::{validate_price_cents, validate_search_query};
//!
//! assert!(validate_price_cents(350).is_ok());
//! assert_eq!(validate_search_query("  esp ").unwrap(), "esp");
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use tillbook_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Greek Salad").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product category. Must not be blank.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tillbook_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(300).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates one catalog record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price_cents(product.price_cents)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Croissant").is_ok());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("").unwrap(), "");
        assert_eq!(validate_search_query("  Cake ").unwrap(), "Cake");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(900).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::new(1, "Espresso", Money::from_cents(350), "Beverages");
        assert!(validate_product(&ok).is_ok());

        let no_category = Product::new(1, "Espresso", Money::from_cents(350), " ");
        assert!(matches!(
            validate_product(&no_category),
            Err(ValidationError::Required { .. })
        ));

        let negative = Product::new(1, "Espresso", Money::from_cents(-350), "Beverages");
        assert!(matches!(
            validate_product(&negative),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
