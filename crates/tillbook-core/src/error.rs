//! # Error Types
//!
//! Domain-specific error types for tillbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tillbook-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog, order, settings failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in app)                                          │
//! │  └── ApiError         - What the POS screen sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → POS screen             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail: an absent product id is a no-op,
//! and over-decrement clamps at zero. Errors only exist at the seams.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Tried to complete an order with nothing in the cart.
    ///
    /// ## When This Occurs
    /// ```text
    /// Current Order (empty)
    ///      │
    ///      ▼
    /// Complete Order ──► EmptyCart
    ///      │
    ///      ▼
    /// Cart untouched, nothing sent to the sink
    /// ```
    #[error("Cannot complete an order with an empty cart")]
    EmptyCart,

    /// The order sink refused the order. The cart is kept as-is.
    #[error("Order rejected: {reason}")]
    OrderRejected { reason: String },

    /// Catalog data could not be decoded.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// No AI model/parameter with this id in the settings store.
    #[error("Setting not found: {0}")]
    SettingNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Slider value outside its bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfBounds { field: String, min: f64, max: f64 },

    /// Slider value between two steps.
    #[error("{field} must be a multiple of {step} from {min}")]
    OffStep { field: String, min: f64, step: f64 },

    /// Value of the wrong kind (e.g., a number for a toggle).
    #[error("{field} expects a {expected} value")]
    WrongType { field: String, expected: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two catalog entries with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound(42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot complete an order with an empty cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "product id '3' already exists");
    }

    #[test]
    fn test_settings_validation_messages() {
        let err = ValidationError::NotAllowed {
            field: "privacy-level".to_string(),
            allowed: vec!["standard".to_string(), "high".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "privacy-level must be one of: [\"standard\", \"high\"]"
        );

        let err = ValidationError::OutOfBounds {
            field: "confidence-threshold".to_string(),
            min: 0.5,
            max: 0.95,
        };
        assert_eq!(
            err.to_string(),
            "confidence-threshold must be between 0.5 and 0.95"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
