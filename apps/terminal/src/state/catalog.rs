//! # Catalog State
//!
//! Read-only reference data loaded once when the screen starts: the product
//! catalog, the customer directory and the insights list.

use std::fs;

use tillbook_core::{Catalog, CustomerDirectory, InsightDirectory};
use tracing::info;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Read-only after construction, no locking needed.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub customers: CustomerDirectory,
    pub insights: InsightDirectory,
}

impl CatalogState {
    pub fn new(catalog: Catalog, customers: CustomerDirectory) -> Self {
        CatalogState {
            catalog,
            customers,
            insights: InsightDirectory::sample(),
        }
    }

    /// Sample menu and sample customers.
    pub fn sample() -> Self {
        CatalogState::new(Catalog::sample(), CustomerDirectory::sample())
    }

    /// Loads the catalog named by `config.catalog_path`, or the sample menu.
    pub fn load(config: &ConfigState) -> Result<Self, ApiError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                let catalog = Catalog::from_json(&json)?;
                info!(path = %path.display(), products = catalog.len(), "Catalog loaded from file");
                catalog
            }
            None => {
                let catalog = Catalog::sample();
                info!(products = catalog.len(), "Using sample catalog");
                catalog
            }
        };

        Ok(CatalogState::new(catalog, CustomerDirectory::sample()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::path::PathBuf;

    #[test]
    fn test_load_defaults_to_sample() {
        let state = CatalogState::load(&ConfigState::default()).unwrap();
        assert_eq!(state.catalog.len(), 6);
        assert_eq!(state.customers.customers().len(), 4);
        assert_eq!(state.insights.insights().len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/nonexistent/tillbook/menu.json")),
            ..ConfigState::default()
        };
        let err = CatalogState::load(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
