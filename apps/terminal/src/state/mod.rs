//! # State Module
//!
//! Application state for the POS screen, split into focused state types so
//! each command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐    │
//! │  │ CatalogState │ │  CartState   │ │  OrderState  │ │ ConfigState  │    │
//! │  │              │ │              │ │              │ │              │    │
//! │  │  Catalog     │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  store name  │    │
//! │  │  Customers   │ │    Cart>>    │ │  ReceiptLog>>│ │  currency    │    │
//! │  │  Insights    │ │              │ │              │ │  (read-only) │    │
//! │  │  (read-only) │ │              │ │              │ │              │    │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘    │
//! │                                                                         │
//! │  ┌──────────────┐                                                       │
//! │  │SettingsState │  Arc<Mutex<AiSettings>>                               │
//! │  └──────────────┘                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod orders;
mod settings;

pub use cart::{CartResponse, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use orders::{OrderState, ReceiptLog};
pub use settings::SettingsState;

/// Everything one POS screen session owns.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub orders: OrderState,
    pub settings: SettingsState,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(catalog: CatalogState, config: ConfigState) -> Self {
        AppState {
            catalog,
            cart: CartState::new(),
            orders: OrderState::new(),
            settings: SettingsState::new(),
            config,
        }
    }
}
