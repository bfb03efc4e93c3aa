//! # onlineshop-core: Catalog Logic for a Computer Shop
//!
//! Pure, in-memory logic for a shop that sells computers assembled from
//! components and peripherals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Online Shop Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 onlineshop-cli (front end)                      │   │
//! │  │   stdin line ──► Command ──► Engine ──► printed result          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ onlineshop-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  product  │  │ computer  │  │ registry  │  │   │
//! │  │   │   kinds   │  │ Component │  │ slots +   │  │ 3 id maps │  │   │
//! │  │   │ namespace │  │ Peripheral│  │ summary   │  │ 7 ops     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Kinds (computer/component/peripheral) and id namespaces
//! - [`product`] - `Product` trait, components and peripherals
//! - [`computer`] - The computer aggregate and its summary
//! - [`messages`] - Confirmation values returned by the registry
//! - [`registry`] - The registry that keeps everything consistent
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use onlineshop_core::Registry;
//!
//! let mut shop = Registry::new();
//! shop.add_computer("Laptop", 1, "Dell", "XPS", 1000.0).unwrap();
//! shop.add_component(1, 1, "PowerSupply", "Corsair", "RM750", 100.0, 100.0, 3)
//!     .unwrap();
//!
//! let summary = shop.buy_best_computer(1500.0).unwrap();
//! assert!(summary.starts_with("Overall Performance: 115.00. Price: 1100.00"));
//! assert_eq!(shop.computer_count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod computer;
pub mod error;
pub mod messages;
pub mod product;
pub mod registry;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use computer::Computer;
pub use error::{ShopError, ShopResult};
pub use messages::Confirmation;
pub use product::{Component, Peripheral, Product, ProductInfo};
pub use registry::Registry;
pub use types::*;
