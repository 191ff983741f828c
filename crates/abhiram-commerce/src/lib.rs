//! Cart store and storefront domain types for ABHIRAM.
//!
//! - **Cart**: ordered, in-memory cart with duplicate-aware add,
//!   idempotent remove, totals and checkout
//! - **Money**: whole-unit amounts and price-label parsing
//! - **Catalog**: the demo products, categories and listing filters
//! - **Search**: validated search terms over the catalog
//! - **Promotion**: promoter links and commission
//! - **Session**: one cart per shopping session
//!
//! # Example
//!
//! ```
//! use abhiram_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add("1", "Premium Cotton T-Shirt", "\u{20b9}499", "shirt.jpg")?;
//! cart.add("2", "Smart Watch Pro", "\u{20b9}2,499", "watch.jpg")?;
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.checkout()?.amount, 2998);
//! assert!(cart.is_empty());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod promotion;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{parse_amount, Currency, Money};

    pub use crate::cart::{Cart, CartLine, CartState};
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};
    pub use crate::checkout::Order;
    pub use crate::promotion::{commission_for, Promotion};
    pub use crate::search::SearchQuery;
    pub use crate::session::{SessionSummary, ShopSession};
}
