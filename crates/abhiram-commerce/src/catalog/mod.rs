//! Catalog module.
//!
//! Contains product and category types and the demo catalog.

mod category;
mod product;

pub use category::{Category, CategoryFilter};
pub use product::{Catalog, Product};
