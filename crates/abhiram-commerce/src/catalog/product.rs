//! Product types and the storefront catalog.

use crate::catalog::{Category, CategoryFilter};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product as listed on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Listing category.
    pub category: Category,
    /// Current selling price.
    pub price: Money,
    /// Price before the factory-direct discount.
    pub original_price: Money,
    /// Image URL.
    pub image: String,
    /// Short description.
    pub description: String,
}

impl Product {
    /// Price as shown on the product card (e.g. "₹2,499").
    pub fn price_label(&self) -> String {
        self.price.display_grouped()
    }

    /// Whole-percent discount off the original price, rounded to nearest.
    pub fn discount_percent(&self) -> u64 {
        let original = u128::from(self.original_price.amount);
        let price = u128::from(self.price.amount);
        if original == 0 || price >= original {
            return 0;
        }
        u64::try_from(((original - price) * 100 + original / 2) / original).unwrap_or(100)
    }
}

/// The set of products a storefront sells.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list. Listing order follows the
    /// list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo storefront catalog.
    pub fn sample() -> Self {
        let inr = |amount| Money::new(amount, Currency::INR);
        Self::new(vec![
            Product {
                id: ProductId::new("1"),
                name: "Premium Cotton T-Shirt".to_string(),
                category: Category::Fashion,
                price: inr(499),
                original_price: inr(1299),
                image: "https://images.unsplash.com/photo-1523381210434-271e8be1f52b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_string(),
                description: "High-quality cotton t-shirt, perfect for casual wear.".to_string(),
            },
            Product {
                id: ProductId::new("2"),
                name: "Smart Watch Pro".to_string(),
                category: Category::Electronics,
                price: inr(2499),
                original_price: inr(5999),
                image: "https://images.unsplash.com/photo-1546868871-7041f2a55e12?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_string(),
                description: "Feature-rich smartwatch with health monitoring.".to_string(),
            },
            Product {
                id: ProductId::new("3"),
                name: "Non-Stick Cookware Set".to_string(),
                category: Category::Home,
                price: inr(1799),
                original_price: inr(4200),
                image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_string(),
                description: "Complete non-stick cookware set for your kitchen.".to_string(),
            },
        ])
    }

    /// Get a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Get a product by ID, failing if it is not listed.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products passing `filter`, in listing order.
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &Product> + '_ {
        self.products
            .iter()
            .filter(move |p| filter.matches(p.category))
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
