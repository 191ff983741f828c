//! Cart and cart line types.

use crate::catalog::Catalog;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Products the demo storefront starts its cart with.
pub const DEMO_CART_PRODUCTS: [&str; 2] = ["1", "2"];

/// Logical state of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartState {
    /// No lines.
    Empty,
    /// At least one line.
    NonEmpty,
}

/// One product entry in the cart.
///
/// `name`, `unit_price` and `image_ref` are captured when the product is
/// first added and are never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product this line is for.
    pub product_id: ProductId,
    /// Display name at time of insertion.
    pub name: String,
    /// Unit price at time of insertion.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Display asset reference.
    pub image_ref: String,
}

impl CartLine {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .checked_mul(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// All mutation goes through [`Cart::add`], [`Cart::add_priced`],
/// [`Cart::remove`], [`Cart::clear`] and [`Cart::place_order`]; a call that
/// returns an error leaves the cart untouched.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in INR.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create the cart the demo storefront starts with: one of each
    /// product in [`DEMO_CART_PRODUCTS`], taken from the sample catalog.
    pub fn demo() -> Self {
        let catalog = Catalog::sample();
        let lines = DEMO_CART_PRODUCTS
            .iter()
            .filter_map(|id| catalog.get(&ProductId::new(*id)))
            .map(|product| CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity: 1,
                image_ref: product.image.clone(),
            })
            .collect();
        Self {
            lines,
            currency: Currency::INR,
        }
    }

    /// Add one unit of a product whose price is given as display text
    /// (e.g. `"₹2,499"`).
    ///
    /// A label carrying another currency's symbol is rejected with
    /// [`CommerceError::CurrencyMismatch`]; bare digits take the cart's
    /// currency.
    ///
    /// If the product is already in the cart its quantity goes up by one
    /// and the stored name, price and image are kept. Returns the new total
    /// item count.
    pub fn add(
        &mut self,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price_label: &str,
        image_ref: impl Into<String>,
    ) -> Result<u64, CommerceError> {
        let product_id = product_id.into();
        if product_id.is_empty() {
            return Err(CommerceError::InvalidProductId);
        }
        let unit_price = Money::parse(price_label, self.currency)?;
        self.add_priced(product_id, name, unit_price, image_ref)
    }

    /// Add one unit of a product with an already-parsed price.
    pub fn add_priced(
        &mut self,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        image_ref: impl Into<String>,
    ) -> Result<u64, CommerceError> {
        let product_id = product_id.into();
        if product_id.is_empty() {
            return Err(CommerceError::InvalidProductId);
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            existing.quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            tracing::debug!(
                product_id = %product_id,
                quantity = existing.quantity,
                "incremented cart line"
            );
        } else {
            let line = CartLine {
                product_id,
                name: name.into(),
                unit_price,
                quantity: 1,
                image_ref: image_ref.into(),
            };
            tracing::debug!(
                product_id = %line.product_id,
                unit_price = line.unit_price.amount,
                "added cart line"
            );
            self.lines.push(line);
        }

        Ok(self.total_item_count())
    }

    /// Remove the whole line for a product.
    ///
    /// Removing a product that is not in the cart is a no-op. Returns
    /// whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        let removed = self.lines.len() < len_before;
        tracing::debug!(product_id = %product_id, removed, "remove from cart");
        removed
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("cleared cart");
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price times quantity across all lines.
    pub fn grand_total(&self) -> Result<Money, CommerceError> {
        self.lines
            .iter()
            .try_fold(Money::zero(self.currency), |acc, line| {
                acc.checked_add(&line.line_total()?)
                    .ok_or(CommerceError::Overflow)
            })
    }

    /// Finalize the cart: report the total and empty the cart.
    ///
    /// Fails with [`CommerceError::EmptyCart`] without touching anything
    /// when there is nothing to check out.
    pub fn checkout(&mut self) -> Result<Money, CommerceError> {
        self.place_order().map(|order| order.total)
    }

    /// Like [`Cart::checkout`], but returns the full order receipt.
    pub fn place_order(&mut self) -> Result<Order, CommerceError> {
        if self.lines.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let total = self.grand_total()?;
        let item_count = self.total_item_count();
        let lines = std::mem::take(&mut self.lines);
        let order = Order::new(lines, item_count, total);

        tracing::info!(
            order_id = %order.id,
            items = item_count,
            total = total.amount,
            "checkout complete"
        );
        Ok(order)
    }

    /// Current logical state.
    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency all lines are priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inr(amount: u64) -> Money {
        Money::new(amount, Currency::INR)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.grand_total(), Ok(inr(0)));
    }

    #[test]
    fn test_demo_cart() {
        let cart = Cart::demo();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].name, "Premium Cotton T-Shirt");
        assert_eq!(cart.lines()[1].unit_price, inr(2499));
        assert_eq!(cart.grand_total(), Ok(inr(2998)));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        for expected in 1..=3 {
            let count = cart.add("p1", "Shirt", "499", "shirt.jpg").unwrap();
            assert_eq!(count, expected);
        }

        assert_eq!(cart.len(), 1);
        let line = cart.get(&ProductId::new("p1")).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.grand_total(), Ok(inr(1497)));
    }

    #[test]
    fn test_first_write_wins() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "\u{20b9}499", "a.jpg").unwrap();
        cart.add("p1", "Renamed Shirt", "\u{20b9}999", "b.jpg").unwrap();

        let line = cart.get(&ProductId::new("p1")).unwrap();
        assert_eq!(line.name, "Shirt");
        assert_eq!(line.unit_price, inr(499));
        assert_eq!(line.image_ref, "a.jpg");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add("b", "B", "1", "").unwrap();
        cart.add("a", "A", "2", "").unwrap();
        cart.add("b", "B", "1", "").unwrap();
        cart.add("c", "C", "3", "").unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_add_parses_grouped_price() {
        let mut cart = Cart::new();
        cart.add("2", "Smart Watch Pro", "\u{20b9}2,499", "watch.jpg").unwrap();
        assert_eq!(cart.lines()[0].unit_price, inr(2499));
    }

    #[test]
    fn test_malformed_price_leaves_cart_unchanged() {
        let mut cart = Cart::demo();
        let before = cart.clone();

        let result = cart.add("3", "Cookware", "N/A", "pan.jpg");
        assert_eq!(result, Err(CommerceError::parse("N/A")));
        assert_eq!(cart, before);

        let result = cart.add("1", "Premium Cotton T-Shirt", "oops", "");
        assert!(matches!(result, Err(CommerceError::Parse { .. })));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_product_id_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add("", "Nameless", "10", ""),
            Err(CommerceError::InvalidProductId)
        );
        assert_eq!(
            cart.add_priced("", "Nameless", inr(10), ""),
            Err(CommerceError::InvalidProductId)
        );
        assert!(cart.is_empty());

        // Only the empty id is invalid; ids are otherwise opaque.
        assert_eq!(cart.add(" ", "Spaced", "10", ""), Ok(1));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new();
        let result = cart.add_priced("p1", "Shirt", Money::new(5, Currency::USD), "");
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_label_currency_must_match_cart() {
        let mut cart = Cart::with_currency(Currency::USD);
        let result = cart.add("2", "Smart Watch Pro", "\u{20b9}2,499", "watch.jpg");
        assert_eq!(
            result,
            Err(CommerceError::CurrencyMismatch {
                expected: "USD".to_string(),
                got: "INR".to_string(),
            })
        );
        assert!(cart.is_empty());

        assert_eq!(cart.add("2", "Smart Watch Pro", "$2,499", "watch.jpg"), Ok(1));
        assert_eq!(cart.add("3", "Cookware", "1799", "pan.jpg"), Ok(2));
        assert_eq!(cart.grand_total(), Ok(Money::new(2499 + 1799, Currency::USD)));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "499", "").unwrap();
        cart.add("p1", "Shirt", "499", "").unwrap();
        cart.add("p2", "Watch", "2499", "").unwrap();

        let id = ProductId::new("p1");
        assert!(cart.remove(&id));
        assert!(!cart.remove(&id));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_remove_last_line_empties_cart() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "499", "").unwrap();
        assert_eq!(cart.state(), CartState::NonEmpty);
        cart.remove(&ProductId::new("p1"));
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "499", "").unwrap();
        cart.add("p1", "Shirt", "499", "").unwrap();
        cart.add("p2", "Watch", "2,499", "").unwrap();
        cart.add("p3", "Free sticker", "0", "").unwrap();

        assert_eq!(cart.total_item_count(), 4);
        assert_eq!(cart.grand_total(), Ok(inr(2 * 499 + 2499)));
    }

    #[test]
    fn test_checkout_returns_total_and_clears() {
        let mut cart = Cart::demo();
        assert_eq!(cart.checkout(), Ok(inr(2998)));
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CommerceError::EmptyCart));
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_place_order_snapshot() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "499", "").unwrap();
        cart.add("p1", "Shirt", "499", "").unwrap();

        let order = cart.place_order().unwrap();
        assert_eq!(order.item_count, 2);
        assert_eq!(order.total, inr(998));
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_priced("big", "Big", inr(u64::MAX), "").unwrap();
        cart.add_priced("big", "Big", inr(u64::MAX), "").unwrap();
        let before = cart.clone();

        assert_eq!(cart.grand_total(), Err(CommerceError::Overflow));
        assert_eq!(cart.checkout(), Err(CommerceError::Overflow));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::new();
        cart.add("p1", "Shirt", "1", "").unwrap();
        cart.lines[0].quantity = u32::MAX;
        assert_eq!(cart.add("p1", "Shirt", "1", ""), Err(CommerceError::Overflow));
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }
}
