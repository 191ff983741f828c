//! Promoter links and commission.
//!
//! Promoters share a per-product link and earn a fixed share of the
//! selling price on each sale made through it.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{unix_millis, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Share of the selling price paid to the promoter, in percent.
pub const COMMISSION_PERCENT: u64 = 10;

/// Prefix of every promotion link.
pub const PROMOTION_BASE_URL: &str = "https://abhiram.com/promote/";

/// Commission earned on one sale at `price`, rounded to the nearest whole
/// unit.
pub fn commission_for(price: Money) -> Result<Money, CommerceError> {
    price
        .percentage(COMMISSION_PERCENT)
        .ok_or(CommerceError::Overflow)
}

/// A generated promotion for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Promotion {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Money,
    pub commission: Money,
    /// `ABH` + product id + last six digits of the creation time in
    /// milliseconds.
    pub code: String,
    pub url: String,
}

impl Promotion {
    /// Create a promotion stamped with the current time.
    pub fn for_product(product: &Product) -> Result<Self, CommerceError> {
        Self::at(product, unix_millis())
    }

    /// Create a promotion stamped with `millis` since the Unix epoch.
    pub fn at(product: &Product, millis: u128) -> Result<Self, CommerceError> {
        let code = format!("ABH{}{:06}", product.id, millis % 1_000_000);
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            price: product.price,
            commission: commission_for(product.price)?,
            url: format!("{}{}", PROMOTION_BASE_URL, code),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::Currency;

    #[test]
    fn test_commission() {
        let inr = |amount| Money::new(amount, Currency::INR);
        assert_eq!(commission_for(inr(2499)), Ok(inr(250)));
        assert_eq!(commission_for(inr(1799)), Ok(inr(180)));
        assert_eq!(commission_for(inr(0)), Ok(inr(0)));
        assert_eq!(commission_for(inr(u64::MAX)), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_promotion_link() {
        let catalog = Catalog::sample();
        let product = catalog.get(&ProductId::new("2")).unwrap();

        let promotion = Promotion::at(product, 1_760_000_123_456).unwrap();
        assert_eq!(promotion.code, "ABH2123456");
        assert_eq!(promotion.url, "https://abhiram.com/promote/ABH2123456");
        assert_eq!(promotion.commission.amount, 250);
    }

    #[test]
    fn test_promotion_code_pads_digits() {
        let catalog = Catalog::sample();
        let product = catalog.get(&ProductId::new("1")).unwrap();
        let promotion = Promotion::at(product, 1_000_000_000_042).unwrap();
        assert_eq!(promotion.code, "ABH1000042");
    }
}
