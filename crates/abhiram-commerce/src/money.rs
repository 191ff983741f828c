//! Money type and price-label parsing.
//!
//! Amounts are non-negative whole numbers in the currency's display unit
//! (the storefront prices in whole rupees). No decimal scaling is applied,
//! so `Money::new(2499, Currency::INR)` renders as `₹2,499`.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 4] = [Currency::INR, Currency::USD, Currency::EUR, Currency::GBP];

    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Insert grouping separators into a run of digits.
    ///
    /// INR uses the lakh/crore pattern (`1,00,000`); the others group by
    /// thousands.
    fn group_digits(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let width = match self {
            Currency::INR => 2,
            _ => 3,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(width);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(tail);
        groups.join(",")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole display units.
    pub amount: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a display label such as `"₹2,499"` into an amount in
    /// `currency`.
    ///
    /// A bare number takes `currency`; a label carrying another currency's
    /// symbol is a [`CommerceError::CurrencyMismatch`].
    pub fn parse(label: &str, currency: Currency) -> Result<Self, CommerceError> {
        let (amount, labelled) = parse_amount(label)?;
        match labelled {
            Some(other) if other != currency => Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: other.code().to_string(),
            }),
            _ => Ok(Self::new(amount, currency)),
        }
    }

    /// Format with symbol and no grouping (e.g., "₹2499").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.amount)
    }

    /// Format the way product cards show prices (e.g., "₹2,499").
    pub fn display_grouped(&self) -> String {
        format!(
            "{}{}",
            self.currency.symbol(),
            self.currency.group_digits(&self.amount.to_string())
        )
    }

    /// Try to add another Money value, returning None on currency
    /// mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.amount
            .checked_mul(u64::from(quantity))
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Whole-unit percentage of this amount, rounding halves up.
    pub fn percentage(&self, percent: u64) -> Option<Money> {
        let scaled = self.amount.checked_mul(percent)?.checked_add(50)?;
        Some(Money::new(scaled / 100, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parse a price label into a whole amount and the currency whose symbol
/// it carried, if any.
///
/// Surrounding whitespace and one currency symbol (leading or trailing)
/// are stripped, grouping commas are removed, and what remains must be a
/// non-empty run of ASCII digits.
pub fn parse_amount(label: &str) -> Result<(u64, Option<Currency>), CommerceError> {
    let mut text = label.trim();
    let mut labelled = None;
    for currency in Currency::ALL {
        let symbol = currency.symbol();
        if let Some(rest) = text
            .strip_prefix(symbol)
            .or_else(|| text.strip_suffix(symbol))
        {
            text = rest;
            labelled = Some(currency);
            break;
        }
    }

    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommerceError::parse(label));
    }

    let amount = digits.parse().map_err(|_| CommerceError::parse(label))?;
    Ok((amount, labelled))
}
