//! Order receipt types.

use crate::cart::CartLine;
use crate::ids::{unix_seconds, OrderId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A checked-out cart.
///
/// Nothing is charged or reserved; the order only records what the cart
/// held and what it came to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Lines as they were at checkout.
    pub lines: Vec<CartLine>,
    /// Sum of line quantities.
    pub item_count: u64,
    /// Grand total charged.
    pub total: Money,
    /// Unix timestamp of checkout.
    pub placed_at: i64,
}

impl Order {
    pub(crate) fn new(lines: Vec<CartLine>, item_count: u64, total: Money) -> Self {
        Self {
            id: OrderId::generate(),
            lines,
            item_count,
            total,
            placed_at: unix_seconds(),
        }
    }
}
