//! Session-scoped cart ownership.
//!
//! A [`ShopSession`] owns exactly one [`Cart`]. Sessions share nothing, so
//! a host serving several shoppers keeps one session per shopper.

use crate::cart::Cart;
use crate::ids::{unix_seconds, SessionId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// A shopping session and the cart it owns.
#[derive(Debug)]
pub struct ShopSession {
    id: SessionId,
    cart: Cart,
    opened_at: i64,
}

/// What was left when a session closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    /// Distinct products still in the cart.
    pub lines_discarded: usize,
    /// Items still in the cart.
    pub items_discarded: u64,
    pub opened_at: i64,
    pub closed_at: i64,
}

impl ShopSession {
    /// Open a session with an empty cart.
    pub fn open(currency: Currency) -> Self {
        Self::with_cart(Cart::with_currency(currency))
    }

    /// Open a session pre-seeded with the demo cart.
    pub fn open_with_demo_cart() -> Self {
        Self::with_cart(Cart::demo())
    }

    /// Open a session around an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        let session = Self {
            id: SessionId::generate(),
            cart,
            opened_at: unix_seconds(),
        };
        tracing::debug!(session_id = %session.id, lines = session.cart.len(), "session opened");
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Tear the session down. The cart is discarded, not persisted.
    pub fn close(self) -> SessionSummary {
        let summary = SessionSummary {
            id: self.id,
            lines_discarded: self.cart.len(),
            items_discarded: self.cart.total_item_count(),
            opened_at: self.opened_at,
            closed_at: unix_seconds(),
        };
        tracing::debug!(
            session_id = %summary.id,
            items_discarded = summary.items_discarded,
            "session closed"
        );
        summary
    }
}
