//! Checkout module.
//!
//! Contains the order receipt produced when a cart is checked out.

mod order;

pub use order::Order;
