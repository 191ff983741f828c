//! Shopping cart module.
//!
//! Contains the cart store and its line type.

mod cart;

pub use cart::{Cart, CartLine, CartState, DEMO_CART_PRODUCTS};
