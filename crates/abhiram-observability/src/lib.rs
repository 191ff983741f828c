//! Observability for the ABHIRAM storefront.
//!
//! This crate provides:
//! - `SessionLogger` - Structured logging with shopping-session context
//! - `init_tracing` - stderr subscriber for the library's `tracing` events

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::init_tracing;
