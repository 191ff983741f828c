//! Search module.

mod query;

pub use query::SearchQuery;
