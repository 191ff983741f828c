//! Catalog search.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A validated, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Parse raw search box input. Surrounding whitespace is dropped and a
    /// blank term is rejected.
    pub fn parse(input: &str) -> Result<Self, CommerceError> {
        let term = input.trim();
        if term.is_empty() {
            return Err(CommerceError::EmptySearchTerm);
        }
        Ok(Self {
            term: term.to_string(),
        })
    }

    /// The trimmed term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Case-insensitive substring match on name, description and
    /// category slug.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.term.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.category.slug().contains(&needle)
    }
}

impl Catalog {
    /// Products matching `query`, in listing order.
    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Product> + 'a {
        self.products().iter().filter(move |p| query.matches(p))
    }
}
