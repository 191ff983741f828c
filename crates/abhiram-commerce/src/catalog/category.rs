//! Category types for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A storefront product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fashion,
    Electronics,
    Home,
}

impl Category {
    /// Every category, in the order the storefront lists them.
    pub const ALL: [Category; 3] = [Category::Fashion, Category::Electronics, Category::Home];

    /// URL/data-attribute slug.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Electronics => "electronics",
            Category::Home => "home",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fashion => "Fashion",
            Category::Electronics => "Electronics",
            Category::Home => "Home & Kitchen",
        }
    }

    /// Look up a category by slug, ignoring case.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// Which products a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a category button value: `all` or a category slug.
    pub fn parse(value: &str) -> Result<Self, CommerceError> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value.parse().map(CategoryFilter::Only)
    }

    /// Map a footer link (`men`, `women`, `kids`, `beauty`, `home`,
    /// `electronics`) onto a listing filter. Unknown links show everything.
    pub fn from_footer_link(link: &str) -> Self {
        match link.trim().to_ascii_lowercase().as_str() {
            "men" | "women" | "kids" | "beauty" => CategoryFilter::Only(Category::Fashion),
            "home" => CategoryFilter::Only(Category::Home),
            "electronics" => CategoryFilter::Only(Category::Electronics),
            _ => CategoryFilter::All,
        }
    }

    /// Whether a product in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_slug() {
        assert_eq!(Category::from_slug("fashion"), Some(Category::Fashion));
        assert_eq!(Category::from_slug("HOME"), Some(Category::Home));
        assert_eq!(Category::from_slug("toys"), None);
        assert_eq!(
            "toys".parse::<Category>(),
            Err(CommerceError::UnknownCategory("toys".to_string()))
        );
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("electronics"),
            Ok(CategoryFilter::Only(Category::Electronics))
        );
        assert!(CategoryFilter::parse("garden").is_err());
    }

    #[test]
    fn test_footer_links() {
        for link in ["men", "women", "kids", "beauty"] {
            assert_eq!(
                CategoryFilter::from_footer_link(link),
                CategoryFilter::Only(Category::Fashion)
            );
        }
        assert_eq!(
            CategoryFilter::from_footer_link("home"),
            CategoryFilter::Only(Category::Home)
        );
        assert_eq!(
            CategoryFilter::from_footer_link("electronics"),
            CategoryFilter::Only(Category::Electronics)
        );
        assert_eq!(CategoryFilter::from_footer_link("sale"), CategoryFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Home));
        assert!(CategoryFilter::Only(Category::Home).matches(Category::Home));
        assert!(!CategoryFilter::Only(Category::Home).matches(Category::Fashion));
    }
}
