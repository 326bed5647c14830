//! Filter specification types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort modes for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by rating, high to low.
    RatingDesc,
    /// Sort by newest first. The default when no mode is given.
    #[default]
    Newest,
}

impl SortBy {
    /// Get the wire/query-string form of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::RatingDesc => "rating-desc",
            SortBy::Newest => "newest",
        }
    }

    /// Parse the wire/query-string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price-asc" => Some(SortBy::PriceAsc),
            "price-desc" => Some(SortBy::PriceDesc),
            "rating-desc" => Some(SortBy::RatingDesc),
            "newest" => Some(SortBy::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::PriceAsc => "Price: Low to High",
            SortBy::PriceDesc => "Price: High to Low",
            SortBy::RatingDesc => "Top Rated",
            SortBy::Newest => "Newest",
        }
    }
}

/// A catalog filter specification.
///
/// Every field is optional; an absent (or empty-string) field constrains
/// nothing. Active fields are intersective: a product must satisfy all of
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductFilter {
    /// Free-text search over title, description, and category.
    pub search: Option<String>,
    /// Exact category match (case-sensitive).
    pub category: Option<String>,
    /// Keep products priced at least this much.
    pub min_price: Option<Money>,
    /// Keep products priced at most this much.
    pub max_price: Option<Money>,
    /// Keep products rated at least this much.
    pub min_rating: Option<f64>,
    /// Sort mode. `None` means [`SortBy::Newest`].
    pub sort: Option<SortBy>,
}

impl ProductFilter {
    /// The unconstrained filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the category constraint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the minimum price bound.
    pub fn with_min_price(mut self, min: Money) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Set the maximum price bound.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Set the sort mode.
    pub fn sorted_by(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The search term, if it actually constrains anything.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// The category constraint, if it actually constrains anything.
    pub fn category_term(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Check if any narrowing constraint is active (sort alone is not one).
    pub fn has_constraints(&self) -> bool {
        self.search_term().is_some()
            || self.category_term().is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_rating.is_some()
    }
}
