//! The filter/sort pipeline behind the catalog page.

use crate::catalog::Product;
use crate::search::{ProductFilter, SortBy};

/// Apply a filter specification to a product collection.
///
/// Pure and deterministic: no state, no side effects. Constraints narrow
/// intersectively; the surviving products are then stably sorted by the
/// active mode ([`SortBy::Newest`] when none is given), so products that
/// compare equal on the sort key keep their input order. Zero matches is a
/// valid outcome, not an error.
pub fn apply(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, filter))
        .cloned()
        .collect();

    sort(&mut results, filter.sort.unwrap_or_default());
    results
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(term) = filter.search_term() {
        let term = term.to_lowercase();
        let hit = product.title.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    if let Some(category) = filter.category_term() {
        if product.category != category {
            return false;
        }
    }

    if let Some(min) = filter.min_price {
        if product.price.amount_cents < min.amount_cents {
            return false;
        }
    }

    if let Some(max) = filter.max_price {
        if product.price.amount_cents > max.amount_cents {
            return false;
        }
    }

    if let Some(min_rating) = filter.min_rating {
        if product.rating < min_rating {
            return false;
        }
    }

    true
}

fn sort(products: &mut [Product], sort: SortBy) {
    match sort {
        SortBy::PriceAsc => {
            products.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents));
        }
        SortBy::PriceDesc => {
            products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
        }
        SortBy::RatingDesc => {
            products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortBy::Newest => {
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn product(
        id: &str,
        title: &str,
        category: &str,
        price_cents: i64,
        rating: f64,
        created_at: i64,
    ) -> Product {
        let mut p = Product::new(title, Money::new(price_cents, Currency::USD))
            .with_description(format!("A fine {title}"))
            .with_category(category)
            .with_rating(rating)
            .with_created_at(created_at);
        p.id = ProductId::new(id);
        p
    }

    fn sample() -> Vec<Product> {
        vec![
            product("p1", "Red Shirt", "Clothing", 2000, 4.2, 100),
            product("p2", "Blue Mug", "Home", 1500, 3.0, 200),
            product("p3", "Green Shirt", "Clothing", 3500, 4.8, 300),
            product("p4", "Desk Lamp", "Home", 4500, 4.5, 400),
        ]
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_no_filter_sorts_newest_first() {
        let results = apply(&sample(), &ProductFilter::new());
        assert_eq!(
            titles(&results),
            ["Desk Lamp", "Green Shirt", "Blue Mug", "Red Shirt"]
        );
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let filter = ProductFilter::new().with_search("shirt");
        let results = apply(&sample(), &filter);
        assert_eq!(titles(&results), ["Green Shirt", "Red Shirt"]);
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let filter = ProductFilter::new().with_search("home");
        let results = apply(&sample(), &filter);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let filter = ProductFilter::new().with_category("Clothing");
        assert_eq!(apply(&sample(), &filter).len(), 2);

        let filter = ProductFilter::new().with_category("clothing");
        assert!(apply(&sample(), &filter).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = ProductFilter::new()
            .with_min_price(Money::new(2000, Currency::USD))
            .with_max_price(Money::new(3500, Currency::USD));
        let results = apply(&sample(), &filter);
        assert_eq!(titles(&results), ["Green Shirt", "Red Shirt"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let filter = ProductFilter::new().with_min_rating(4.5);
        let results = apply(&sample(), &filter);
        assert_eq!(titles(&results), ["Desk Lamp", "Green Shirt"]);
    }

    #[test]
    fn test_constraints_intersect() {
        let filter = ProductFilter::new()
            .with_search("shirt")
            .with_category("Clothing")
            .with_min_rating(4.5);
        let results = apply(&sample(), &filter);
        assert_eq!(titles(&results), ["Green Shirt"]);
    }

    #[test]
    fn test_price_ascending() {
        let filter = ProductFilter::new().sorted_by(SortBy::PriceAsc);
        let results = apply(&sample(), &filter);
        assert_eq!(
            titles(&results),
            ["Blue Mug", "Red Shirt", "Green Shirt", "Desk Lamp"]
        );
    }

    #[test]
    fn test_price_descending() {
        let filter = ProductFilter::new().sorted_by(SortBy::PriceDesc);
        let results = apply(&sample(), &filter);
        assert_eq!(
            titles(&results),
            ["Desk Lamp", "Green Shirt", "Red Shirt", "Blue Mug"]
        );
    }

    #[test]
    fn test_rating_descending() {
        let filter = ProductFilter::new().sorted_by(SortBy::RatingDesc);
        let results = apply(&sample(), &filter);
        assert_eq!(
            titles(&results),
            ["Green Shirt", "Desk Lamp", "Red Shirt", "Blue Mug"]
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let products = vec![
            product("p1", "First", "A", 1000, 4.0, 50),
            product("p2", "Second", "A", 1000, 4.0, 50),
            product("p3", "Third", "A", 1000, 4.0, 50),
        ];
        let filter = ProductFilter::new().sorted_by(SortBy::PriceAsc);
        let results = apply(&products, &filter);
        assert_eq!(titles(&results), ["First", "Second", "Third"]);
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let filter = ProductFilter::new().with_category("Nonexistent");
        let results = apply(&sample(), &filter);
        assert!(results.is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let products = sample();
        let filter = ProductFilter::new().sorted_by(SortBy::PriceAsc);
        let _ = apply(&products, &filter);
        assert_eq!(titles(&products)[0], "Red Shirt");
    }
}
