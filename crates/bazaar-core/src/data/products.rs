//! Mock product catalog.

use bazaar_commerce::catalog::Product;
use bazaar_commerce::ids::{ProductId, SellerId};
use bazaar_commerce::money::{Currency, Money};

// Catalog epoch: 2024-01-01T00:00:00Z. Listing dates fan out from here so
// newest-first ordering is meaningful in demos.
const BASE_TS: i64 = 1_704_067_200;
const DAY: i64 = 86_400;

fn entry(
    id: &str,
    title: &str,
    description: &str,
    price_cents: i64,
    rating: f64,
    stock: i64,
    brand: &str,
    category: &str,
    seller_id: &str,
    seller_name: &str,
    listed_day: i64,
) -> Product {
    let mut p = Product::new(title, Money::new(price_cents, Currency::USD))
        .with_description(description)
        .with_rating(rating)
        .with_stock(stock)
        .with_brand(brand)
        .with_category(category)
        .with_seller(SellerId::new(seller_id), seller_name)
        .with_thumbnail(format!("https://img.bazaar.test/{id}.jpg"))
        .with_created_at(BASE_TS + listed_day * DAY);
    p.id = ProductId::new(id);
    p
}

/// The demo catalog: ten products across five categories and three sellers.
pub fn sample_products() -> Vec<Product> {
    vec![
        entry(
            "prod-001",
            "Wireless Headphones",
            "Over-ear wireless headphones with 30-hour battery life and active noise cancelling.",
            12999,
            4.6,
            34,
            "Soundwave",
            "Electronics",
            "seller-volt",
            "Volt Supply",
            1,
        )
        .with_discount(15.0)
        .with_badge("bestseller"),
        entry(
            "prod-002",
            "Mechanical Keyboard",
            "Tenkeyless mechanical keyboard with hot-swappable switches and PBT keycaps.",
            8950,
            4.4,
            52,
            "Keyforge",
            "Electronics",
            "seller-volt",
            "Volt Supply",
            4,
        ),
        entry(
            "prod-003",
            "Smart Water Bottle",
            "Insulated bottle that tracks hydration and glows when it is time to drink.",
            4500,
            3.8,
            120,
            "Hydra",
            "Sports",
            "seller-volt",
            "Volt Supply",
            9,
        )
        .with_discount(20.0),
        entry(
            "prod-004",
            "Red Flannel Shirt",
            "Classic brushed-cotton flannel shirt in a relaxed fit.",
            3999,
            4.2,
            75,
            "North Thread",
            "Clothing",
            "seller-loom",
            "Loom & Co",
            2,
        ),
        entry(
            "prod-005",
            "Merino Wool Beanie",
            "Soft merino beanie, one size, available in six colors.",
            2450,
            4.7,
            200,
            "North Thread",
            "Clothing",
            "seller-loom",
            "Loom & Co",
            12,
        )
        .with_badge("new"),
        entry(
            "prod-006",
            "Linen Apron",
            "Stonewashed linen apron with leather straps, made for messy kitchens.",
            5600,
            4.9,
            18,
            "Loom & Co",
            "Home",
            "seller-loom",
            "Loom & Co",
            6,
        ),
        entry(
            "prod-007",
            "Ceramic Pour-Over Set",
            "Hand-glazed ceramic dripper and carafe for slow coffee mornings.",
            6800,
            4.5,
            26,
            "Kiln House",
            "Home",
            "seller-terra",
            "Terra Goods",
            3,
        )
        .with_discount(10.0),
        entry(
            "prod-008",
            "Desk Lamp",
            "Adjustable desk lamp with warm-to-cool dimming and a USB-C port.",
            5499,
            4.1,
            44,
            "Lumen",
            "Home",
            "seller-terra",
            "Terra Goods",
            8,
        ),
        entry(
            "prod-009",
            "Vitamin C Serum",
            "Brightening facial serum with 15% vitamin C and hyaluronic acid.",
            2899,
            4.0,
            90,
            "Glow Lab",
            "Beauty",
            "seller-terra",
            "Terra Goods",
            5,
        ),
        entry(
            "prod-010",
            "Yoga Mat",
            "Non-slip natural rubber yoga mat, 5mm, with alignment guides.",
            7200,
            4.3,
            61,
            "Balance",
            "Sports",
            "seller-terra",
            "Terra Goods",
            11,
        )
        .with_badge("bestseller"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let products = sample_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(sample_products(), sample_products());
    }

    #[test]
    fn test_all_products_priced_in_usd() {
        for p in sample_products() {
            assert_eq!(p.currency(), Currency::USD);
            assert!(p.price.is_positive());
        }
    }

    #[test]
    fn test_ratings_within_range() {
        for p in sample_products() {
            assert!((0.0..=5.0).contains(&p.rating));
        }
    }
}
