//! Full storefront flows over the mock dataset.

use std::sync::Arc;

use bazaar_core::prelude::*;
use bazaar_kv::{FileStore, MemoryStore};

fn shop_over(store: Arc<dyn bazaar_kv::KeyValueStore>) -> Storefront {
    Storefront::builder(store)
        .with_products(data::sample_products())
        .with_users(data::sample_users())
        .build()
}

fn shop() -> Storefront {
    shop_over(Arc::new(MemoryStore::new()))
}

#[test]
fn browse_filter_add_checkout_track() {
    let mut shop = shop();

    // Browse: newest listings first by default.
    let listings = shop.search(&ProductFilter::new());
    assert_eq!(listings.len(), shop.products().len());
    assert!(listings
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));

    // Narrow down to affordable home goods.
    let filter = ProductFilter::new()
        .with_category("Home")
        .with_max_price(Money::new(6000, Currency::USD))
        .sorted_by(SortBy::PriceAsc);
    let results = shop.search(&filter);
    assert!(!results.is_empty());
    assert!(results.iter().all(|p| p.category == "Home"));

    // Sign in and fill the cart.
    shop.login("maya@example.com", "hunter2").unwrap();
    let lamp = results
        .iter()
        .find(|p| p.title == "Desk Lamp")
        .unwrap()
        .clone();
    shop.cart_mut().add_item(&lamp, 2).unwrap();
    assert_eq!(shop.cart().totals().total_items, 2);

    // Checkout clears the cart and logs the order for the user.
    let address = Address::new("12 Cedar Rd", "Portland", "OR", "97201", "USA");
    let order = shop.place_order(address, "card").unwrap();
    assert!(shop.cart().cart().is_empty());

    let user_id = shop.current_user().unwrap().id.clone();
    let mine = shop.orders_for_user(&user_id);
    assert_eq!(mine.len(), 1);

    // The tracking page can find it by id.
    assert!(shop.order(&order.id).is_some());
    assert_eq!(order.subtotal.amount_cents, 2 * 5499);
}

#[test]
fn cart_survives_restart_on_a_file_store() {
    let path = std::env::temp_dir().join(format!(
        "bazaar-storefront-{}-{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));

    {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let mut shop = shop_over(store);
        let product = shop.products()[0].clone();
        shop.cart_mut().add_item(&product, 3).unwrap();
        shop.login("maya@example.com", "pw").unwrap();
    }

    // A fresh process over the same file sees cart and session.
    let store = Arc::new(FileStore::open(&path).unwrap());
    let shop = shop_over(store);
    assert_eq!(shop.cart().totals().total_items, 3);
    assert_eq!(
        shop.current_user().map(|u| u.email.as_str()),
        Some("maya@example.com")
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn seller_dashboard_reflects_orders() {
    let mut shop = shop();
    let volt = SellerId::new("seller-volt");

    // No orders yet: listings exist, revenue is zero.
    let stats = shop.seller_stats(&volt).unwrap();
    assert_eq!(stats.total_products, 3);
    assert_eq!(stats.total_orders, 0);
    assert!(stats.total_revenue.is_zero());

    // Someone buys Volt's discounted headphones.
    let headphones = shop
        .product(&ProductId::new("prod-001"))
        .unwrap()
        .clone();
    shop.cart_mut().add_item(&headphones, 1).unwrap();
    shop.place_order(Address::default(), "card").unwrap();

    let stats = shop.seller_stats(&volt).unwrap();
    assert_eq!(stats.total_orders, 1);
    // Revenue counts the captured (discounted) line price.
    assert_eq!(stats.total_revenue, headphones.sale_price());

    let sales = shop.seller_daily_sales(&volt).unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].orders, 1);
}

#[test]
fn discounted_price_is_captured_at_add_time() {
    let mut shop = shop();
    let headphones = shop
        .product(&ProductId::new("prod-001"))
        .unwrap()
        .clone();
    assert!(headphones.is_on_sale());

    shop.cart_mut().add_item(&headphones, 1).unwrap();
    let line = &shop.cart().cart().items[0];
    // 15% off 12999 = 11049.15, rounded to the cent.
    assert_eq!(line.unit_price.amount_cents, 11049);
}

#[test]
fn role_gates_resolve_from_the_directory() {
    let mut shop = shop();

    shop.login("victor@voltsupply.com", "pw").unwrap();
    assert!(shop.current_user().unwrap().is_seller());

    shop.logout().unwrap();
    shop.login("maya@example.com", "pw").unwrap();
    assert!(!shop.current_user().unwrap().is_seller());
}
