//! Storefront wiring and lifecycle.

use std::sync::Arc;

use bazaar_auth::{AuthError, Role, SessionStore, User};
use bazaar_commerce::cart::{CartEngine, PricingRules};
use bazaar_commerce::catalog::Product;
use bazaar_commerce::checkout::{Address, Order};
use bazaar_commerce::error::CommerceError;
use bazaar_commerce::ids::{ProductId, SellerId, UserId};
use bazaar_commerce::search::{apply, ProductFilter};
use bazaar_commerce::seller::{daily_sales, DailySales, SellerStats};
use bazaar_kv::KeyValueStore;

/// Builder for [`Storefront`].
///
/// # Example
///
/// ```rust,ignore
/// let shop = Storefront::builder(store)
///     .with_products(data::sample_products())
///     .with_users(data::sample_users())
///     .build();
/// ```
pub struct StorefrontBuilder {
    store: Arc<dyn KeyValueStore>,
    products: Vec<Product>,
    users: Vec<User>,
    rules: PricingRules,
}

impl StorefrontBuilder {
    /// Start a builder over the given storage backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            products: Vec::new(),
            users: Vec::new(),
            rules: PricingRules::default(),
        }
    }

    /// Set the product catalog.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Set the user directory.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Override the pricing rules.
    pub fn with_pricing_rules(mut self, rules: PricingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the storefront, restoring cart and session from storage.
    pub fn build(self) -> Storefront {
        let cart = CartEngine::open(self.store.clone(), self.rules);
        let session = SessionStore::open(self.store);
        Storefront {
            catalog: self.products,
            directory: self.users,
            cart,
            session,
            orders: Vec::new(),
        }
    }
}

/// The storefront: catalog, cart engine, session store, and order log
/// behind one explicitly constructed value.
pub struct Storefront {
    catalog: Vec<Product>,
    directory: Vec<User>,
    cart: CartEngine,
    session: SessionStore,
    orders: Vec<Order>,
}

impl Storefront {
    /// Start building a storefront over a storage backend.
    pub fn builder(store: Arc<dyn KeyValueStore>) -> StorefrontBuilder {
        StorefrontBuilder::new(store)
    }

    // --- catalog ---

    /// The full product catalog.
    pub fn products(&self) -> &[Product] {
        &self.catalog
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| &p.id == id)
    }

    /// Distinct category tags, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .catalog
            .iter()
            .map(|p| p.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Run the filter/sort pipeline over the catalog.
    pub fn search(&self, filter: &ProductFilter) -> Vec<Product> {
        apply(&self.catalog, filter)
    }

    // --- cart ---

    /// The cart engine, read-only.
    pub fn cart(&self) -> &CartEngine {
        &self.cart
    }

    /// The cart engine, for mutations.
    pub fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    // --- session ---

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Sign in against the user directory. The password is not verified
    /// (mock flow).
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        self.session.login(email, password, &self.directory)
    }

    /// Register a new account, add it to the directory, and sign it in.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<User, AuthError> {
        let user = self.session.register(name, email, role, &self.directory)?;
        self.directory.push(user.clone());
        Ok(user)
    }

    /// Sign out.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.session.logout()
    }

    // --- checkout ---

    /// Place an order from the current cart, then clear the cart.
    ///
    /// The order is attributed to the signed-in user when there is one;
    /// guest checkout is allowed.
    pub fn place_order(
        &mut self,
        shipping_address: Address,
        payment_method: impl Into<String>,
    ) -> Result<Order, CommerceError> {
        let user_id: Option<UserId> = self.session.current_user().map(|u| u.id.clone());
        let order = Order::from_cart(self.cart.cart(), user_id, shipping_address, payment_method)?;
        self.cart.clear()?;
        self.orders.push(order.clone());
        tracing::info!(order = %order.id, total_cents = order.total.amount_cents, "order placed");
        Ok(order)
    }

    /// All orders placed this run, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders attributed to a given user.
    pub fn orders_for_user(&self, user_id: &UserId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.user_id.as_ref() == Some(user_id))
            .collect()
    }

    /// Look up an order by id (for the tracking page).
    pub fn order(&self, id: &bazaar_commerce::ids::OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    // --- seller dashboard ---

    /// Headline stats for one seller.
    pub fn seller_stats(&self, seller_id: &SellerId) -> Result<SellerStats, CommerceError> {
        SellerStats::compute(
            seller_id,
            &self.catalog,
            &self.orders,
            self.cart.rules().currency,
        )
    }

    /// Daily sales buckets for one seller, oldest first.
    pub fn seller_daily_sales(
        &self,
        seller_id: &SellerId,
    ) -> Result<Vec<DailySales>, CommerceError> {
        daily_sales(
            seller_id,
            &self.catalog,
            &self.orders,
            self.cart.rules().currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use bazaar_kv::MemoryStore;

    fn shop() -> Storefront {
        Storefront::builder(Arc::new(MemoryStore::new()))
            .with_products(data::sample_products())
            .with_users(data::sample_users())
            .build()
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let shop = shop();
        let categories = shop.categories();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert!(!categories.is_empty());
    }

    #[test]
    fn test_product_lookup() {
        let shop = shop();
        let first = &shop.products()[0];
        assert_eq!(shop.product(&first.id), Some(first));
        assert!(shop.product(&ProductId::new("no-such")).is_none());
    }

    #[test]
    fn test_guest_order_has_no_user() {
        let mut shop = shop();
        let product = shop.products()[0].clone();
        shop.cart_mut().add_item(&product, 1).unwrap();

        let order = shop
            .place_order(Address::default(), "card")
            .unwrap();
        assert!(order.user_id.is_none());
    }

    #[test]
    fn test_register_extends_directory() {
        let mut shop = shop();
        shop.register("New User", "new@example.com", Role::Customer)
            .unwrap();
        shop.logout().unwrap();

        // The account can sign back in now.
        assert!(shop.login("new@example.com", "pw").is_ok());
    }
}
