//! Order types.

use crate::cart::Cart;
use crate::checkout::Address;
use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique order line identifier.
    pub id: OrderItemId,
    /// Product ID.
    pub product_id: ProductId,
    /// Product title at time of order.
    pub title: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
}

impl OrderItem {
    /// Line total (unit price times quantity), `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// A placed order.
///
/// Items and totals are copied out of the cart when the order is placed and
/// never change afterwards; only the status fields move.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer user ID (`None` for guest checkout).
    pub user_id: Option<UserId>,
    /// Items in the order.
    pub items: Vec<OrderItem>,
    /// Subtotal at placement.
    pub subtotal: Money,
    /// Tax at placement.
    pub tax: Money,
    /// Shipping at placement.
    pub shipping: Money,
    /// Grand total charged.
    pub total: Money,
    /// Order status.
    pub status: OrderStatus,
    /// Shipping address.
    pub shipping_address: Address,
    /// Payment method label (e.g., "card").
    pub payment_method: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Estimated delivery (Unix timestamp), once known.
    pub estimated_delivery: Option<i64>,
    /// Carrier tracking number, once shipped.
    pub tracking_number: Option<String>,
}

impl Order {
    /// Build an order from the current cart state.
    ///
    /// The cart's line items and derived totals are snapshotted as-is.
    /// An empty cart cannot become an order.
    pub fn from_cart(
        cart: &Cart,
        user_id: Option<UserId>,
        shipping_address: Address,
        payment_method: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let items = cart
            .items
            .iter()
            .map(|line| OrderItem {
                id: OrderItemId::generate(),
                product_id: line.product_id.clone(),
                title: line.title.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            user_id,
            items,
            subtotal: cart.totals.subtotal,
            tax: cart.totals.tax,
            shipping: cart.totals.shipping,
            total: cart.totals.total,
            status: OrderStatus::Pending,
            shipping_address,
            payment_method: payment_method.into(),
            created_at: now,
            updated_at: now,
            estimated_delivery: None,
            tracking_number: None,
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Update the order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }

    /// Mark the order shipped with a tracking number.
    pub fn mark_shipped(&mut self, tracking_number: impl Into<String>) {
        self.status = OrderStatus::Shipped;
        self.tracking_number = Some(tracking_number.into());
        self.updated_at = current_timestamp();
    }

    /// Set the estimated delivery time.
    pub fn with_estimated_delivery(mut self, timestamp: i64) -> Self {
        self.estimated_delivery = Some(timestamp);
        self
    }

    /// Cancel the order if its status still allows it.
    ///
    /// Returns whether the cancellation happened.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        self.updated_at = current_timestamp();
        true
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
