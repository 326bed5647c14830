//! Seller dashboard aggregates.
//!
//! Derived views over the catalog and the order log for a single seller.
//! Revenue attribution is per order line: a multi-seller order contributes
//! only the lines that belong to this seller.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::{ProductId, SellerId};
use crate::money::{Currency, Money};

/// Headline numbers for the seller dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerStats {
    /// Products this seller lists.
    pub total_products: i64,
    /// Orders containing at least one of this seller's products.
    pub total_orders: i64,
    /// Revenue across this seller's order lines.
    pub total_revenue: Money,
    /// Mean rating across this seller's products (0 when none).
    pub average_rating: f64,
}

impl SellerStats {
    /// Compute stats for one seller from the catalog and the order log.
    ///
    /// Cancelled orders are excluded from order and revenue counts.
    pub fn compute(
        seller_id: &SellerId,
        products: &[Product],
        orders: &[Order],
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let listed: Vec<&Product> = products
            .iter()
            .filter(|p| &p.seller_id == seller_id)
            .collect();
        let listed_ids: HashSet<&ProductId> = listed.iter().map(|p| &p.id).collect();

        let mut total_orders = 0;
        let mut total_revenue = Money::zero(currency);
        for order in orders {
            if order.status == crate::checkout::OrderStatus::Cancelled {
                continue;
            }
            let mut counted = false;
            for item in &order.items {
                if !listed_ids.contains(&item.product_id) {
                    continue;
                }
                counted = true;
                let line = item.line_total().ok_or(CommerceError::Overflow)?;
                total_revenue = total_revenue
                    .try_add(&line)
                    .ok_or(CommerceError::Overflow)?;
            }
            if counted {
                total_orders += 1;
            }
        }

        let average_rating = if listed.is_empty() {
            0.0
        } else {
            listed.iter().map(|p| p.rating).sum::<f64>() / listed.len() as f64
        };

        Ok(Self {
            total_products: listed.len() as i64,
            total_orders,
            total_revenue,
            average_rating,
        })
    }
}

/// Revenue and order count for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    /// The calendar day (UTC).
    pub date: NaiveDate,
    /// Revenue across this seller's lines placed that day.
    pub revenue: Money,
    /// Orders containing this seller's products placed that day.
    pub orders: i64,
}

/// Bucket a seller's sales by calendar day, oldest first.
///
/// Cancelled orders are excluded, matching [`SellerStats::compute`].
pub fn daily_sales(
    seller_id: &SellerId,
    products: &[Product],
    orders: &[Order],
    currency: Currency,
) -> Result<Vec<DailySales>, CommerceError> {
    let listed_ids: HashSet<&ProductId> = products
        .iter()
        .filter(|p| &p.seller_id == seller_id)
        .map(|p| &p.id)
        .collect();

    let mut buckets: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();
    for order in orders {
        if order.status == crate::checkout::OrderStatus::Cancelled {
            continue;
        }
        let mut day_revenue: i64 = 0;
        let mut counted = false;
        for item in &order.items {
            if !listed_ids.contains(&item.product_id) {
                continue;
            }
            counted = true;
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            day_revenue = day_revenue
                .checked_add(line.amount_cents)
                .ok_or(CommerceError::Overflow)?;
        }
        if !counted {
            continue;
        }

        let date = DateTime::from_timestamp(order.created_at, 0)
            .map(|dt| dt.date_naive())
            .unwrap_or_default();
        let entry = buckets.entry(date).or_insert((0, 0));
        entry.0 = entry.0.checked_add(day_revenue).ok_or(CommerceError::Overflow)?;
        entry.1 += 1;
    }

    Ok(buckets
        .into_iter()
        .map(|(date, (cents, orders))| DailySales {
            date,
            revenue: Money::new(cents, currency),
            orders,
        })
        .collect())
}
