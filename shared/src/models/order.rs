//! Order Model
//!
//! An order owns a sequence of line items in user entry order. Each item
//! snapshots the product price at creation time; the snapshot is never
//! recomputed from the live catalog. The total is always derived, never
//! stored.

use crate::error::{AppError, AppResult};
use crate::validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// Any status may follow any other; no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::validation(
                "Invalid status. Must be one of: pending, confirmed, shipped, delivered, cancelled",
            )),
        }
    }
}

/// Order line item with a frozen price snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i64,
    pub price_at_order: Decimal,
}

impl OrderItem {
    pub fn new(product_id: i64, quantity: i64, price_at_order: Decimal) -> AppResult<Self> {
        validate::quantity(quantity)?;
        validate::price(price_at_order)?;
        Ok(Self {
            product_id,
            quantity,
            price_at_order,
        })
    }

    /// Line total: quantity x snapshot price
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price_at_order
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {} x {} @ {}",
            self.product_id, self.quantity, self.price_at_order
        )
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub user_username: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(order_id: i64, user_username: impl Into<String>) -> Self {
        Self {
            order_id,
            user_username: user_username.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
        }
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Total over all items; computed on demand
    pub fn calculate_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Overwrite the status; fails on unknown status names and leaves the
    /// current status untouched in that case
    pub fn update_status(&mut self, new_status: &str) -> AppResult<()> {
        self.status = new_status.parse::<OrderStatus>()?;
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} by {} status={} items={} total={}",
            self.order_id,
            self.user_username,
            self.status,
            self.items.len(),
            self.calculate_total()
        )
    }
}
