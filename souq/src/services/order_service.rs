//! Order store
//!
//! Orders keyed by a monotonically allocated order id. Order creation
//! cross-references the catalog store: every requested item is looked up,
//! checked for availability and quantity, and priced from a snapshot taken
//! at that moment. The commit is all-or-nothing; a failed request leaves the
//! store and the id counter untouched.

use super::CatalogService;
use crate::storage::JsonStore;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderItem};
use shared::validate;
use std::collections::HashMap;

pub struct OrderService {
    orders: HashMap<i64, Order>,
    next_order_id: i64,
    store: JsonStore<Order>,
}

impl OrderService {
    /// Build the store, loading any persisted orders; the id counter resumes
    /// past the highest loaded id
    pub fn new(store: JsonStore<Order>) -> Self {
        let orders: HashMap<i64, Order> = store
            .load_all()
            .into_iter()
            .map(|o| (o.order_id, o))
            .collect();
        let next_order_id = orders.keys().max().map_or(1, |max| max + 1);
        Self {
            orders,
            next_order_id,
            store,
        }
    }

    /// Create an order from (product id, quantity) pairs, in the order given
    ///
    /// Each item must reference an existing, non-archived product and carry a
    /// positive quantity. The product's current price is frozen into the
    /// item; later catalog changes do not affect it.
    pub fn create_order(
        &mut self,
        username: &str,
        items: &[(i64, i64)],
        catalog: &CatalogService,
    ) -> AppResult<Order> {
        let mut order = Order::new(self.next_order_id, username);
        for &(product_id, quantity) in items {
            let product = catalog
                .find_product(product_id)
                .ok_or_else(|| AppError::not_found(format!("Product {product_id}")))?;
            if !product.is_active {
                return Err(AppError::validation(format!(
                    "Product {product_id} is not active"
                )));
            }
            validate::quantity(quantity)?;
            order.add_item(OrderItem::new(product_id, quantity, product.price)?);
        }

        self.orders.insert(order.order_id, order.clone());
        self.next_order_id += 1;
        self.persist();
        Ok(order)
    }

    pub fn find_order(&self, order_id: i64) -> Option<Order> {
        self.orders.get(&order_id).cloned()
    }

    /// List all orders by id
    pub fn list_orders(&self) -> Vec<Order> {
        let mut orders: Vec<_> = self.orders.values().cloned().collect();
        orders.sort_by_key(|o| o.order_id);
        orders
    }

    /// List the orders owned by one user, preserving store order
    pub fn list_user_orders(&self, username: &str) -> Vec<Order> {
        let mut orders: Vec<_> = self
            .orders
            .values()
            .filter(|o| o.user_username == username)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.order_id);
        orders
    }

    /// Overwrite the status of an existing order
    ///
    /// The status name is matched case-insensitively against the recognized
    /// set; an unknown name fails and leaves the order unchanged.
    pub fn update_order_status(&mut self, order_id: i64, new_status: &str) -> AppResult<Order> {
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| AppError::not_found("Order"))?;
        order.update_status(new_status)?;
        let updated = order.clone();
        self.persist();
        Ok(updated)
    }

    fn persist(&self) {
        let records: Vec<Order> = self.orders.values().cloned().collect();
        self.store.save_all(&records);
    }
}
