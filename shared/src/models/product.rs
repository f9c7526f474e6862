//! Product Model

use crate::error::AppResult;
use crate::validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product entity
///
/// The id is assigned by the catalog store and never reused. Deleting a
/// product defaults to archiving (`is_active = false`) so that historical
/// orders keep a valid reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub is_active: bool,
}

/// Update product payload; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl Product {
    /// Validate every field and build an active product
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> AppResult<Self> {
        let name = name.into();
        validate::product_id(id)?;
        validate::product_name(&name)?;
        validate::price(price)?;

        Ok(Self {
            id,
            name,
            price,
            is_active: true,
        })
    }

    /// Apply a partial update, re-validating each supplied field
    pub fn update(&mut self, patch: &ProductUpdate) -> AppResult<()> {
        if let Some(name) = &patch.name {
            validate::product_name(name)?;
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            validate::price(price)?;
            self.price = price;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} : {} ({})",
            self.id,
            self.name,
            self.price,
            if self.is_active { "active" } else { "archived" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_validates_fields() {
        let product = Product::new(1, "Pen", price("1.50")).unwrap();
        assert!(product.is_active);

        assert!(Product::new(0, "Pen", price("1.50")).is_err());
        assert!(Product::new(1, "  ", price("1.50")).is_err());
        assert!(Product::new(1, "Pen", price("-1")).is_err());
    }

    #[test]
    fn test_update() {
        let mut product = Product::new(1, "Pen", price("1.50")).unwrap();
        product
            .update(&ProductUpdate {
                price: Some(price("2.00")),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(product.price, price("2.00"));
        assert_eq!(product.name, "Pen");

        let err = product.update(&ProductUpdate {
            name: Some(String::new()),
            ..Default::default()
        });
        assert!(err.is_err());
        assert_eq!(product.name, "Pen");
    }

    #[test]
    fn test_serde_round_trip() {
        let product = Product::new(7, "Book", price("9.99")).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
