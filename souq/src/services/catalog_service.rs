//! Catalog store
//!
//! Products keyed by a monotonically allocated integer id. Ids are never
//! reused, even after a hard delete. Deletion defaults to archiving so that
//! existing orders keep a resolvable product reference.

use crate::storage::JsonStore;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{Product, ProductUpdate};
use shared::validate;
use std::collections::HashMap;

pub struct CatalogService {
    products: HashMap<i64, Product>,
    next_id: i64,
    store: JsonStore<Product>,
}

impl CatalogService {
    /// Build the store, loading any persisted products; the id counter
    /// resumes past the highest loaded id
    pub fn new(store: JsonStore<Product>) -> Self {
        let products: HashMap<i64, Product> = store
            .load_all()
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let next_id = products.keys().max().map_or(1, |max| max + 1);
        Self {
            products,
            next_id,
            store,
        }
    }

    /// Add a product with the next unused id
    pub fn add_product(&mut self, name: &str, price: Decimal) -> AppResult<Product> {
        validate::product_name(name)?;
        validate::price(price)?;

        let product = Product::new(self.next_id, name, price)?;
        self.products.insert(product.id, product.clone());
        self.next_id += 1;
        self.persist();
        Ok(product)
    }

    /// Apply a partial update; the patch is applied all-or-nothing
    pub fn update_product(&mut self, id: i64, patch: &ProductUpdate) -> AppResult<Product> {
        let current = self
            .products
            .get(&id)
            .ok_or_else(|| AppError::not_found("Product"))?;

        let mut updated = current.clone();
        updated.update(patch)?;

        self.products.insert(id, updated.clone());
        self.persist();
        Ok(updated)
    }

    /// Archive (default) or hard-delete a product
    ///
    /// Archiving keeps the record with `is_active = false`; hard deletion is
    /// an explicit opt-in that removes it entirely. The id counter is not
    /// rewound in either case.
    pub fn delete_product(&mut self, id: i64, archive: bool) -> AppResult<()> {
        if !self.products.contains_key(&id) {
            return Err(AppError::not_found("Product"));
        }
        if archive {
            if let Some(product) = self.products.get_mut(&id) {
                product.is_active = false;
            }
        } else {
            self.products.remove(&id);
        }
        self.persist();
        Ok(())
    }

    pub fn find_product(&self, id: i64) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    /// List products ordered by id, active-only unless asked otherwise
    pub fn list_products(&self, include_inactive: bool) -> Vec<Product> {
        let mut products: Vec<_> = self
            .products
            .values()
            .filter(|p| include_inactive || p.is_active)
            .cloned()
            .collect();
        products.sort_by_key(|p| p.id);
        products
    }

    fn persist(&self) {
        let records: Vec<Product> = self.products.values().cloned().collect();
        self.store.save_all(&records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (tempfile::TempDir, CatalogService) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CatalogService::new(JsonStore::new(dir.path().join("products.json")));
        (dir, catalog)
    }

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let (_dir, mut catalog) = service();
        assert_eq!(catalog.add_product("Pen", price("1.50")).unwrap().id, 1);
        assert_eq!(catalog.add_product("Book", price("9.99")).unwrap().id, 2);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (_dir, mut catalog) = service();
        catalog.add_product("Pen", price("1.50")).unwrap();
        catalog.delete_product(1, false).unwrap();
        assert_eq!(catalog.add_product("Book", price("9.99")).unwrap().id, 2);
    }

    #[test]
    fn test_archive_keeps_record_inactive() {
        let (_dir, mut catalog) = service();
        catalog.add_product("Pen", price("1.50")).unwrap();
        catalog.add_product("Book", price("9.99")).unwrap();

        catalog.delete_product(1, true).unwrap();
        let archived = catalog.find_product(1).unwrap();
        assert!(!archived.is_active);

        let active: Vec<i64> = catalog.list_products(false).iter().map(|p| p.id).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(catalog.list_products(true).len(), 2);
    }

    #[test]
    fn test_hard_delete_removes_record() {
        let (_dir, mut catalog) = service();
        catalog.add_product("Pen", price("1.50")).unwrap();
        catalog.delete_product(1, false).unwrap();
        assert!(catalog.find_product(1).is_none());

        assert!(catalog.delete_product(1, true).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_product() {
        let (_dir, mut catalog) = service();
        catalog.add_product("Pen", price("1.50")).unwrap();

        let updated = catalog
            .update_product(
                1,
                &ProductUpdate {
                    price: Some(price("2.00")),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.price, price("2.00"));

        let err = catalog.update_product(
            1,
            &ProductUpdate {
                name: Some("  ".into()),
                ..Default::default()
            },
        );
        assert!(err.is_err());
        assert_eq!(catalog.find_product(1).unwrap().name, "Pen");

        assert!(
            catalog
                .update_product(99, &ProductUpdate::default())
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_add_rejects_invalid_fields() {
        let (_dir, mut catalog) = service();
        assert!(catalog.add_product("", price("1.00")).is_err());
        assert!(catalog.add_product("Pen", price("-1")).is_err());
        // nothing was allocated
        assert_eq!(catalog.add_product("Pen", price("1.00")).unwrap().id, 1);
    }

    #[test]
    fn test_counter_resumes_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        {
            let mut catalog = CatalogService::new(JsonStore::new(&path));
            catalog.add_product("Pen", price("1.50")).unwrap();
            catalog.add_product("Book", price("9.99")).unwrap();
        }
        let mut reloaded = CatalogService::new(JsonStore::new(&path));
        assert_eq!(reloaded.list_products(true).len(), 2);
        assert_eq!(reloaded.add_product("Lamp", price("4.00")).unwrap().id, 3);
    }
}
