//! Application state
//!
//! Owns the three stores and the session. Single-threaded, synchronous:
//! every operation runs to completion before the next begins.

use crate::auth::Session;
use crate::config::Config;
use crate::services::{CatalogService, OrderService, UserService};
use crate::storage::JsonStore;
use shared::models::UserCreate;

/// Default administrator seeded on first start
const DEFAULT_ADMIN: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "Adm!n1234";

pub struct App {
    pub users: UserService,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub session: Session,
}

impl App {
    /// Load all stores from the configured data directory and seed the
    /// default admin account when absent
    pub fn initialize(config: &Config) -> Self {
        let users = UserService::new(JsonStore::new(config.users_path()));
        let catalog = CatalogService::new(JsonStore::new(config.products_path()));
        let orders = OrderService::new(JsonStore::new(config.orders_path()));

        let mut app = Self {
            users,
            catalog,
            orders,
            session: Session::new(),
        };
        app.seed_default_admin();
        app
    }

    fn seed_default_admin(&mut self) {
        if self.users.find_user(DEFAULT_ADMIN).is_some() {
            return;
        }
        let seeded = self.users.add_user(UserCreate {
            username: DEFAULT_ADMIN.into(),
            password: DEFAULT_ADMIN_PASSWORD.into(),
            usertype: "admin".into(),
            phonenumber: "771234567".into(),
            gender: "male".into(),
        });
        match seeded {
            Ok(_) => tracing::info!("seeded default admin account"),
            Err(e) => tracing::warn!(error = %e, "failed to seed default admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_seeds_admin_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path());

        let app = App::initialize(&config);
        let admin = app.users.find_user("admin").unwrap();
        assert_eq!(admin.usertype, shared::models::Role::Admin);
        assert!(admin.isactive);

        // a second initialize reuses the persisted account
        let app = App::initialize(&config);
        assert_eq!(app.users.list_users().len(), 1);
    }

    #[test]
    fn test_default_admin_can_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::initialize(&Config::with_data_dir(dir.path()));
        app.session
            .login(&app.users, DEFAULT_ADMIN, DEFAULT_ADMIN_PASSWORD)
            .unwrap();
        assert!(app.session.is_logged_in());
    }
}
