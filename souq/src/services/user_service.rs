//! Identity store
//!
//! Users keyed by username. Enforces username uniqueness at all times,
//! including across renames, which re-key the collection.

use crate::storage::JsonStore;
use shared::error::{AppError, AppResult};
use shared::models::{User, UserCreate, UserUpdate};
use shared::validate;
use std::collections::HashMap;

pub struct UserService {
    users: HashMap<String, User>,
    store: JsonStore<User>,
}

impl UserService {
    /// Build the store, loading any persisted users
    pub fn new(store: JsonStore<User>) -> Self {
        let users = store
            .load_all()
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self { users, store }
    }

    /// Add a user after validating every field and uniqueness
    pub fn add_user(&mut self, data: UserCreate) -> AppResult<User> {
        validate::username_unique(&data.username, self.users.keys().map(String::as_str))?;
        let user = User::new(data)?;
        self.users.insert(user.username.clone(), user.clone());
        self.persist();
        Ok(user)
    }

    /// Apply a partial update; a username change re-validates uniqueness and
    /// re-keys the store. The patch is applied all-or-nothing.
    pub fn update_user(&mut self, username: &str, patch: &UserUpdate) -> AppResult<User> {
        let current = self
            .users
            .get(username)
            .ok_or_else(|| AppError::not_found("User"))?;

        if let Some(new_username) = patch.username.as_deref()
            && new_username != username
        {
            validate::username_unique(new_username, self.users.keys().map(String::as_str))?;
        }

        let mut updated = current.clone();
        updated.update(patch)?;

        self.users.remove(username);
        self.users.insert(updated.username.clone(), updated.clone());
        self.persist();
        Ok(updated)
    }

    /// Hard deletion; users have no archival requirement
    pub fn delete_user(&mut self, username: &str) -> AppResult<()> {
        self.users
            .remove(username)
            .ok_or_else(|| AppError::not_found("User"))?;
        self.persist();
        Ok(())
    }

    pub fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<_> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    pub fn activate_user(&mut self, username: &str) -> AppResult<()> {
        self.set_active(username, true)
    }

    pub fn deactivate_user(&mut self, username: &str) -> AppResult<()> {
        self.set_active(username, false)
    }

    fn set_active(&mut self, username: &str, active: bool) -> AppResult<()> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| AppError::not_found("User"))?;
        if active {
            user.activate();
        } else {
            user.deactivate();
        }
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        let records: Vec<User> = self.users.values().cloned().collect();
        self.store.save_all(&records);
    }
}
