//! JSON file persistence adapter
//!
//! One [`JsonStore`] per entity store, injected at construction. The whole
//! record set is rewritten on every successful mutation (write-through).
//!
//! Durability degrades rather than fails: an unreadable or malformed file
//! loads as an empty store, and a failed save is logged while the in-memory
//! state stands.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Durable keyed-record store backed by a single JSON file
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record; a missing, unreadable or malformed file is treated
    /// as an empty store
    pub fn load_all(&self) -> Vec<T> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read store file, starting empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed store file, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the whole record set; failures are reported and swallowed so
    /// the caller's in-memory mutation stands
    pub fn save_all(&self, records: &[T]) {
        if let Err(e) = self.try_save(records) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to persist store"
            );
        }
    }

    fn try_save(&self, records: &[T]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
        fs::write(&self.path, json)
    }
}
