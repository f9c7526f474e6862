//! Runtime configuration

use std::path::PathBuf;

/// Configuration for the souq console application
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-store JSON files
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("SOUQ_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }

    /// Create a config rooted at an explicit data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join("orders.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
