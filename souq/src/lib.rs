//! souq application crate
//!
//! Module map:
//! - `config`: data directory resolution from the environment
//! - `logger`: tracing subscriber setup
//! - `storage`: JSON file persistence
//! - `services`: user, catalog and order stores
//! - `auth`: session and role checks
//! - `state`: application wiring and default admin seeding
//! - `menu`: interactive console front end

pub mod auth;
pub mod config;
pub mod logger;
pub mod menu;
pub mod services;
pub mod state;
pub mod storage;

pub use config::Config;
pub use state::App;
