//! Shared types for the souq workspace
//!
//! Entity models, field validation rules and the unified error type used by
//! the stores and the console front end.

pub mod error;
pub mod models;
pub mod validate;

// Re-exports
pub use error::{AppError, AppResult};
pub use models::{
    Order, OrderItem, OrderStatus, Product, ProductUpdate, Role, User, UserCreate, UserUpdate,
};
