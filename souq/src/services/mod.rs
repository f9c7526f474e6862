//! Entity stores
//!
//! Each service owns the in-memory keyed collection of one entity kind plus
//! its validation and persistence. Every mutating operation is followed by a
//! write-through save before it returns.

pub mod catalog_service;
pub mod order_service;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use user_service::UserService;
