//! Entity models
//!
//! Self-validating records shared between the stores and the console front
//! end. The serde field names are exactly the persisted record shape.

pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use order::*;
pub use product::*;
pub use user::*;
