//! Unified error type for the souq workspace
//!
//! Four recoverable error kinds, all caught at the front-end session loop:
//! - [`AppError::Validation`]: a field or operation precondition failed
//! - [`AppError::Authentication`]: login failed
//! - [`AppError::Authorization`]: caller lacks the required role
//! - [`AppError::NotFound`]: a referenced entity does not exist
//!
//! Persistence I/O failures are deliberately not represented here: the
//! storage layer logs them and degrades instead of failing the operation.

use thiserror::Error;

/// Application error carrying a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A field or operation precondition failed
    #[error("{0}")]
    Validation(String),
    /// Login failed (unknown user, inactive account or wrong credentials)
    #[error("{0}")]
    Authentication(String),
    /// Caller is not logged in or lacks the required role
    #[error("{0}")]
    Authorization(String),
    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an authentication error
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create an authorization error
    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }

    /// Create a not found error for a resource, e.g. `not_found("User")`
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// True for validation errors
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for not-found errors
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = AppError::validation("Username is required");
        assert!(err.is_validation());
        assert_eq!(format!("{}", err), "Username is required");
    }

    #[test]
    fn test_not_found_formats_resource() {
        let err = AppError::not_found("Product 5");
        assert!(err.is_not_found());
        assert_eq!(format!("{}", err), "Product 5 not found");
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(
            AppError::authentication("x"),
            AppError::authorization("x")
        );
        assert_ne!(AppError::validation("x"), AppError::NotFound("x".into()));
    }
}
