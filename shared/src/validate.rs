//! Field validation rules
//!
//! Stateless predicate functions, one per field kind. Each returns `Ok(())`
//! or fails with [`AppError::Validation`] carrying a human-readable reason.

use crate::error::{AppError, AppResult};
use rust_decimal::Decimal;

/// Accepted leading digits for phone numbers
pub const PHONE_PREFIXES: &[&str] = &["71", "73", "77", "78"];

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Accepted gender values (matched case-insensitively)
pub const GENDER_VALUES: &[&str] = &["m", "f", "male", "female", "other"];

/// Username: non-empty, letters/digits/underscore only
pub fn username(value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation("Username is required"));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::validation(
            "Username must contain letters, digits or underscore only",
        ));
    }
    Ok(())
}

/// Username format plus case-sensitive absence from `existing`
pub fn username_unique<'a>(
    value: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> AppResult<()> {
    username(value)?;
    if existing.into_iter().any(|u| u == value) {
        return Err(AppError::validation("The username is already taken"));
    }
    Ok(())
}

/// Password: length plus digit / letter / special-character requirements
pub fn password(value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::validation("Password is required"));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Password must include at least one digit",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::validation(
            "Password must include at least one letter",
        ));
    }
    // "special" excludes word characters (letters, digits, underscore) and whitespace
    if !value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace() && c != '_')
    {
        return Err(AppError::validation(
            "Password must include at least one special character",
        ));
    }
    Ok(())
}

/// Phone number: exactly 9 digits, starting with an accepted prefix
pub fn phonenumber(value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::validation("Phone number is required"));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Phone number must contain digits only",
        ));
    }
    if value.len() != 9 {
        return Err(AppError::validation("Phone number must be 9 digits"));
    }
    if !PHONE_PREFIXES.iter().any(|p| value.starts_with(p)) {
        return Err(AppError::validation(format!(
            "Phone number must start with one of: {}",
            PHONE_PREFIXES.join(", ")
        )));
    }
    Ok(())
}

/// Gender: case-insensitive membership in [`GENDER_VALUES`]
pub fn gender(value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::validation("Gender is required"));
    }
    let lower = value.to_lowercase();
    if !GENDER_VALUES.contains(&lower.as_str()) {
        return Err(AppError::validation("Gender value seems invalid"));
    }
    Ok(())
}

/// Product id: positive
pub fn product_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation("Product ID is required"));
    }
    Ok(())
}

/// Product name: non-empty after trimming
pub fn product_name(value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    Ok(())
}

/// Price: non-negative
pub fn price(value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::validation("Product price must be non-negative"));
    }
    Ok(())
}

/// Quantity: strictly positive
pub fn quantity(value: i64) -> AppResult<()> {
    if value <= 0 {
        return Err(AppError::validation("Quantity must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(username("alice_01").is_ok());
        assert!(username("").is_err());
        assert!(username("   ").is_err());
        assert!(username("bad name").is_err());
        assert!(username("émile").is_err());
    }

    #[test]
    fn test_username_unique_is_case_sensitive() {
        let existing = ["alice", "bob"];
        assert!(username_unique("alice", existing).is_err());
        assert!(username_unique("Alice", existing).is_ok());
        assert!(username_unique("carol", existing).is_ok());
    }

    #[test]
    fn test_password_rules() {
        assert!(password("Secret1!").is_ok());
        assert!(password("").is_err());
        assert!(password("Sh0rt!").is_err(), "too short");
        assert!(password("NoDigits!").is_err());
        assert!(password("12345678!").is_err(), "no letter");
        assert!(password("NoSpecial1").is_err());
        // underscore is a word character, not a special character
        assert!(password("Secret1_a").is_err());
    }

    #[test]
    fn test_phonenumber_rules() {
        assert!(phonenumber("771234567").is_ok());
        assert!(phonenumber("781234567").is_ok());
        assert!(phonenumber("").is_err());
        assert!(phonenumber("77123456a").is_err());
        assert!(phonenumber("7712345").is_err(), "too short");
        assert!(phonenumber("7712345678").is_err(), "too long");
        assert!(phonenumber("701234567").is_err(), "bad prefix");
    }

    #[test]
    fn test_gender_rules() {
        for value in ["m", "F", "Male", "female", "OTHER"] {
            assert!(gender(value).is_ok(), "{value} should be accepted");
        }
        assert!(gender("").is_err());
        assert!(gender("unknown").is_err());
    }

    #[test]
    fn test_product_fields() {
        assert!(product_id(1).is_ok());
        assert!(product_id(0).is_err());
        assert!(product_name("Pen").is_ok());
        assert!(product_name("  ").is_err());
        assert!(price(Decimal::ZERO).is_ok());
        assert!(price("1.50".parse().unwrap()).is_ok());
        assert!(price("-0.01".parse().unwrap()).is_err());
    }

    #[test]
    fn test_quantity_rules() {
        assert!(quantity(1).is_ok());
        assert!(quantity(0).is_err());
        assert!(quantity(-3).is_err());
    }
}
