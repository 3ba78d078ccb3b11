//! Validate Module
//!
//! Pure rules applied to each answer during registration and login.
//! Every rule returns the cleaned value or the `ValidationError` naming
//! the rule that failed.

mod email;

pub use email::{BasicEmailValidator, EmailValidator};

use crate::account::SubscriptionTier;
use crate::error::ValidationError;

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Lowercase a name; reject empty or whitespace-only input
pub fn name(input: &str) -> Result<String, ValidationError> {
    non_blank(input).ok_or(ValidationError::EmptyName)
}

/// Lowercase a country; reject empty or whitespace-only input
pub fn country(input: &str) -> Result<String, ValidationError> {
    non_blank(input).ok_or(ValidationError::EmptyCountry)
}

/// Lowercase an email and check its syntax
pub fn email_syntax(
    input: &str,
    validator: &dyn EmailValidator,
) -> Result<String, ValidationError> {
    let email = input.to_lowercase();
    if validator.is_valid_email(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Parse a non-negative integer age
pub fn age(input: &str) -> Result<u32, ValidationError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAge)
}

/// Parse a subscription tier code (1 or 2)
pub fn tier(input: &str) -> Result<SubscriptionTier, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|code| SubscriptionTier::try_from(code).ok())
        .ok_or(ValidationError::InvalidTier)
}

/// Accept a password of at least `MIN_PASSWORD_LEN` characters that is
/// not only whitespace
pub fn password(input: &str) -> Result<String, ValidationError> {
    if input.chars().count() < MIN_PASSWORD_LEN || input.trim().is_empty() {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(input.to_string())
}

fn non_blank(input: &str) -> Option<String> {
    let lowered = input.to_lowercase();
    if lowered.trim().is_empty() {
        None
    } else {
        Some(lowered)
    }
}
