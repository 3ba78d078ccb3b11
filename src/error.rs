//! Error types for the subscriber directory
//!
//! `DirectoryError` covers everything fatal. Field-level problems during
//! registration and login are `ValidationError`s: they are shown to the
//! user and the field is asked again, never returned to the caller.

use thiserror::Error;

/// Result type alias using DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Unified error type for directory operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Input closed before a valid answer was given")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a persisted line could not be turned into an account
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 6 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("age is not a non-negative integer: {0:?}")]
    InvalidAge(String),

    #[error("subscription tier must be 1 or 2, got {0:?}")]
    InvalidTier(String),

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
}

/// A rejected answer to a prompt
///
/// The display text is what the user sees before being asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid email")]
    InvalidEmail,

    #[error("this email is already registered; log in instead or use another address")]
    EmailTaken,

    #[error("age must be a non-negative integer")]
    InvalidAge,

    #[error("country must not be empty")]
    EmptyCountry,

    #[error("subscription tier must be 1 (regional) or 2 (international)")]
    InvalidTier,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("no account found for entered email")]
    UnknownEmail,

    #[error("incorrect password")]
    IncorrectPassword,
}
