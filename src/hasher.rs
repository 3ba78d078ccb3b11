//! Password hashing
//!
//! The directory stores and compares opaque hash strings only; the
//! algorithm sits behind `CredentialHasher`.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::{DirectoryError, Result};

/// One-way password hashing collaborator
pub trait CredentialHasher {
    /// Hash a plaintext password
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// `Ok(false)` means the password is wrong; `Err` means the stored
    /// hash could not be used at all.
    fn verify(&self, stored_hash: &str, plaintext: &str) -> Result<bool>;
}

/// Argon2id with a random salt per password, PHC string output
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DirectoryError::Hash(e.to_string()))
    }

    fn verify(&self, stored_hash: &str, plaintext: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| DirectoryError::Hash(format!("unreadable stored hash: {}", e)))?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DirectoryError::Hash(e.to_string())),
        }
    }
}
