//! Directory Module
//!
//! The service behind the two user-facing flows.
//!
//! ## Responsibilities
//! - Registration: collect and validate six fields, hash the password,
//!   persist the new account
//! - Authentication: find the account matching an email/password pair
//!
//! ## Re-prompting
//! Every field is read through `prompt_until`: ask, apply the rule, show
//! the rule's message on rejection, ask again. Rejections never leave
//! this module; only I/O, hashing and closed input do.

mod authenticate;
mod register;

use crate::account::Account;
use crate::config::{AuthStrategy, Config};
use crate::error::{DirectoryError, Result, ValidationError};
use crate::hasher::{Argon2Hasher, CredentialHasher};
use crate::prompt::Prompter;
use crate::store::RecordStore;
use crate::validate::{BasicEmailValidator, EmailValidator};

/// Subscriber directory: a record store plus its collaborators
pub struct Directory {
    /// Persisted accounts
    store: RecordStore,

    /// Password hashing collaborator
    hasher: Box<dyn CredentialHasher>,

    /// Email syntax collaborator
    email_validator: Box<dyn EmailValidator>,

    /// How logins are matched
    auth_strategy: AuthStrategy,
}

impl Directory {
    /// Open the directory described by `config`
    ///
    /// Uses Argon2id for passwords and the basic email check.
    pub fn open(config: Config) -> Result<Self> {
        if config.store_path.as_os_str().is_empty() {
            return Err(DirectoryError::Config("store path is empty".to_string()));
        }
        if config.store_path.is_dir() {
            return Err(DirectoryError::Config(format!(
                "store path {} is a directory",
                config.store_path.display()
            )));
        }

        let store = RecordStore::open(&config.store_path, config.sync_strategy)?;

        Ok(Self::with_parts(
            store,
            Box::new(Argon2Hasher::new()),
            Box::new(BasicEmailValidator),
            config.auth_strategy,
        ))
    }

    /// Assemble a directory from explicit collaborators
    pub fn with_parts(
        store: RecordStore,
        hasher: Box<dyn CredentialHasher>,
        email_validator: Box<dyn EmailValidator>,
        auth_strategy: AuthStrategy,
    ) -> Self {
        Self {
            store,
            hasher,
            email_validator,
            auth_strategy,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All accounts in store order
    pub fn accounts(&self) -> &[Account] {
        self.store.all_accounts()
    }

    /// The underlying record store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The login matching strategy in use
    pub fn auth_strategy(&self) -> AuthStrategy {
        self.auth_strategy
    }
}

/// Ask `prompt` until `rule` accepts the answer
///
/// Each rejection is shown through the prompter before asking again.
/// Only prompter errors (closed input, console I/O) end the loop early.
pub(crate) fn prompt_until<P, T, F>(prompter: &mut P, prompt: &str, mut rule: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: FnMut(&str) -> std::result::Result<T, ValidationError>,
{
    loop {
        let answer = prompter.ask(prompt)?;
        match rule(&answer) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                tracing::debug!("Rejected answer to {:?}: {}", prompt.trim_end(), rejection);
                prompter.notify(&rejection.to_string());
            }
        }
    }
}
