//! Configuration for the subscriber directory
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a directory instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// File holding one account per line
    pub store_path: PathBuf,

    /// How hard `append` pushes each record towards the disk
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Authentication Configuration
    // -------------------------------------------------------------------------
    /// How a login is matched against stored accounts
    pub auth_strategy: AuthStrategy,
}

/// Store sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every appended record (safest)
    EveryAppend,

    /// Flush to the OS and let it decide when to hit the disk
    OsBuffered,
}

/// Login matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Look the email up first, then verify the password against that
    /// account's hash only. Unknown emails are rejected before the
    /// password is asked for.
    EmailFirst,

    /// Verify the password against every account in store order and
    /// return the first match, provided the typed email exists somewhere
    /// in the directory. The matched account may not own the typed email.
    HashScan,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("./subscribers.db"),
            sync_strategy: SyncStrategy::EveryAppend,
            auth_strategy: AuthStrategy::EmailFirst,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file location
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set the store sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the login matching strategy
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.config.auth_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
