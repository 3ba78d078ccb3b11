//! # subscriberdb
//!
//! Subscriber directory for a streaming service:
//! - Append-only, line-oriented account store
//! - Interactive registration with per-field validation
//! - Interactive login against salted password hashes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Caller (CLI / UI layer)                      │
//! │                  supplies a Prompter                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ register / authenticate
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Directory                               │
//! │        (validation, re-prompt loops, login matching)         │
//! └──────────┬──────────────────┬───────────────────┬───────────┘
//!            │                  │                   │
//!            ▼                  ▼                   ▼
//!   ┌─────────────┐    ┌────────────────┐   ┌──────────────┐
//!   │ RecordStore │    │CredentialHasher│   │EmailValidator│
//!   │  (append)   │    │   (Argon2id)   │   │   (syntax)   │
//!   └──────┬──────┘    └────────────────┘   └──────────────┘
//!          │
//!          ▼
//!   subscribers.db  (name,email,age,country,tier,hash per line)
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod account;
pub mod store;
pub mod hasher;
pub mod validate;
pub mod prompt;
pub mod directory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use account::{Account, SubscriptionTier};
pub use config::{AuthStrategy, Config, SyncStrategy};
pub use directory::Directory;
pub use error::{DirectoryError, RecordError, Result, ValidationError};
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use prompt::{LinePrompter, Prompter};
pub use store::RecordStore;
pub use validate::{BasicEmailValidator, EmailValidator};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of subscriberdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
