//! Store Module
//!
//! Persistent, append-only account storage.
//!
//! ## Responsibilities
//! - Load every record into memory on open
//! - Append new records to disk before they become visible in memory
//! - Answer email lookups for the directory service
//!
//! ## Durability
//! The file is opened, appended and closed on every `append`. The
//! in-memory list is only extended once the write has completed, so it
//! is always a prefix of what is on disk.

mod record_store;

pub use record_store::RecordStore;
