//! Record Store
//!
//! Owns the canonical list of accounts and the file behind it.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::account::Account;
use crate::config::SyncStrategy;
use crate::error::{DirectoryError, Result};

/// Append-only account store backed by a line-oriented text file
pub struct RecordStore {
    /// Location of the record file
    path: PathBuf,

    /// Every account, in file order
    accounts: Vec<Account>,

    /// Whether each append is fsynced
    sync_strategy: SyncStrategy,

    /// The file's last line has no terminator yet
    missing_newline: bool,
}

impl RecordStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. Blank lines are skipped; any
    /// other line that does not parse is fatal.
    pub fn open(path: impl AsRef<Path>, sync_strategy: SyncStrategy) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No store at {}, starting empty", path.display());
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        let mut accounts = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let account = Account::from_record(line).map_err(|source| DirectoryError::Record {
                line: index + 1,
                source,
            })?;
            accounts.push(account);
        }

        tracing::debug!("Loaded {} accounts from {}", accounts.len(), path.display());

        let missing_newline = !contents.is_empty() && !contents.ends_with('\n');

        Ok(Self {
            path,
            accounts,
            sync_strategy,
            missing_newline,
        })
    }

    /// All accounts in file order
    pub fn all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Append an account to disk, then to memory
    ///
    /// If the write fails the in-memory list is left untouched.
    pub fn append(&mut self, account: Account) -> Result<()> {
        let mut line = String::new();
        if self.missing_newline {
            line.push('\n');
        }
        line.push_str(&account.to_record());
        line.push('\n');

        {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;

            file.write_all(line.as_bytes())?;
            file.flush()?;

            if self.sync_strategy == SyncStrategy::EveryAppend {
                file.sync_all()?;
            }
        }

        tracing::debug!("Appended record #{} to {}", self.accounts.len() + 1, self.path.display());
        self.accounts.push(account);
        self.missing_newline = false;

        Ok(())
    }

    /// Find the account registered under `email` (already lowercase)
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.email == email)
    }

    /// Check whether `email` (already lowercase) is registered
    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Set of registered emails
    pub fn emails(&self) -> HashSet<&str> {
        self.accounts.iter().map(|a| a.email.as_str()).collect()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Location of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
