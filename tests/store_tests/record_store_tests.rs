//! Tests for RecordStore
//!
//! These tests verify:
//! - Opening missing, empty and populated stores
//! - Append format and ordering
//! - Fatal handling of malformed lines
//! - In-memory state untouched by failed appends
//! - Email lookups

use std::fs;
use std::path::PathBuf;

use subscriberdb::account::{Account, SubscriptionTier};
use subscriberdb::config::SyncStrategy;
use subscriberdb::error::{DirectoryError, RecordError};
use subscriberdb::store::RecordStore;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("subscribers.db");
    (temp_dir, path)
}

fn account(name: &str, email: &str, tier: SubscriptionTier) -> Account {
    Account {
        name: name.to_string(),
        email: email.to_string(),
        age: 30,
        country: "canada".to_string(),
        subscription_tier: tier,
        password_hash: format!("hash-of-{}", name),
    }
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_missing_file_is_empty() {
    let (_temp, path) = setup_temp_store();

    let store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(!path.exists());
}

#[test]
fn test_open_empty_file() {
    let (_temp, path) = setup_temp_store();
    fs::write(&path, "").unwrap();

    let store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();

    assert!(store.is_empty());
}

#[test]
fn test_open_parses_lines_in_order() {
    let (_temp, path) = setup_temp_store();
    fs::write(
        &path,
        "alice,alice@example.com,30,canada,1,h1\nbob,bob@example.org,52,france,2,h2\n",
    )
    .unwrap();

    let store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    let accounts = store.all_accounts();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].name, "alice");
    assert_eq!(accounts[0].age, 30);
    assert_eq!(accounts[0].subscription_tier, SubscriptionTier::Regional);
    assert_eq!(accounts[1].email, "bob@example.org");
    assert_eq!(accounts[1].country, "france");
    assert_eq!(accounts[1].subscription_tier, SubscriptionTier::International);
    assert_eq!(accounts[1].password_hash, "h2");
}

#[test]
fn test_open_skips_blank_lines() {
    let (_temp, path) = setup_temp_store();
    fs::write(
        &path,
        "alice,alice@example.com,30,canada,1,h1\n\n   \nbob,bob@example.org,52,france,2,h2\n",
    )
    .unwrap();

    let store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn test_open_twice_is_identical() {
    let (_temp, path) = setup_temp_store();
    fs::write(
        &path,
        "alice,alice@example.com,30,canada,1,h1\nbob,bob@example.org,52,france,2,h2\n",
    )
    .unwrap();

    let first = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    let second = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();

    assert_eq!(first.all_accounts(), second.all_accounts());
}

// =============================================================================
// Malformed Record Tests
// =============================================================================

#[test]
fn test_open_wrong_field_count_is_fatal() {
    let (_temp, path) = setup_temp_store();
    fs::write(
        &path,
        "alice,alice@example.com,30,canada,1,h1\nbob,bob@example.org,52\n",
    )
    .unwrap();

    let err = RecordStore::open(&path, SyncStrategy::EveryAppend).err().unwrap();

    match err {
        DirectoryError::Record { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, RecordError::FieldCount { found: 3 });
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_open_bad_age_is_fatal() {
    let (_temp, path) = setup_temp_store();
    fs::write(&path, "alice,alice@example.com,old,canada,1,h1\n").unwrap();

    let err = RecordStore::open(&path, SyncStrategy::EveryAppend).err().unwrap();

    assert!(matches!(
        err,
        DirectoryError::Record { line: 1, source: RecordError::InvalidAge(_) }
    ));
}

#[test]
fn test_open_bad_tier_is_fatal() {
    let (_temp, path) = setup_temp_store();
    fs::write(&path, "alice,alice@example.com,30,canada,5,h1\n").unwrap();

    let err = RecordStore::open(&path, SyncStrategy::EveryAppend).err().unwrap();

    assert!(matches!(
        err,
        DirectoryError::Record { line: 1, source: RecordError::InvalidTier(_) }
    ));
}

#[test]
fn test_open_directory_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = RecordStore::open(temp_dir.path(), SyncStrategy::EveryAppend)
        .err()
        .unwrap();

    assert!(matches!(err, DirectoryError::Io(_)));
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_writes_line() {
    let (_temp, path) = setup_temp_store();
    let mut store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();

    store
        .append(account("alice", "alice@example.com", SubscriptionTier::Regional))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "alice,alice@example.com,30,canada,1,hash-of-alice\n");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_append_preserves_order() {
    let (_temp, path) = setup_temp_store();
    let mut store = RecordStore::open(&path, SyncStrategy::OsBuffered).unwrap();

    store
        .append(account("alice", "alice@example.com", SubscriptionTier::Regional))
        .unwrap();
    store
        .append(account("bob", "bob@example.org", SubscriptionTier::International))
        .unwrap();
    store
        .append(account("carol", "carol@example.net", SubscriptionTier::Regional))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("alice,"));
    assert!(lines[1].starts_with("bob,"));
    assert!(lines[2].starts_with("carol,"));

    let names: Vec<&str> = store.all_accounts().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_append_then_reopen() {
    let (_temp, path) = setup_temp_store();
    let alice = account("alice", "alice@example.com", SubscriptionTier::Regional);
    let bob = account("bob", "bob@example.org", SubscriptionTier::International);

    {
        let mut store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
        store.append(alice.clone()).unwrap();
        store.append(bob.clone()).unwrap();
    }

    let reopened = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    assert_eq!(reopened.all_accounts(), &[alice, bob]);
}

#[test]
fn test_append_after_unterminated_last_line() {
    let (_temp, path) = setup_temp_store();
    fs::write(&path, "alice,alice@example.com,30,canada,1,h1").unwrap();

    let mut store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    store
        .append(account("bob", "bob@example.org", SubscriptionTier::International))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "alice,alice@example.com,30,canada,1,h1\nbob,bob@example.org,30,canada,2,hash-of-bob\n"
    );

    let reopened = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_failed_append_leaves_memory_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("subscribers.db");

    let mut store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    let err = store
        .append(account("alice", "alice@example.com", SubscriptionTier::Regional))
        .unwrap_err();

    assert!(matches!(err, DirectoryError::Io(_)));
    assert!(store.is_empty());
    assert!(!store.contains_email("alice@example.com"));
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_email_lookups() {
    let (_temp, path) = setup_temp_store();
    let mut store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    store
        .append(account("alice", "alice@example.com", SubscriptionTier::Regional))
        .unwrap();
    store
        .append(account("bob", "bob@example.org", SubscriptionTier::International))
        .unwrap();

    assert!(store.contains_email("bob@example.org"));
    assert!(!store.contains_email("carol@example.net"));
    assert_eq!(store.find_by_email("alice@example.com").unwrap().name, "alice");

    let emails = store.emails();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains("alice@example.com"));
    assert!(emails.contains("bob@example.org"));
}

#[test]
fn test_path_accessor() {
    let (_temp, path) = setup_temp_store();
    let store = RecordStore::open(&path, SyncStrategy::EveryAppend).unwrap();
    assert_eq!(store.path(), path.as_path());
}
