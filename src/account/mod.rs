//! Account Module
//!
//! The subscriber record and its on-disk line format.
//!
//! ## Record Format
//! One account per line, six comma-separated fields, no escaping:
//! ```text
//! name,email,age,country,subscription_tier,password_hash
//! alice,alice@example.com,30,canada,1,$argon2id$v=19$m=19456,t=2,p=1$...
//! ```
//! The hash is always the last field, so commas inside it are kept.

mod record;

use std::fmt;

/// Access level bought by a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTier {
    /// Content of the subscriber's own region only
    Regional = 1,

    /// Content from every region
    International = 2,
}

impl SubscriptionTier {
    /// Numeric code used on disk and at the prompt
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for SubscriptionTier {
    type Error = i64;

    fn try_from(code: i64) -> std::result::Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Regional),
            2 => Ok(Self::International),
            other => Err(other),
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regional => f.write_str("regional"),
            Self::International => f.write_str("international"),
        }
    }
}

/// One subscriber
///
/// Text fields are stored lowercase. `password_hash` is whatever the
/// configured hasher produced; the plaintext never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub country: String,
    pub subscription_tier: SubscriptionTier,
    pub password_hash: String,
}
