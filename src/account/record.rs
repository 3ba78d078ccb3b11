//! Record codec
//!
//! Converts between `Account` and its single-line text form.

use crate::error::RecordError;

use super::{Account, SubscriptionTier};

/// Number of fields in a record line
const FIELD_COUNT: usize = 6;

/// Separator between fields
const FIELD_SEPARATOR: char = ',';

impl Account {
    /// Render the account as one record line (without line terminator)
    ///
    /// Format: name,email,age,country,tier,password_hash
    pub fn to_record(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.name,
            self.email,
            self.age,
            self.country,
            self.subscription_tier.as_u8(),
            self.password_hash,
            sep = FIELD_SEPARATOR,
        )
    }

    /// Parse one record line
    ///
    /// Only the line terminator is stripped; field text is kept as
    /// written. The line is split into at most six fields, so the
    /// trailing hash may itself contain commas.
    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line
            .trim_end_matches(['\r', '\n'])
            .splitn(FIELD_COUNT, FIELD_SEPARATOR)
            .collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                found: fields.len(),
            });
        }

        let name = non_empty("name", fields[0])?;
        let email = non_empty("email", fields[1])?;

        let age = fields[2]
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidAge(fields[2].to_string()))?;

        let country = non_empty("country", fields[3])?;

        let subscription_tier = fields[4]
            .parse::<i64>()
            .ok()
            .and_then(|code| SubscriptionTier::try_from(code).ok())
            .ok_or_else(|| RecordError::InvalidTier(fields[4].to_string()))?;

        let password_hash = non_empty("password_hash", fields[5])?;

        Ok(Self {
            name,
            email,
            age,
            country,
            subscription_tier,
            password_hash,
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, RecordError> {
    if value.is_empty() {
        return Err(RecordError::EmptyField(field));
    }
    Ok(value.to_string())
}
