//! Email syntax check
//!
//! The directory only needs a yes/no answer, so the grammar lives behind
//! `EmailValidator` and can be swapped out.

/// Email syntax predicate
pub trait EmailValidator {
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Pragmatic address check
///
/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part,
/// a domain of at least two non-empty dot-separated labels. Whitespace
/// and commas are never allowed (commas would break the record format).
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEmailValidator;

impl EmailValidator for BasicEmailValidator {
    fn is_valid_email(&self, email: &str) -> bool {
        if email.chars().any(|c| c.is_whitespace() || c == ',') {
            return false;
        }

        let (local, domain) = match email.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_alphanumeric() || c == '-')
            })
    }
}
