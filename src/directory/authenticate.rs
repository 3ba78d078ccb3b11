//! Authentication flow

use crate::account::Account;
use crate::config::AuthStrategy;
use crate::error::{Result, ValidationError};
use crate::prompt::Prompter;
use crate::validate;

use super::{prompt_until, Directory};

/// Outcome of one email/password round
type Attempt<'a> = std::result::Result<&'a Account, ValidationError>;

impl Directory {
    /// Log an existing subscriber in interactively
    ///
    /// Asks for an email and a password until they identify an account,
    /// then returns a copy of it. A rejected pair starts over from the
    /// email prompt. How the pair is matched depends on `AuthStrategy`.
    pub fn authenticate<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Account> {
        loop {
            let attempt = match self.auth_strategy {
                AuthStrategy::EmailFirst => self.attempt_email_first(prompter)?,
                AuthStrategy::HashScan => self.attempt_hash_scan(prompter)?,
            };

            match attempt {
                Ok(account) => {
                    tracing::info!(email = %account.email, "Authenticated account");
                    return Ok(account.clone());
                }
                Err(rejection) => {
                    tracing::warn!("Failed login attempt: {}", rejection);
                    prompter.notify(&rejection.to_string());
                }
            }
        }
    }

    /// Resolve the email to its account, then check the password against
    /// that account only
    ///
    /// Unknown emails are re-asked before the password prompt.
    fn attempt_email_first<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Attempt<'_>> {
        let account = prompt_until(prompter, "Email: ", |answer| {
            let email = validate::email_syntax(answer, self.email_validator.as_ref())?;
            self.store
                .find_by_email(&email)
                .ok_or(ValidationError::UnknownEmail)
        })?;

        let password = self.prompt_password(prompter)?;

        if self.hasher.verify(&account.password_hash, &password)? {
            Ok(Ok(account))
        } else {
            Ok(Err(ValidationError::IncorrectPassword))
        }
    }

    /// Check the password against every account in store order
    ///
    /// The first account whose hash verifies wins, as long as the typed
    /// email belongs to some account. The winner is not required to own
    /// the typed email.
    fn attempt_hash_scan<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Attempt<'_>> {
        let email = prompt_until(prompter, "Email: ", |answer| {
            validate::email_syntax(answer, self.email_validator.as_ref())
        })?;

        let password = self.prompt_password(prompter)?;

        let existing = self.store.emails();
        if !existing.contains(email.as_str()) {
            return Ok(Err(ValidationError::UnknownEmail));
        }

        for account in self.store.all_accounts() {
            if self.hasher.verify(&account.password_hash, &password)? {
                if account.email != email {
                    tracing::warn!(
                        "Password matched an account other than the one owning the typed email"
                    );
                }
                return Ok(Ok(account));
            }
        }

        Ok(Err(ValidationError::IncorrectPassword))
    }

    fn prompt_password<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<String> {
        prompt_until(prompter, "Password (min 6 characters): ", validate::password)
    }
}
