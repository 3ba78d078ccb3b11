//! Registration flow

use crate::account::Account;
use crate::error::{Result, ValidationError};
use crate::prompt::Prompter;
use crate::validate;

use super::{prompt_until, Directory};

impl Directory {
    /// Register a new subscriber interactively
    ///
    /// Steps (each field re-asked until valid):
    /// 1. Name
    /// 2. Email (syntax and uniqueness)
    /// 3. Age
    /// 4. Country
    /// 5. Subscription tier
    /// 6. Password, hashed immediately
    ///
    /// The account is appended to the store before it is returned.
    pub fn register<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Account> {
        let name = prompt_until(prompter, "Name: ", validate::name)?;
        let email = self.prompt_new_email(prompter)?;
        let age = prompt_until(prompter, "Age: ", validate::age)?;
        let country = prompt_until(prompter, "Country: ", validate::country)?;
        let subscription_tier = prompt_until(
            prompter,
            "Subscription tier - 1 (regional) or 2 (international): ",
            validate::tier,
        )?;
        let password = prompt_until(
            prompter,
            "Password (min 6 characters): ",
            validate::password,
        )?;

        let password_hash = self.hasher.hash(&password)?;

        let account = Account {
            name,
            email,
            age,
            country,
            subscription_tier,
            password_hash,
        };

        self.store.append(account.clone())?;

        tracing::info!(
            email = %account.email,
            tier = %account.subscription_tier,
            "Registered new account"
        );

        Ok(account)
    }

    /// Ask for an email that is well formed and not yet registered
    ///
    /// Both rules are checked on every answer and every violated rule is
    /// reported.
    fn prompt_new_email<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<String> {
        loop {
            let answer = prompter.ask("Email: ")?;
            let email = answer.to_lowercase();

            let mut rejections = Vec::new();
            if !self.email_validator.is_valid_email(&email) {
                rejections.push(ValidationError::InvalidEmail);
            }
            if self.store.contains_email(&email) {
                rejections.push(ValidationError::EmailTaken);
            }

            if rejections.is_empty() {
                return Ok(email);
            }

            for rejection in rejections {
                tracing::debug!("Rejected registration email: {}", rejection);
                prompter.notify(&rejection.to_string());
            }
        }
    }
}
