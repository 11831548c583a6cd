//! Credential check and account creation rules.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use super::AuthConfig;
use super::form::{LoginFields, SignupFields};
use super::store::{CredentialRepository, StoreError};

pub const SIGNUP_SUCCESS_TEXT: &str = "Account created successfully! You can now login.";

/// User-facing auth failure. `Display` is the exact inline message text.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Username already exists.")]
    DuplicateUsername,
    #[error("Account storage is unavailable.")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { .. } => Self::DuplicateUsername,
            other => Self::Storage(other),
        }
    }
}

/// Where the browser should go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
}

impl Navigation {
    /// Destination of the success page's logout control.
    #[must_use]
    pub fn logout(config: &AuthConfig) -> Self {
        Self { href: config.entry_path.clone() }
    }
}

/// Check `fields` against the store.
///
/// Succeeds iff the username exists and the password matches exactly. Empty
/// strings are accepted as input and simply fail to match.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] on mismatch, [`AuthError::Storage`] if
/// the store cannot be read.
pub fn login<R>(repo: &R, fields: &LoginFields, config: &AuthConfig) -> Result<Navigation, AuthError>
where
    R: CredentialRepository + ?Sized,
{
    match repo.get(&fields.username)? {
        Some(stored) if stored == fields.password => Ok(Navigation { href: config.success_path.clone() }),
        _ => Err(AuthError::InvalidCredentials),
    }
}

/// Create a new account from `fields`.
///
/// Checks run in order and the first failure wins: password confirmation,
/// then username uniqueness. No store write happens on failure.
///
/// # Errors
///
/// [`AuthError::PasswordMismatch`], [`AuthError::DuplicateUsername`], or
/// [`AuthError::Storage`] when the store cannot be read or written.
pub fn signup<R>(repo: &mut R, fields: &SignupFields) -> Result<(), AuthError>
where
    R: CredentialRepository + ?Sized,
{
    if fields.password != fields.confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if repo.get(&fields.username)?.is_some() {
        return Err(AuthError::DuplicateUsername);
    }
    repo.put(&fields.username, &fields.password)?;
    Ok(())
}
