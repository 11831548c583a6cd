//! Credential store contract and the in-memory implementation.
//!
//! DESIGN
//! ======
//! The table is a flat `username -> password` map with no schema beyond
//! strings. Entries are only ever inserted; nothing updates or deletes them.
//! Passwords are kept and compared as plaintext, matching the demo this
//! screen reproduces.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AuthConfig;

/// Persisted username -> password mapping.
///
/// Serializes as a bare JSON object, e.g. `{"brettmiller":"password"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialTable(BTreeMap<String, String>);

impl CredentialTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&str> {
        self.0.get(username).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.0.contains_key(username)
    }

    /// Insert a new account. Existing usernames are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if `username` is already present.
    pub fn insert_new(&mut self, username: &str, password: &str) -> Result<(), StoreError> {
        if self.contains(username) {
            return Err(StoreError::AlreadyExists { username: username.to_owned() });
        }
        self.0.insert(username.to_owned(), password.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Failure reading or writing the credential store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username already exists: {username}")]
    AlreadyExists { username: String },
    #[error("credential storage is unavailable")]
    Unavailable,
    #[error("stored credential table is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("credential storage write failed: {0}")]
    Write(String),
}

/// Injected repository seam over wherever credentials live.
pub trait CredentialRepository {
    /// Password for `username`, if the account exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, username: &str) -> Result<Option<String>, StoreError>;

    /// Insert-if-absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] when the username is taken, or a
    /// storage error if the write cannot be completed.
    fn put(&mut self, username: &str, password: &str) -> Result<(), StoreError>;

    /// Whether the backing record has been created yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be inspected.
    fn initialized(&self) -> Result<bool, StoreError>;
}

/// Insert the configured default account if the store has never been written.
///
/// Returns `true` when the seed was inserted.
///
/// # Errors
///
/// Propagates repository failures.
pub fn seed_default<R: CredentialRepository + ?Sized>(repo: &mut R, config: &AuthConfig) -> Result<bool, StoreError> {
    if repo.initialized()? {
        return Ok(false);
    }
    repo.put(&config.seed_username, &config.seed_password)?;
    Ok(true)
}

/// In-memory repository for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    table: Option<CredentialTable>,
}

impl MemoryCredentials {
    /// An uninitialized store; the first `put` or seed creates the table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `table` (and is therefore initialized).
    #[must_use]
    pub fn with_table(table: CredentialTable) -> Self {
        Self { table: Some(table) }
    }

    #[must_use]
    pub fn table(&self) -> Option<&CredentialTable> {
        self.table.as_ref()
    }
}

impl CredentialRepository for MemoryCredentials {
    fn get(&self, username: &str) -> Result<Option<String>, StoreError> {
        Ok(self.table.as_ref().and_then(|t| t.get(username)).map(str::to_owned))
    }

    fn put(&mut self, username: &str, password: &str) -> Result<(), StoreError> {
        self.table.get_or_insert_with(CredentialTable::new).insert_new(username, password)
    }

    fn initialized(&self) -> Result<bool, StoreError> {
        Ok(self.table.is_some())
    }
}
