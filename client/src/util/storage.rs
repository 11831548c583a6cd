//! localStorage-backed credential repository.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole credential table lives under one key as a JSON object. Every
//! call re-reads the blob so edits made by other tabs are picked up; writes
//! read-modify-write the full table. Outside the `hydrate` build there is no
//! browser, so every call reports [`StoreError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::auth::store::{CredentialRepository, CredentialTable, StoreError};

/// Credential repository over `window.localStorage`.
#[derive(Clone, Debug)]
pub struct BrowserCredentials {
    key: String,
}

impl BrowserCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<CredentialTable>, StoreError> {
        match read_raw(&self.key)? {
            Some(raw) => Ok(Some(decode_table(&raw)?)),
            None => Ok(None),
        }
    }
}

impl CredentialRepository for BrowserCredentials {
    fn get(&self, username: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.and_then(|t| t.get(username).map(str::to_owned)))
    }

    fn put(&mut self, username: &str, password: &str) -> Result<(), StoreError> {
        let raw = read_raw(&self.key)?;
        let blob = merged_blob(raw.as_deref(), username, password)?;
        write_raw(&self.key, &blob)
    }

    fn initialized(&self) -> Result<bool, StoreError> {
        Ok(read_raw(&self.key)?.is_some())
    }
}

/// Parse a stored blob. A JSON `null` (what `JSON.stringify(null)` leaves
/// behind) reads as an empty table.
pub(crate) fn decode_table(raw: &str) -> Result<CredentialTable, StoreError> {
    let table: Option<CredentialTable> = serde_json::from_str(raw)?;
    Ok(table.unwrap_or_default())
}

/// Insert `username` into the stored blob `raw` (absent when the key is
/// unset) and return the full table re-encoded as a JSON object.
pub(crate) fn merged_blob(raw: Option<&str>, username: &str, password: &str) -> Result<String, StoreError> {
    let mut table = match raw {
        Some(raw) => decode_table(raw)?,
        None => CredentialTable::default(),
    };
    table.insert_new(username, password)?;
    Ok(serde_json::to_string(&table)?)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StoreError::Unavailable),
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn read_raw(key: &str) -> Result<Option<String>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).map_err(|_| StoreError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(StoreError::Unavailable)
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn write_raw(key: &str, raw: &str) -> Result<(), StoreError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(key, raw)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(StoreError::Unavailable)
    }
}
