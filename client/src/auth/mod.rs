//! Browser-independent auth core for the login/signup screen.
//!
//! ARCHITECTURE
//! ============
//! `store` defines the credential repository seam, `form` is the pure
//! two-view state machine, `handlers` hold the credential check and account
//! creation rules, and `schedule` abstracts the delayed return to login.
//! `controller` wires them together for the page. Nothing in here touches
//! `web-sys`; browser implementations live in `crate::util`.

pub mod controller;
pub mod form;
pub mod handlers;
pub mod schedule;
pub mod store;

use std::time::Duration;

/// localStorage key holding the JSON credential table.
pub const DEFAULT_STORAGE_KEY: &str = "users";
/// Account created on first load when the store is empty.
pub const DEFAULT_SEED_USERNAME: &str = "brettmiller";
pub const DEFAULT_SEED_PASSWORD: &str = "password";
/// Page reached after a valid login.
pub const DEFAULT_SUCCESS_PATH: &str = "/success.html";
/// Entry page; logout returns here.
pub const DEFAULT_ENTRY_PATH: &str = "/index.html";
/// Delay before the signup view flips back to login after account creation.
pub const DEFAULT_SIGNUP_RETURN_DELAY: Duration = Duration::from_millis(2000);

/// Tunables for the auth screen. `Default` reproduces the shipped behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub storage_key: String,
    pub seed_username: String,
    pub seed_password: String,
    pub success_path: String,
    pub entry_path: String,
    pub signup_return_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            seed_username: DEFAULT_SEED_USERNAME.to_owned(),
            seed_password: DEFAULT_SEED_PASSWORD.to_owned(),
            success_path: DEFAULT_SUCCESS_PATH.to_owned(),
            entry_path: DEFAULT_ENTRY_PATH.to_owned(),
            signup_return_delay: DEFAULT_SIGNUP_RETURN_DELAY,
        }
    }
}
