//! Live smoke harness for the rendered login pages.
//!
//! This crate checks a running server from the outside: it fetches the
//! server-rendered entry and success pages over HTTP and verifies the element
//! ids and text that browser automation scripts rely on. Interaction itself
//! (typing, clicking, timers) is covered by the controller tests in `client`.

use std::time::{Duration, Instant};

/// Element ids the entry page must render.
pub const LOGIN_PAGE_IDS: &[&str] = &[
    "form-title",
    "login-form",
    "username",
    "password",
    "error-message",
    "create-account-btn",
    "signup-form",
    "new-username",
    "new-password",
    "confirm-password",
    "signup-message",
    "back-to-login-btn",
];

/// Element ids the success page must render.
pub const SUCCESS_PAGE_IDS: &[&str] = &["success-heading", "success-message", "logout-btn"];

/// Text fragments the success page must contain.
pub const SUCCESS_PAGE_TEXT: &[&str] = &["Secure Area", "successfully logged in", "logout-button"];

/// Runtime configuration for smoke checks, loaded from environment variables.
#[derive(Clone, Debug)]
pub struct SmokeConfig {
    /// HTTP base URL of the server under test (e.g. `"http://127.0.0.1:8000"`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SmokeConfig {
    /// Load smoke config from environment with sane defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("SMOKE_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:8000".to_owned());
        let timeout = Duration::from_secs(
            std::env::var("SMOKE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        );
        Self { base_url: base_url.trim_end_matches('/').to_owned(), timeout }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Error type for smoke harness operations.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    /// An HTTP request to the server failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("GET {path} returned {status}")]
    Status { path: String, status: u16 },
    /// The page rendered but lacks required markup.
    #[error("{path} is missing {missing:?}")]
    MissingMarkup { path: String, missing: Vec<String> },
}

/// A fetched page and how long it took.
#[derive(Clone, Debug)]
pub struct Page {
    pub path: String,
    pub html: String,
    pub elapsed: Duration,
}

/// Ids from `ids` that do not appear as `id="..."` attributes in `html`.
#[must_use]
pub fn missing_ids<'a>(html: &str, ids: &[&'a str]) -> Vec<&'a str> {
    ids.iter()
        .copied()
        .filter(|id| !html.contains(&format!("id=\"{id}\"")))
        .collect()
}

/// Fragments from `needles` that do not appear anywhere in `html`.
#[must_use]
pub fn missing_text<'a>(html: &str, needles: &[&'a str]) -> Vec<&'a str> {
    needles.iter().copied().filter(|n| !html.contains(n)).collect()
}

/// Fetch `path` and return its body.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn fetch_page(client: &reqwest::Client, config: &SmokeConfig, path: &str) -> Result<Page, SmokeError> {
    let started = Instant::now();
    let resp = client.get(config.url(path)).timeout(config.timeout).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(SmokeError::Status { path: path.to_owned(), status: status.as_u16() });
    }
    let html = resp.text().await?;
    Ok(Page { path: path.to_owned(), html, elapsed: started.elapsed() })
}

/// Fail with [`SmokeError::MissingMarkup`] unless every id and text fragment
/// is present on `page`.
///
/// # Errors
///
/// Returns [`SmokeError::MissingMarkup`] listing everything absent.
pub fn require_markup(page: &Page, ids: &[&str], text: &[&str]) -> Result<(), SmokeError> {
    let missing: Vec<String> = missing_ids(&page.html, ids)
        .into_iter()
        .chain(missing_text(&page.html, text))
        .map(str::to_owned)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SmokeError::MissingMarkup { path: page.path.clone(), missing })
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
