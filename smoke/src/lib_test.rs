use super::*;

fn page(html: &str) -> Page {
    Page { path: "/".to_owned(), html: html.to_owned(), elapsed: Duration::ZERO }
}

// =============================================================================
// Pure checks
// =============================================================================

#[test]
fn missing_ids_reports_absent_attributes() {
    let html = r#"<form id="login-form"><input id="username"/></form>"#;
    assert_eq!(missing_ids(html, &["login-form", "username", "password"]), vec!["password"]);
}

#[test]
fn missing_ids_requires_exact_attribute() {
    let html = r#"<input id="new-username"/>"#;
    assert_eq!(missing_ids(html, &["username"]), vec!["username"]);
}

#[test]
fn require_markup_lists_everything_missing() {
    let err = require_markup(&page("<h1>Secure Area</h1>"), &["logout-btn"], &["Secure Area", "logged in"])
        .unwrap_err();
    match err {
        SmokeError::MissingMarkup { missing, .. } => assert_eq!(missing, vec!["logout-btn", "logged in"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn require_markup_passes_complete_page() {
    let html = r#"<h1 id="success-heading">Secure Area</h1>"#;
    assert!(require_markup(&page(html), &["success-heading"], &["Secure Area"]).is_ok());
}

#[test]
fn url_joins_without_double_slash() {
    let config = SmokeConfig { base_url: "http://localhost:8000".to_owned(), timeout: Duration::from_secs(1) };
    assert_eq!(config.url("/success.html"), "http://localhost:8000/success.html");
    assert_eq!(config.url("index.html"), "http://localhost:8000/index.html");
}

// =============================================================================
// Live checks
// =============================================================================

#[tokio::test]
#[ignore = "live smoke test; start the server and run with --ignored"]
async fn entry_page_exposes_form_contract() -> Result<(), SmokeError> {
    let config = SmokeConfig::from_env();
    let client = reqwest::Client::new();
    for path in ["/", "/index.html"] {
        let page = fetch_page(&client, &config, path).await?;
        require_markup(&page, LOGIN_PAGE_IDS, &["Welcome Back", "active-form", "hidden-form"])?;
        println!("[{path}] {} bytes in {:?}", page.html.len(), page.elapsed);
    }
    Ok(())
}

#[tokio::test]
#[ignore = "live smoke test; start the server and run with --ignored"]
async fn success_page_exposes_logout() -> Result<(), SmokeError> {
    let config = SmokeConfig::from_env();
    let client = reqwest::Client::new();
    let page = fetch_page(&client, &config, "/success.html").await?;
    require_markup(&page, SUCCESS_PAGE_IDS, SUCCESS_PAGE_TEXT)?;
    println!("[/success.html] {} bytes in {:?}", page.html.len(), page.elapsed);
    Ok(())
}

#[tokio::test]
#[ignore = "live smoke test; start the server and run with --ignored"]
async fn health_and_logo_are_served() -> Result<(), SmokeError> {
    let config = SmokeConfig::from_env();
    let client = reqwest::Client::new();
    fetch_page(&client, &config, "/healthz").await?;
    fetch_page(&client, &config, "/windsurf-white-wordmark.svg").await?;
    Ok(())
}
