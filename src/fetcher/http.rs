// src/fetcher/http.rs
// =============================================================================
// This module fetches the target page over HTTP.
//
// Key functionality:
// - Prepends https:// when the target has no scheme ("example.com" works)
// - Makes exactly one GET request with a browser-like User-Agent
// - Enforces a request timeout (10 seconds by default)
// - Treats any 4xx/5xx status as a failure, never as valid HTML
//
// There are no retries and no special redirect handling beyond what
// reqwest does by default (it follows standard redirects).
//
// Rust concepts:
// - async/await: For the network I/O
// - Result<T, E>: For error handling
// - const: Compile-time string constants
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

// A desktop-browser User-Agent string. Some sites refuse requests that
// identify as a script, so we declare ourselves as Chrome on Windows.
// This exact value is part of the tool's observable behavior - changing
// it changes which pages we can fetch.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Normalizes a target string into a fully-qualified URL
//
// Parameters:
//   target: whatever the user typed ("example.com", "https://a.com/x", ...)
//
// Returns: a String that carries a scheme
//
// If the string already parses as an absolute URL it passes through
// untouched; otherwise we assume the user meant https. No further
// validation happens here - anything still malformed is rejected by
// the network layer when we try to request it.
pub fn normalize_target(target: &str) -> String {
    match Url::parse(target) {
        // Already has a scheme ("https://...", even "mailto:...")
        Ok(_) => target.to_string(),
        // No scheme - "example.com" fails to parse as an absolute URL
        Err(_) => format!("https://{}", target),
    }
}

// Fetches a web page and returns its HTML content
//
// Parameters:
//   url: the (already normalized) URL to request
//   timeout_secs: how long to wait before giving up
//
// Returns: Result<String>
//   Success: the full response body as text
//   Error: one descriptive error covering every failure mode
//          (DNS, connection refused, timeout, 4xx/5xx status)
//
// The caller decides what to do with a failure; this function never
// panics and never returns an error page's body as if it were valid.
pub async fn fetch_page(url: &str, timeout_secs: u64) -> Result<String> {
    // Build a client with our timeout and browser User-Agent
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(BROWSER_USER_AGENT)
        .build()?;

    // The one and only network request this tool makes
    let response = client
        .get(url)
        .send()
        .await
        .map_err(describe_request_error)?;

    // Got a response - but a 404 page is still a failure, not content.
    // status().is_success() is true only for 2xx codes.
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("HTTP {} for {}", status, url));
    }

    // Buffer the whole body as text before parsing (no streaming)
    let html = response.text().await.map_err(describe_request_error)?;
    Ok(html)
}

// Turns a reqwest error into a human-readable diagnostic
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / connection refused
// - Malformed response
//
// They all collapse into one error kind, but the message tells the
// user which one actually happened.
fn describe_request_error(error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        anyhow!("request timed out: {}", error)
    } else if error.is_connect() {
        anyhow!("connection failed: {}", error)
    } else {
        anyhow!(error)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does normalize_target use Url::parse as the scheme check?
//    - Url::parse only succeeds on absolute URLs (ones with a scheme)
//    - "example.com" fails to parse, so we know to prepend https://
//    - This is more reliable than looking for "://" by hand
//
// 2. What is map_err?
//    - Transforms the error inside a Result without touching the Ok value
//    - Here it swaps reqwest's error for our descriptive anyhow one
//    - The ? right after it then propagates that error upward
//
// 3. Why check is_success() explicitly?
//    - reqwest does NOT treat a 404 as an error - the request "worked"
//    - If we skipped the check, we'd happily scrape links off an error
//      page, which is almost never what the user wants
//
// 4. Why build the client inside the function?
//    - This tool makes exactly one request per run, so there's no
//      connection pool worth sharing
//    - It also lets each call carry its own timeout
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_https_scheme() {
        assert_eq!(normalize_target("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_adds_scheme_to_host_with_path() {
        assert_eq!(
            normalize_target("example.com/dir/page.html"),
            "https://example.com/dir/page.html"
        );
    }

    #[test]
    fn test_normalize_keeps_https() {
        assert_eq!(
            normalize_target("https://example.com/x"),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(normalize_target("http://example.com"), "http://example.com");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><a href=\"/docs\">Docs</a></body></html>")
            .create_async()
            .await;

        let html = fetch_page(&server.url(), 10).await.unwrap();
        assert!(html.contains("href=\"/docs\""));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", BROWSER_USER_AGENT)
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        fetch_page(&server.url(), 10).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_404_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(404)
            .with_body("<html>not found</html>")
            .create_async()
            .await;

        let result = fetch_page(&server.url(), 10).await;
        assert!(result.is_err());
        // The diagnostic names the status so the user can tell a 404
        // apart from, say, a DNS failure
        assert!(result.unwrap_err().to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_500_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        assert!(fetch_page(&server.url(), 10).await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_an_error() {
        // Nothing listens on port 1; the connection is refused immediately
        let result = fetch_page("http://127.0.0.1:1/", 2).await;
        assert!(result.is_err());
    }
}
