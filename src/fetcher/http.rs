// src/fetcher/http.rs
// =============================================================================
// This module makes timeout-bounded HTTP GET requests.
//
// Key functionality:
// - One reqwest Client per audit (connection pooling, cheap to clone)
// - Every request carries the fixed SEOAuditBot user agent
// - Every request is wrapped in an explicit tokio timeout; on expiry the
//   in-flight future is dropped (which cancels the request) and we raise a
//   typed timeout error instead of hanging
// - No retries: a failed attempt is reported upward exactly once
//
// Rust concepts:
// - async/await: For network I/O without blocking
// - tokio::time::timeout: Races a future against a deadline
// - Result<T, E>: For error handling with the ? operator
// =============================================================================

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::config::AuditConfig;
use crate::error::AuditError;

/// What a completed fetch produced.
///
/// Owned by the call that made the request; nothing retains it after the
/// analysis that consumes it.
#[derive(Debug)]
pub struct FetchResult {
    /// HTTP status code of the response
    pub status_code: u16,
    /// The full response body as text
    pub body: String,
    /// How long the request took, from send to fully-read body
    pub elapsed: Duration,
}

impl FetchResult {
    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Builds the HTTP client used for every request in one audit.
///
/// The client is cheap to clone (internally reference counted), so the link
/// checker can hand a copy to each concurrent task.
pub fn build_client(config: &AuditConfig) -> Result<Client, AuditError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| AuditError::Network(e.to_string()))
}

/// Fetches a URL with an explicit time budget.
///
/// The timeout covers the whole operation: connecting, sending, and reading
/// the body. On expiry the request future is dropped, which aborts the
/// underlying connection - a slow server can never stall the audit past its
/// budget.
///
/// A non-2xx response is NOT an error here: the caller decides whether a 404
/// is fatal (primary page) or just a finding (robots.txt, sampled links).
pub async fn fetch_with_timeout(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchResult, AuditError> {
    let start = Instant::now();

    let fetch = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| AuditError::Network(e.to_string()))?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuditError::Network(e.to_string()))?;

        Ok::<FetchResult, AuditError>(FetchResult {
            status_code,
            body,
            elapsed: start.elapsed(),
        })
    };

    match tokio::time::timeout(timeout, fetch).await {
        Ok(result) => result,
        Err(_) => Err(AuditError::Timeout {
            scope: format!("fetch of {}", url),
        }),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does the cancellation-on-timeout work?
//    - tokio::time::timeout(d, fut) polls fut until d elapses
//    - If time runs out, fut is dropped; dropping a reqwest future closes
//      the connection it was using
//    - So "cancelled" really means cancelled, not "ignored in the background"
//
// 2. Why not set the timeout on the Client instead?
//    - The client is shared between the page fetch (10s budget) and the
//      link checks (5s budget)
//    - One client-level timeout couldn't express two budgets; an explicit
//      timeout per call can
//
// 3. What is Ok::<FetchResult, AuditError>(...)?
//    - The "turbofish": it pins down the error type of the async block
//    - Inside the block, ? needs to know what E it converts errors into
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_is_success_range() {
        let ok = FetchResult {
            status_code: 204,
            body: String::new(),
            elapsed: Duration::from_millis(1),
        };
        assert!(ok.is_success());

        let redirect = FetchResult {
            status_code: 301,
            body: String::new(),
            elapsed: Duration::from_millis(1),
        };
        assert!(!redirect.is_success());
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", "Mozilla/5.0 (compatible; SEOAuditBot/1.0;)"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let config = AuditConfig::default();
        let client = build_client(&config).unwrap();
        let result = fetch_with_timeout(&client, &server.uri(), config.fetch_timeout)
            .await
            .unwrap();

        assert_eq!(result.status_code, 200);
        assert_eq!(result.body, "hello");
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = AuditConfig::default();
        let client = build_client(&config).unwrap();
        let result =
            fetch_with_timeout(&client, &server.uri(), Duration::from_millis(100)).await;

        match result {
            Err(AuditError::Timeout { scope }) => assert!(scope.contains("fetch of")),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_success_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = AuditConfig::default();
        let client = build_client(&config).unwrap();
        let result = fetch_with_timeout(&client, &server.uri(), config.fetch_timeout)
            .await
            .unwrap();

        assert_eq!(result.status_code, 404);
        assert!(!result.is_success());
    }
}
