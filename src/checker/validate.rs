// src/checker/validate.rs
// =============================================================================
// This module checks whether a sample of discovered links is alive.
//
// Key functionality:
// - Truncates the candidate list to LINK_CHECK_LIMIT entries (sampling, not
//   exhaustive validation)
// - Processes the sample in sequential batches of CONCURRENT_REQUESTS_LIMIT:
//   every request in a batch runs concurrently, and we wait for the whole
//   batch before starting the next one. Peak outbound concurrency is
//   therefore bounded no matter how many links the page has.
// - Only FAILURES produce an outcome. A healthy link contributes nothing,
//   so the result is exactly the broken-link list for the report.
// - A failing link never aborts its batch or the audit.
//
// Rust concepts:
// - futures::future::join_all: The "full join" between batches
// - slice::chunks: Fixed-size batch iteration
// - Option<T>: "no outcome" for healthy links
// =============================================================================

use futures::future;
use reqwest::Client;
use serde::Serialize;

use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::fetcher;

/// One failed link validation.
///
/// `reason` is either the status line (`Status: 404`) or the description of
/// the network/timeout error.
#[derive(Debug, Clone, Serialize)]
pub struct LinkCheckOutcome {
    pub url: String,
    pub reason: String,
}

/// Validates a capped sample of links and returns the failures.
///
/// Result ordering is batch order, not input order: failures inside one
/// batch resolve at different times. Callers should treat the result as a
/// set.
pub async fn check_links(
    client: &Client,
    links: &[String],
    config: &AuditConfig,
) -> Vec<LinkCheckOutcome> {
    // Sampling policy: never examine more than link_check_limit entries
    let sample = &links[..links.len().min(config.link_check_limit)];

    let mut broken = Vec::new();

    for batch in sample.chunks(config.concurrent_requests_limit) {
        // Fire off the whole batch concurrently...
        let checks = batch.iter().map(|link| {
            let client = client.clone();
            async move { check_single_link(&client, link, config).await }
        });

        // ...and fully join it before the next batch starts
        for outcome in future::join_all(checks).await.into_iter().flatten() {
            broken.push(outcome);
        }
    }

    broken
}

// Checks one link. Returns Some(outcome) only if it failed.
async fn check_single_link(
    client: &Client,
    link: &str,
    config: &AuditConfig,
) -> Option<LinkCheckOutcome> {
    match fetcher::fetch_with_timeout(client, link, config.link_check_timeout).await {
        Ok(result) if result.is_success() => None,
        Ok(result) => Some(LinkCheckOutcome {
            url: link.to_string(),
            reason: format!("Status: {}", result.status_code),
        }),
        Err(AuditError::Timeout { .. }) => Some(LinkCheckOutcome {
            url: link.to_string(),
            reason: "Request timed out".to_string(),
        }),
        Err(e) => Some(LinkCheckOutcome {
            url: link.to_string(),
            reason: e.to_string(),
        }),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why batches instead of buffer_unordered?
//    - buffer_unordered(N) keeps N requests in flight at ALL times, starting
//      a new one the moment any finishes
//    - chunks(N) + join_all starts N, waits for all N, then starts the next N
//    - The batch version is what we want here: the full join between batches
//      is part of the contract, so peak connections stay at exactly N
//
// 2. What is join_all?
//    - Takes many futures and waits for every one of them
//    - Like Promise.all() in JavaScript, but it never rejects early -
//      each future resolves to its own value (here: Option<outcome>)
//
// 3. Why Option<LinkCheckOutcome> instead of Result?
//    - A healthy link isn't an error OR a result - it's simply nothing
//    - None = link fine, Some(outcome) = link broken with a reason
//    - .flatten() then drops all the Nones in one step
//
// 4. Why clone the client?
//    - Each async task needs its own handle to the client
//    - Client is cheap to clone (it's just a reference counter internally)
//    - This is a common pattern in async Rust
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> AuditConfig {
        AuditConfig {
            link_check_timeout: Duration::from_secs(2),
            ..AuditConfig::default()
        }
    }

    #[tokio::test]
    async fn test_only_failures_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = test_config();
        let client = fetcher::build_client(&config).unwrap();
        let links = vec![
            format!("{}/ok", server.uri()),
            format!("{}/gone", server.uri()),
        ];

        let broken = check_links(&client, &links, &config).await;

        assert_eq!(broken.len(), 1);
        assert!(broken[0].url.ends_with("/gone"));
        assert_eq!(broken[0].reason, "Status: 404");
    }

    #[tokio::test]
    async fn test_never_examines_more_than_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = test_config();
        let client = fetcher::build_client(&config).unwrap();

        // 30 candidates, but the sampling cap is 20
        let links: Vec<String> = (0..30).map(|i| format!("{}/p{}", server.uri(), i)).collect();
        let broken = check_links(&client, &links, &config).await;

        assert!(broken.is_empty());
        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), config.link_check_limit);
    }

    #[tokio::test]
    async fn test_batches_bound_concurrency() {
        let server = MockServer::start().await;
        let delay = Duration::from_millis(200);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&server)
            .await;

        let config = test_config();
        let client = fetcher::build_client(&config).unwrap();

        // 15 links in batches of 5 = 3 sequential batches. With a 200ms
        // response delay the run must take at least 3 batch-lengths; a fully
        // concurrent checker would finish in roughly one.
        let links: Vec<String> = (0..15).map(|i| format!("{}/p{}", server.uri(), i)).collect();

        let start = Instant::now();
        check_links(&client, &links, &config).await;
        let elapsed = start.elapsed();

        assert!(
            elapsed >= delay * 3,
            "15 links in batches of 5 finished in {:?}, batches are not joined",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_unreachable_link_becomes_outcome_not_error() {
        let config = test_config();
        let client = fetcher::build_client(&config).unwrap();

        // Nothing listens on this port
        let links = vec!["http://127.0.0.1:9/unreachable".to_string()];
        let broken = check_links(&client, &links, &config).await;

        assert_eq!(broken.len(), 1);
        assert!(!broken[0].reason.is_empty());
    }
}
