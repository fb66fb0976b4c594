// src/config.rs
// =============================================================================
// This file holds the audit configuration.
//
// The original constants (timeouts, limits) live in one explicit struct that
// gets passed into the pipeline, instead of module-level globals. That way
// tests can construct an AuditConfig with much tighter bounds and exercise
// timeout behavior without waiting 60 seconds.
//
// Rust concepts:
// - Structs: Group related configuration values
// - Default trait: Provides the "production" values out of the box
// - Duration: Type-safe time spans (no raw millisecond integers floating around)
// =============================================================================

use std::time::Duration;

/// Configuration for one audit run.
///
/// All values are read-only once the audit starts; nothing in the pipeline
/// mutates this struct.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Deadline for the whole pipeline. If analysis takes longer than this,
    /// we abandon it and report a timeout.
    pub global_deadline: Duration,

    /// Timeout for each individual page fetch (primary page, robots.txt,
    /// sitemap.xml).
    pub fetch_timeout: Duration,

    /// Shorter timeout used when validating discovered links.
    pub link_check_timeout: Duration,

    /// At most this many discovered links are ever validated.
    /// This is a sampling policy, not exhaustive checking.
    pub link_check_limit: usize,

    /// Peak number of concurrent outbound requests during link checking.
    /// Links are processed in batches of this size with a full join between
    /// batches.
    pub concurrent_requests_limit: usize,

    /// Identifying user-agent header sent with every request.
    pub user_agent: String,

    /// Page load time above this threshold raises an issue.
    pub load_time_threshold: Duration,

    /// URLs longer than this raise an issue.
    pub max_url_length: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            global_deadline: Duration::from_secs(60),
            fetch_timeout: Duration::from_secs(10),
            link_check_timeout: Duration::from_secs(5),
            link_check_limit: 20,
            concurrent_requests_limit: 5,
            user_agent: "Mozilla/5.0 (compatible; SEOAuditBot/1.0;)".to_string(),
            load_time_threshold: Duration::from_millis(3000),
            max_url_length: 75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = AuditConfig::default();
        assert_eq!(config.link_check_limit, 20);
        assert_eq!(config.concurrent_requests_limit, 5);
        assert_eq!(config.global_deadline, Duration::from_secs(60));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.link_check_timeout, Duration::from_secs(5));
    }
}
