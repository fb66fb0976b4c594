// src/fetcher/mod.rs
// =============================================================================
// This module performs all outbound HTTP requests for an audit.
//
// Submodules:
// - http: The timeout-bounded GET and the shared client builder
//
// Everything the pipeline downloads (the page itself, robots.txt,
// sitemap.xml, sampled links) goes through this module, so the timeout and
// user-agent policy lives in exactly one place.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

// Re-export public items from submodules
pub use http::{build_client, fetch_with_timeout, FetchResult};
