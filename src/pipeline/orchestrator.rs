// src/pipeline/orchestrator.rs
// =============================================================================
// This module runs one complete audit.
//
// The stages, in order:
// 1. Validate the URL (reject before any network traffic)
// 2. Fetch the primary page - the only FATAL fetch in the pipeline
// 3. Parse the DOM and run every content check (pure, synchronous)
// 4. Concurrently: probe robots.txt + sitemap.xml and validate the sampled
//    same-domain links
// 5. Evaluate the checklist, score, generate suggestions, assemble report
//
// The whole thing races against the global deadline. Note one inherited
// quirk we keep on purpose: the link-check batch runs as a SPAWNED task, so
// when the deadline wins the race the audit returns a timeout while the
// already-started link checks keep running in the background until their
// own timeouts fire; their results are discarded. Known resource leak,
// asserted by a test below so a future fix is a conscious decision.
//
// Rust concepts:
// - tokio::time::timeout: The deadline race
// - tokio::join!: Running independent probes concurrently
// - tokio::spawn: Detaching the link-check batch
// =============================================================================

use std::time::Instant;

use reqwest::Client;
use url::Url;

use crate::analyzer;
use crate::checker;
use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::fetcher;
use crate::report::{
    generate_suggestions, score, CheckOutcomes, Issue, IssueKind, Locale,
    PerformanceMetricsProvider, SuggestionInput,
};
use crate::report::AuditReport;

/// Audits one page and returns the full report, or the first fatal error.
///
/// Auxiliary failures (robots.txt unreachable, individual links broken)
/// never surface here - they are downgraded into report fields.
pub async fn run_audit(
    url: &str,
    config: &AuditConfig,
    metrics_provider: &dyn PerformanceMetricsProvider,
    locale: Locale,
) -> Result<AuditReport, AuditError> {
    match tokio::time::timeout(
        config.global_deadline,
        audit_pipeline(url, config, metrics_provider, locale),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(AuditError::Timeout {
            scope: "analysis".to_string(),
        }),
    }
}

async fn audit_pipeline(
    url: &str,
    config: &AuditConfig,
    metrics_provider: &dyn PerformanceMetricsProvider,
    locale: Locale,
) -> Result<AuditReport, AuditError> {
    let started = Instant::now();

    let page_url = validate_url(url)?;
    let client = fetcher::build_client(config)?;

    // Stage: Fetching. The primary page is the only fatal fetch.
    let page = fetcher::fetch_with_timeout(&client, page_url.as_str(), config.fetch_timeout).await?;
    if !page.is_success() {
        return Err(AuditError::Fetch {
            status: page.status_code,
        });
    }
    let load_time = page.elapsed;

    // Stage: Content analysis. Synchronous - the DOM is parsed, mined and
    // dropped before the next await point (scraper's Html is not Send).
    let analysis = analyzer::analyze_document(&page.body, &page_url);

    // Stage: Link checking, detached. Spawning reproduces the inherited
    // leak: a global timeout abandons this task instead of cancelling it.
    let link_task = tokio::spawn({
        let client = client.clone();
        let links = analysis.same_domain_links.clone();
        let config = config.clone();
        async move { checker::check_links(&client, &links, &config).await }
    });

    // Stage: auxiliary probes, concurrently with each other
    let (robots, sitemap) = tokio::join!(
        probe_resource(&client, &page_url, "/robots.txt", config),
        probe_resource(&client, &page_url, "/sitemap.xml", config),
    );

    let broken_links = link_task.await.unwrap_or_default();

    // Assemble the full issue list: content issues first (detection order),
    // then the pipeline-level threshold and probe findings
    let mut issues = analysis.issues;

    let url_length = page_url.as_str().len();
    if url_length > config.max_url_length {
        issues.push(Issue::new(
            IssueKind::UrlTooLong,
            format!(
                "URL length ({}) is too long. Keep it under {} characters.",
                url_length, config.max_url_length
            ),
        ));
    }

    let has_ssl = page_url.scheme() == "https";
    if !has_ssl {
        issues.push(Issue::new(IssueKind::NotHttps, "Not using HTTPS"));
    }

    if load_time > config.load_time_threshold {
        issues.push(Issue::new(
            IssueKind::SlowLoadTime,
            format!(
                "Page load time ({}ms) is too slow. Aim for under 3 seconds.",
                load_time.as_millis()
            ),
        ));
    }

    match robots {
        ProbeOutcome::Found => {}
        ProbeOutcome::NotFound => issues.push(Issue::new(
            IssueKind::RobotsTxtMissing,
            "robots.txt file not found",
        )),
        ProbeOutcome::Unreachable => issues.push(Issue::new(
            IssueKind::RobotsTxtUnreachable,
            "Could not check robots.txt file",
        )),
    }

    match sitemap {
        ProbeOutcome::Found => {}
        ProbeOutcome::NotFound => issues.push(Issue::new(
            IssueKind::SitemapMissing,
            "sitemap.xml file not found",
        )),
        ProbeOutcome::Unreachable => issues.push(Issue::new(
            IssueKind::SitemapUnreachable,
            "Could not check sitemap.xml file",
        )),
    }

    // Stage: Scoring
    let has_robots_txt = matches!(robots, ProbeOutcome::Found);
    let has_sitemap = matches!(sitemap, ProbeOutcome::Found);
    let title_length = analysis.metadata.title.chars().count();
    let meta_description_length = analysis.metadata.meta_description.chars().count();

    let outcomes = CheckOutcomes {
        title_length_ok: (30..=60).contains(&title_length),
        meta_description_ok: (120..=160).contains(&meta_description_length),
        single_h1: analysis.metadata.h1_count == 1,
        images_have_alt: analysis.metadata.img_without_alt == 0,
        has_canonical: analysis.tags.has_canonical(),
        has_viewport: analysis.tags.has_viewport,
        https: has_ssl,
        has_schema: analysis.tags.has_schema,
        heading_hierarchy_valid: analysis.heading.is_valid,
        url_length_ok: url_length <= config.max_url_length,
        og_complete: analysis.tags.og_complete(),
        twitter_complete: analysis.tags.twitter_complete(),
        load_time_ok: load_time <= config.load_time_threshold,
        has_robots_txt,
        has_sitemap,
        has_meta_robots: analysis.tags.has_meta_robots(),
        has_hreflang: analysis.tags.has_hreflang,
        no_emails_exposed: analysis.personal_info.emails.is_empty(),
        no_phone_numbers_exposed: analysis.personal_info.phone_numbers.is_empty(),
        no_cifs_exposed: analysis.personal_info.cifs.is_empty(),
    };
    let overall_score = score(&outcomes);

    let performance = metrics_provider.measure();

    let suggestions = generate_suggestions(
        &SuggestionInput {
            title_length,
            meta_description_length,
            h1_count: analysis.metadata.h1_count,
            img_without_alt: analysis.metadata.img_without_alt,
            has_canonical: outcomes.has_canonical,
            has_viewport: outcomes.has_viewport,
            https: has_ssl,
            has_schema: outcomes.has_schema,
            heading_hierarchy_valid: outcomes.heading_hierarchy_valid,
            url_length,
            max_url_length: config.max_url_length,
            load_time,
            load_time_threshold: config.load_time_threshold,
            fcp_ms: performance.fcp_ms,
            lcp_ms: performance.lcp_ms,
            cls: performance.cls,
            has_robots_txt,
            has_sitemap,
            broken_links_count: broken_links.len(),
        },
        locale,
    );

    Ok(AuditReport {
        url: page_url.to_string(),
        load_time: load_time.as_millis(),
        title: analysis.metadata.title,
        meta_description: analysis.metadata.meta_description,
        h1_count: analysis.metadata.h1_count,
        img_count: analysis.metadata.img_count,
        img_without_alt: analysis.metadata.img_without_alt,
        seo_issues: issues,
        broken_links_count: broken_links.len(),
        broken_links,
        word_count: analysis.word_count,
        readability_score: analysis.readability_score,
        has_ssl,
        has_schema: outcomes.has_schema,
        overall_score,
        analysis_time: started.elapsed().as_millis(),
        heading_structure: analysis.heading.headings,
        heading_hierarchy_valid: analysis.heading.is_valid,
        url_length,
        has_robots_txt,
        has_sitemap,
        og_tags: analysis.tags.og,
        twitter_tags: analysis.tags.twitter,
        keyword_density: analysis.keyword_density,
        internal_links_count: analysis.link_counts.internal,
        external_links_count: analysis.link_counts.external,
        page_size: analysis.page_size,
        meta_robots: analysis.tags.meta_robots,
        canonical_url: analysis.tags.canonical_url,
        has_hreflang_tags: analysis.tags.has_hreflang,
        personal_info: analysis.personal_info,
        performance,
        suggestions,
    })
}

// Rejects the URL before any fetch happens
fn validate_url(url: &str) -> Result<Url, AuditError> {
    if url.trim().is_empty() {
        return Err(AuditError::Validation {
            url: url.to_string(),
            reason: "URL is required".to_string(),
        });
    }

    let parsed = Url::parse(url).map_err(|e| AuditError::Validation {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AuditError::Validation {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(parsed)
}

/// What probing an auxiliary resource concluded.
///
/// "Unreachable" is deliberately distinct from "NotFound": a request that
/// never got an answer is weaker evidence than a clean 404.
#[derive(Debug, Clone, Copy)]
enum ProbeOutcome {
    Found,
    NotFound,
    Unreachable,
}

// Never fatal: any failure is downgraded to a probe outcome
async fn probe_resource(
    client: &Client,
    page_url: &Url,
    path: &str,
    config: &AuditConfig,
) -> ProbeOutcome {
    let resource_url = match page_url.join(path) {
        Ok(url) => url,
        Err(_) => return ProbeOutcome::Unreachable,
    };

    match fetcher::fetch_with_timeout(client, resource_url.as_str(), config.fetch_timeout).await {
        Ok(result) if result.is_success() => ProbeOutcome::Found,
        Ok(_) => ProbeOutcome::NotFound,
        Err(_) => ProbeOutcome::Unreachable,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does tokio::time::timeout do?
//    - Races a future against a deadline
//    - If the deadline wins, the future is DROPPED - in Rust, dropping a
//      future cancels it (its in-flight requests are torn down)
//    - That's why the link check is tokio::spawn'ed: a spawned task is
//      owned by the runtime, not by our future, so dropping the pipeline
//      does NOT cancel it. That's the inherited leak described above.
//
// 2. What is tokio::join!?
//    - Runs several futures concurrently ON THE SAME task and waits for all
//    - No spawning, no Send requirement, results come back as a tuple
//    - Perfect for the two independent robots.txt/sitemap.xml probes
//
// 3. Why extract everything from the DOM before awaiting?
//    - scraper's Html type is not Send (it uses non-atomic reference
//      counting internally)
//    - Holding it across an .await would make the whole future non-Send
//    - So the analyzer parses, mines and drops the DOM synchronously and
//      returns plain owned data
//
// 4. What is &dyn PerformanceMetricsProvider?
//    - A trait object: "some implementation of the trait, decided at runtime"
//    - The pipeline doesn't care whether metrics are simulated or measured
// -----------------------------------------------------------------------------
