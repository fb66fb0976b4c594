// src/report/audit.rs
// =============================================================================
// This module defines the final audit report.
//
// The AuditReport is the terminal aggregate of the whole pipeline: basic
// page facts, the issue list, broken links, keyword densities, social-tag
// presence, personal-data findings, the (synthetic) performance metrics,
// the overall score and the suggestion list. Once the pipeline returns it,
// nothing mutates it - it has no further lifecycle.
//
// Field names serialize in camelCase so the JSON matches what report
// consumers have always received (metaDescription, overallScore, ...).
//
// Rust concepts:
// - #[serde(rename_all = "camelCase")] for the wire format
// - Option<String> for tags that may be absent
// =============================================================================

use serde::Serialize;

use crate::analyzer::{HeadingNode, KeywordDensity};
use crate::checker::LinkCheckOutcome;
use crate::report::issue::Issue;
use crate::report::metrics::PerformanceMetrics;

/// Open Graph tag contents, None when the tag is absent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Twitter Card tag contents, None when the tag is absent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterTags {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Personal data found in the page text, surfaced read-only.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub cifs: Vec<String>,
}

/// The complete result of auditing one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub url: String,
    /// Time to fetch the primary page, milliseconds
    pub load_time: u128,
    pub title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub img_count: usize,
    pub img_without_alt: usize,
    pub seo_issues: Vec<Issue>,
    pub broken_links: Vec<LinkCheckOutcome>,
    pub broken_links_count: usize,
    pub word_count: usize,
    pub readability_score: f64,
    pub has_ssl: bool,
    pub has_schema: bool,
    /// 0-100, share of passed checklist items
    pub overall_score: f64,
    /// Total wall-clock time of the audit, milliseconds
    pub analysis_time: u128,
    pub heading_structure: Vec<HeadingNode>,
    pub heading_hierarchy_valid: bool,
    pub url_length: usize,
    pub has_robots_txt: bool,
    pub has_sitemap: bool,
    pub og_tags: OgTags,
    pub twitter_tags: TwitterTags,
    pub keyword_density: Vec<KeywordDensity>,
    pub internal_links_count: usize,
    pub external_links_count: usize,
    /// Byte length of the fetched HTML
    pub page_size: usize,
    pub meta_robots: Option<String>,
    pub canonical_url: Option<String>,
    pub has_hreflang_tags: bool,
    pub personal_info: PersonalInfo,
    /// SYNTHETIC unless a real provider was plugged in
    pub performance: PerformanceMetrics,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_in_camel_case() {
        let report = AuditReport {
            url: "https://example.com/".to_string(),
            load_time: 120,
            title: "t".to_string(),
            meta_description: String::new(),
            h1_count: 1,
            img_count: 0,
            img_without_alt: 0,
            seo_issues: Vec::new(),
            broken_links: Vec::new(),
            broken_links_count: 0,
            word_count: 10,
            readability_score: 80.0,
            has_ssl: true,
            has_schema: false,
            overall_score: 55.0,
            analysis_time: 300,
            heading_structure: Vec::new(),
            heading_hierarchy_valid: true,
            url_length: 20,
            has_robots_txt: true,
            has_sitemap: false,
            og_tags: OgTags::default(),
            twitter_tags: TwitterTags::default(),
            keyword_density: Vec::new(),
            internal_links_count: 2,
            external_links_count: 1,
            page_size: 512,
            meta_robots: None,
            canonical_url: None,
            has_hreflang_tags: false,
            personal_info: PersonalInfo::default(),
            performance: PerformanceMetrics {
                fcp_ms: 900,
                lcp_ms: 1800,
                cls: 0.05,
            },
            suggestions: Vec::new(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("metaDescription").is_some());
        assert!(json.get("overallScore").is_some());
        assert!(json.get("brokenLinksCount").is_some());
        assert!(json.get("headingHierarchyValid").is_some());
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("meta_description").is_none());
    }
}
