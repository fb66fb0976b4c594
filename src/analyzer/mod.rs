// src/analyzer/mod.rs
// =============================================================================
// This module is the pure, synchronous half of the audit: everything that
// can be computed from the fetched HTML and the page URL alone, with no
// further network traffic.
//
// Submodules:
// - headings: Heading hierarchy validation
// - metadata: Title/description lengths, image alt text, required tags
// - text: Keyword density, readability, word count
// - personal: Personal-data exposure (emails, phones, CIFs)
// - links: Internal vs external anchor tally
//
// The entry point parses the HTML exactly once and runs every check over
// the same DOM. The returned DocumentAnalysis owns all its data (plain
// Strings and numbers), so the caller can drop the DOM and cross await
// points freely - scraper's Html is not Send, the analysis result is.
//
// Rust concepts:
// - One owned "result" struct decoupling parsing from async orchestration
// - pub use re-exports forming the module's public API
// =============================================================================

mod headings;
mod links;
mod metadata;
mod personal;
mod text;

pub use headings::{analyze_heading_hierarchy, HeadingAnalysis, HeadingNode};
pub use links::{count_links, LinkCounts};
pub use metadata::{extract_metadata, extract_tags, PageMetadata, TagPresence};
pub use personal::detect_personal_info;
pub use text::{keyword_density, readability_score, word_count, KeywordDensity};

use scraper::{Html, Selector};
use url::Url;

use crate::checker;
use crate::report::{Issue, PersonalInfo};

/// Everything the content analyzer can say about one fetched page.
///
/// Fully owned: no references into the DOM survive in here.
#[derive(Debug)]
pub struct DocumentAnalysis {
    pub metadata: PageMetadata,
    pub heading: HeadingAnalysis,
    pub tags: TagPresence,
    pub keyword_density: Vec<KeywordDensity>,
    pub readability_score: f64,
    pub word_count: usize,
    /// Byte length of the raw HTML
    pub page_size: usize,
    pub personal_info: PersonalInfo,
    pub link_counts: LinkCounts,
    /// Same-domain link candidates for the link checker, first-seen order
    pub same_domain_links: Vec<String>,
    /// Content-derived issues, in detection order
    pub issues: Vec<Issue>,
}

/// Runs every content check over one parse of the HTML.
///
/// Pure and synchronous: the robots.txt/sitemap probes, the link checker and
/// the threshold checks that need the fetch timing live in the pipeline, not
/// here.
pub fn analyze_document(html: &str, page_url: &Url) -> DocumentAnalysis {
    let document = Html::parse_document(html);

    let metadata = metadata::extract_metadata(&document);
    let heading = headings::analyze_heading_hierarchy(&document);
    let tags = metadata::extract_tags(&document);

    let body_text = extract_body_text(&document);
    let keyword_density = text::keyword_density(&body_text);
    let readability_score = text::readability_score(&body_text);
    let word_count = text::word_count(&body_text);
    let personal_info = personal::detect_personal_info(&body_text);

    let link_counts = links::count_links(&document, page_url);
    let same_domain_links = checker::discover_same_domain_links(&document, page_url);

    // Assemble the content-derived issues in detection order
    let mut issues = metadata::metadata_issues(&metadata);
    issues.extend(heading.issues.iter().cloned());
    issues.extend(metadata::tag_issues(&tags));
    issues.extend(personal::personal_info_issues(&personal_info));

    DocumentAnalysis {
        metadata,
        heading,
        tags,
        keyword_density,
        readability_score,
        word_count,
        page_size: html.len(),
        personal_info,
        link_counts,
        same_domain_links,
        issues,
    }
}

// All text nodes under <body>, joined with spaces.
// Falls back to the whole document when there is no body element.
fn extract_body_text(document: &Html) -> String {
    let selector = Selector::parse("body").unwrap();
    match document.select(&selector).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => document.root_element().text().collect::<Vec<_>>().join(" "),
    }
}
