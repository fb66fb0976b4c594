// src/analyzer/metadata.rs
// =============================================================================
// This module extracts page metadata and checks for required tags.
//
// Two families of checks live here:
// - Length checks: the title and meta description have optimal length bands
//   (30-60 and 120-160 characters). A missing tag counts as length 0.
// - Presence checks: canonical, viewport, schema markup, Open Graph tags,
//   Twitter Card tags, hreflang alternates and the meta robots tag. Each is
//   a simple CSS-selector query; each absent tag is its own issue.
//
// Rust concepts:
// - Option<String>: A tag that may or may not exist
// - CSS selectors via the scraper crate (like querySelector in a browser)
// =============================================================================

use scraper::{Html, Selector};

use crate::report::{Issue, IssueKind, OgTags, TwitterTags};

/// Basic page facts read straight off the DOM.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub img_count: usize,
    pub img_without_alt: usize,
}

/// Which of the required tags the page carries.
#[derive(Debug, Clone)]
pub struct TagPresence {
    pub canonical_url: Option<String>,
    pub has_viewport: bool,
    pub has_schema: bool,
    pub og: OgTags,
    pub twitter: TwitterTags,
    pub has_hreflang: bool,
    pub meta_robots: Option<String>,
}

impl TagPresence {
    pub fn has_canonical(&self) -> bool {
        self.canonical_url.is_some()
    }

    /// All three Open Graph members present
    pub fn og_complete(&self) -> bool {
        self.og.title.is_some() && self.og.description.is_some() && self.og.image.is_some()
    }

    /// All four Twitter Card members present
    pub fn twitter_complete(&self) -> bool {
        self.twitter.card.is_some()
            && self.twitter.title.is_some()
            && self.twitter.description.is_some()
            && self.twitter.image.is_some()
    }

    pub fn has_meta_robots(&self) -> bool {
        self.meta_robots.is_some()
    }
}

/// Pulls title, meta description and the image/h1 tallies from the DOM.
pub fn extract_metadata(document: &Html) -> PageMetadata {
    let title = select_text(document, "title");
    let meta_description =
        select_attr(document, r#"meta[name="description"]"#, "content").unwrap_or_default();

    let h1_count = document
        .select(&Selector::parse("h1").unwrap())
        .count();

    let img_selector = Selector::parse("img").unwrap();
    let mut img_count = 0;
    let mut img_without_alt = 0;
    for img in document.select(&img_selector) {
        img_count += 1;
        if img.value().attr("alt").is_none() {
            img_without_alt += 1;
        }
    }

    PageMetadata {
        title,
        meta_description,
        h1_count,
        img_count,
        img_without_alt,
    }
}

/// Queries every required tag once.
pub fn extract_tags(document: &Html) -> TagPresence {
    TagPresence {
        canonical_url: select_attr(document, r#"link[rel="canonical"]"#, "href"),
        has_viewport: exists(document, r#"meta[name="viewport"]"#),
        has_schema: exists(document, r#"script[type="application/ld+json"]"#),
        og: OgTags {
            title: select_attr(document, r#"meta[property="og:title"]"#, "content"),
            description: select_attr(document, r#"meta[property="og:description"]"#, "content"),
            image: select_attr(document, r#"meta[property="og:image"]"#, "content"),
        },
        twitter: TwitterTags {
            card: select_attr(document, r#"meta[name="twitter:card"]"#, "content"),
            title: select_attr(document, r#"meta[name="twitter:title"]"#, "content"),
            description: select_attr(document, r#"meta[name="twitter:description"]"#, "content"),
            image: select_attr(document, r#"meta[name="twitter:image"]"#, "content"),
        },
        has_hreflang: exists(document, r#"link[rel="alternate"][hreflang]"#),
        meta_robots: select_attr(document, r#"meta[name="robots"]"#, "content"),
    }
}

/// Issues for the two length bands.
pub fn metadata_issues(metadata: &PageMetadata) -> Vec<Issue> {
    let mut issues = Vec::new();

    let title_len = metadata.title.chars().count();
    if !(30..=60).contains(&title_len) {
        issues.push(Issue::new(
            IssueKind::TitleLength,
            format!("Title length ({}) is not optimal (30-60 chars)", title_len),
        ));
    }

    let description_len = metadata.meta_description.chars().count();
    if !(120..=160).contains(&description_len) {
        issues.push(Issue::new(
            IssueKind::MetaDescriptionLength,
            format!(
                "Meta description length ({}) is not optimal (120-160 chars)",
                description_len
            ),
        ));
    }

    if metadata.h1_count == 0 {
        issues.push(Issue::new(IssueKind::MissingH1, "No H1 tag found"));
    }

    if metadata.img_without_alt > 0 {
        issues.push(Issue::new(
            IssueKind::ImagesMissingAlt,
            format!(
                "{} out of {} images are missing alt text",
                metadata.img_without_alt, metadata.img_count
            ),
        ));
    }

    issues
}

/// Issues for every absent required tag.
pub fn tag_issues(tags: &TagPresence) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !tags.has_canonical() {
        issues.push(Issue::new(IssueKind::MissingCanonical, "No canonical tag found"));
    }
    if !tags.has_viewport {
        issues.push(Issue::new(IssueKind::MissingViewport, "No viewport meta tag found"));
    }
    if !tags.has_schema {
        issues.push(Issue::new(
            IssueKind::MissingSchemaMarkup,
            "No schema markup detected",
        ));
    }
    if tags.og.title.is_none() {
        issues.push(Issue::new(IssueKind::MissingOgTitle, "Missing Open Graph title tag"));
    }
    if tags.og.description.is_none() {
        issues.push(Issue::new(
            IssueKind::MissingOgDescription,
            "Missing Open Graph description tag",
        ));
    }
    if tags.og.image.is_none() {
        issues.push(Issue::new(IssueKind::MissingOgImage, "Missing Open Graph image tag"));
    }
    if tags.twitter.card.is_none() {
        issues.push(Issue::new(IssueKind::MissingTwitterCard, "Missing Twitter Card tag"));
    }
    if tags.twitter.title.is_none() {
        issues.push(Issue::new(IssueKind::MissingTwitterTitle, "Missing Twitter title tag"));
    }
    if tags.twitter.description.is_none() {
        issues.push(Issue::new(
            IssueKind::MissingTwitterDescription,
            "Missing Twitter description tag",
        ));
    }
    if tags.twitter.image.is_none() {
        issues.push(Issue::new(IssueKind::MissingTwitterImage, "Missing Twitter image tag"));
    }
    if !tags.has_meta_robots() {
        issues.push(Issue::new(IssueKind::MissingMetaRobots, "Missing meta robots tag"));
    }
    if !tags.has_hreflang {
        issues.push(Issue::new(
            IssueKind::MissingHreflang,
            "No hreflang tags found for internationalization",
        ));
    }

    issues
}

// First matching element's text content, trimmed
fn select_text(document: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

// First matching element's attribute value
fn select_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.to_string())
}

// True if any element matches
fn exists(document: &Html, selector: &str) -> bool {
    let selector = Selector::parse(selector).unwrap();
    document.select(&selector).next().is_some()
}
