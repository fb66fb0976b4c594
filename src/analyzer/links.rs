// src/analyzer/links.rs
// =============================================================================
// This module counts internal vs external links on the page.
//
// Every anchor with an href is resolved against the page URL and classified
// by hostname: same hostname = internal, anything else = external. An href
// that doesn't resolve to a URL at all is skipped - it counts as neither.
//
// Note the difference from checker::discover: discovery collects candidate
// URLs for validation (http/https only, de-duplicated), while this is a raw
// tally over every anchor, duplicates included, for the report.
//
// Rust concepts:
// - if let chains over Option/Result for the happy path
// - url::Url::join for browser-style href resolution
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

/// Raw anchor tally for the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// Classifies every `a[href]` by hostname.
pub fn count_links(document: &Html, page_url: &Url) -> LinkCounts {
    let selector = Selector::parse("a[href]").unwrap();
    let page_host = page_url.host_str();

    let mut counts = LinkCounts::default();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // Malformed hrefs are skipped silently, not counted either way
            if let Ok(resolved) = page_url.join(href) {
                if resolved.host_str() == page_host {
                    counts.internal += 1;
                } else {
                    counts.external += 1;
                }
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str, page_url: &str) -> LinkCounts {
        let document = Html::parse_document(html);
        let url = Url::parse(page_url).unwrap();
        count_links(&document, &url)
    }

    #[test]
    fn test_classifies_by_hostname() {
        let html = r#"
            <a href="/about">About</a>
            <a href="https://example.com/contact">Contact</a>
            <a href="https://other.com/">Other</a>
        "#;
        let counts = count(html, "https://example.com/");
        assert_eq!(counts.internal, 2);
        assert_eq!(counts.external, 1);
    }

    #[test]
    fn test_duplicates_are_counted_each_time() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a>"#;
        let counts = count(html, "https://example.com/");
        assert_eq!(counts.internal, 2);
    }

    #[test]
    fn test_unresolvable_href_counts_as_neither() {
        let html = r#"<a href="https://">bad</a><a href="/ok">ok</a>"#;
        let counts = count(html, "https://example.com/");
        assert_eq!(counts.internal, 1);
        assert_eq!(counts.external, 0);
    }
}
