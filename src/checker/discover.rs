// src/checker/discover.rs
// =============================================================================
// This module finds the links we might want to validate.
//
// Only SAME-DOMAIN links are candidates for checking: an anchor whose
// resolved hostname equals the audited page's hostname. External links still
// get counted elsewhere (the analyzer tallies internal vs external), but we
// never fire validation requests at other people's domains.
//
// We use the `scraper` crate to query `a[href]` elements and the `url` crate
// to resolve relative hrefs against the page URL, exactly like a browser.
//
// Rust concepts:
// - Iterators and closures for processing the selected elements
// - Option<T> for hrefs that don't resolve to a usable URL
// - HashSet for de-duplication with O(1) lookup
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Collects all same-domain links from a parsed page, de-duplicated in
/// first-seen order.
///
/// Malformed hrefs are skipped silently: a broken `href` attribute is not a
/// broken link, it simply never becomes a candidate.
pub fn discover_same_domain_links(document: &Html, page_url: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    // "a[href]" is a constant selector, known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    let page_host = page_url.host_str();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let resolved = match resolve_link(page_url, href) {
                Some(url) => url,
                None => continue,
            };

            // Keep only http/https links on the page's own host
            if let Ok(parsed) = Url::parse(&resolved) {
                if (parsed.scheme() == "http" || parsed.scheme() == "https")
                    && parsed.host_str() == page_host
                    && seen.insert(resolved.clone())
                {
                    links.push(resolved);
                }
            }
        }
    }

    links
}

// Resolves a link (possibly relative) to an absolute URL
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    // Skip anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // base.join resolves relative hrefs and passes absolute ones through
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discover(html: &str, page_url: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let url = Url::parse(page_url).unwrap();
        discover_same_domain_links(&document, &url)
    }

    #[test]
    fn test_keeps_same_domain_only() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="https://example.com/about">About</a>
            <a href="https://other.com/page">Elsewhere</a>
        "#;
        let links = discover(html, "https://example.com/");
        assert_eq!(
            links,
            vec![
                "https://example.com/docs".to_string(),
                "https://example.com/about".to_string(),
            ]
        );
    }

    #[test]
    fn test_deduplicates_in_first_seen_order() {
        let html = r#"
            <a href="/a">First</a>
            <a href="/b">Second</a>
            <a href="/a">First again</a>
        "#;
        let links = discover(html, "https://example.com/");
        assert_eq!(
            links,
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ]
        );
    }

    #[test]
    fn test_skips_special_protocols_and_anchors() {
        let html = r##"
            <a href="#section">Anchor</a>
            <a href="mailto:a@example.com">Mail</a>
            <a href="tel:+123">Phone</a>
            <a href="javascript:void(0)">JS</a>
        "##;
        let links = discover(html, "https://example.com/");
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_href_is_skipped() {
        let html = r#"<a href="https://">Broken</a><a href="/ok">Ok</a>"#;
        let links = discover(html, "https://example.com/");
        assert_eq!(links, vec!["https://example.com/ok".to_string()]);
    }
}
