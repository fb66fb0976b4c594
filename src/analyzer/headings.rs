// src/analyzer/headings.rs
// =============================================================================
// This module validates the heading hierarchy of a page.
//
// The rules:
// 1. The first heading on the page must be an H1
// 2. Heading levels may only increase one step at a time
//    (H2 directly followed by H4 skips H3 - that's a jump)
// 3. There must be at most one H1 on the whole page
//
// Rust concepts:
// - Structs to bundle the verdict with the evidence (the heading list)
// - Iterators over selected elements, in document order
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;

use crate::report::{Issue, IssueKind};

/// One heading element, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct HeadingNode {
    /// 1 for <h1> through 6 for <h6>
    pub level: u8,
    pub text: String,
}

/// The verdict on a page's heading structure.
#[derive(Debug, Clone)]
pub struct HeadingAnalysis {
    /// False as soon as any rule was violated
    pub is_valid: bool,
    /// All headings found, in document order
    pub headings: Vec<HeadingNode>,
    pub issues: Vec<Issue>,
}

/// Collects every h1-h6 element and checks the three hierarchy rules.
pub fn analyze_heading_hierarchy(document: &Html) -> HeadingAnalysis {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();

    let headings: Vec<HeadingNode> = document
        .select(&selector)
        .map(|element| {
            // Element names are h1..h6, so the second byte is the level digit
            let level = element.value().name().as_bytes()[1] - b'0';
            let text = element.text().collect::<String>().trim().to_string();
            HeadingNode { level, text }
        })
        .collect();

    let mut issues = Vec::new();
    let mut previous_level = 0u8;

    for (i, heading) in headings.iter().enumerate() {
        // Rule 1: the page must open with an H1.
        // We still scan the rest of the document from here on.
        if i == 0 && heading.level != 1 {
            issues.push(Issue::new(
                IssueKind::PageDoesNotStartWithH1,
                "Page does not start with an H1",
            ));
            continue;
        }

        // Rule 2: no skipping levels on the way down.
        // When no heading was seen yet, the implied previous level is 1.
        if heading.level > previous_level && heading.level - previous_level.max(1) > 1 {
            issues.push(Issue::new(
                IssueKind::HeadingLevelJump,
                format!(
                    "Incorrect hierarchy jump: from H{} to H{}",
                    previous_level.max(1),
                    heading.level
                ),
            ));
        }

        previous_level = heading.level;
    }

    // Rule 3: at most one H1
    let h1_count = headings.iter().filter(|h| h.level == 1).count();
    if h1_count > 1 {
        issues.push(Issue::new(
            IssueKind::MultipleH1,
            format!("Found {} H1 tags (there should be only one)", h1_count),
        ));
    }

    HeadingAnalysis {
        is_valid: issues.is_empty(),
        headings,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> HeadingAnalysis {
        analyze_heading_hierarchy(&Html::parse_document(html))
    }

    #[test]
    fn test_clean_hierarchy_is_valid() {
        let result = analyze("<h1>Top</h1><h2>Section</h2><h3>Sub</h3><h2>Next</h2>");
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
        assert_eq!(result.headings.len(), 4);
    }

    #[test]
    fn test_h1_to_h3_jump_is_reported() {
        let result = analyze("<h1>Top</h1><h3>Too deep</h3>");
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::HeadingLevelJump);
        assert!(result.issues[0].message.contains("from H1 to H3"));
    }

    #[test]
    fn test_two_h1_elements_are_reported() {
        let result = analyze("<h1>One</h1><h1>Two</h1>");
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::MultipleH1);
        assert!(result.issues[0].message.contains('2'));
    }

    #[test]
    fn test_page_not_starting_with_h1() {
        let result = analyze("<h2>Intro</h2><h3>Detail</h3>");
        assert!(!result.is_valid);
        assert_eq!(result.issues[0].kind, IssueKind::PageDoesNotStartWithH1);
    }

    #[test]
    fn test_no_headings_is_valid_hierarchy() {
        // A page with no headings has no hierarchy violations; the missing
        // H1 shows up through the h1-count checklist item instead.
        let result = analyze("<p>Just text</p>");
        assert!(result.is_valid);
        assert!(result.headings.is_empty());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let result = analyze("<h1>A</h1><h2>B</h2><h2>C</h2>");
        let texts: Vec<&str> = result.headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
        assert_eq!(result.headings[0].level, 1);
    }
}
