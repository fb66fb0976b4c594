// src/report/checklist.rs
// =============================================================================
// This module defines THE scoring checklist.
//
// There is exactly one checklist in the whole crate: twenty boolean
// criteria, each weighing the same. The overall score is simply the share
// of passed criteria as a percentage, which makes it a pure function of the
// flag vector - same flags in, same score out, and flipping any single flag
// moves the score by exactly 100/20 = 5 points.
//
// Rust concepts:
// - An enum listing the criteria, so nothing can score against an item the
//   compiler doesn't know about
// - A fixed-size array tying each item to its outcome
// =============================================================================

use serde::Serialize;

/// Every criterion that contributes to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    TitleLength,
    MetaDescriptionLength,
    SingleH1,
    ImagesHaveAlt,
    Canonical,
    Viewport,
    Https,
    SchemaMarkup,
    HeadingHierarchy,
    UrlLength,
    OpenGraphComplete,
    TwitterCardsComplete,
    LoadTime,
    RobotsTxt,
    Sitemap,
    MetaRobots,
    Hreflang,
    NoEmailsExposed,
    NoPhoneNumbersExposed,
    NoCifsExposed,
}

/// The number of checklist items. Each one is worth 100/20 = 5 points.
pub const TOTAL_CHECKS: usize = 20;

/// The outcome of every checklist item for one audited page.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOutcomes {
    pub title_length_ok: bool,
    pub meta_description_ok: bool,
    pub single_h1: bool,
    pub images_have_alt: bool,
    pub has_canonical: bool,
    pub has_viewport: bool,
    pub https: bool,
    pub has_schema: bool,
    pub heading_hierarchy_valid: bool,
    pub url_length_ok: bool,
    pub og_complete: bool,
    pub twitter_complete: bool,
    pub load_time_ok: bool,
    pub has_robots_txt: bool,
    pub has_sitemap: bool,
    pub has_meta_robots: bool,
    pub has_hreflang: bool,
    pub no_emails_exposed: bool,
    pub no_phone_numbers_exposed: bool,
    pub no_cifs_exposed: bool,
}

impl CheckOutcomes {
    /// Pairs every checklist item with its outcome.
    pub fn flags(&self) -> [(ChecklistItem, bool); TOTAL_CHECKS] {
        use ChecklistItem::*;
        [
            (TitleLength, self.title_length_ok),
            (MetaDescriptionLength, self.meta_description_ok),
            (SingleH1, self.single_h1),
            (ImagesHaveAlt, self.images_have_alt),
            (Canonical, self.has_canonical),
            (Viewport, self.has_viewport),
            (Https, self.https),
            (SchemaMarkup, self.has_schema),
            (HeadingHierarchy, self.heading_hierarchy_valid),
            (UrlLength, self.url_length_ok),
            (OpenGraphComplete, self.og_complete),
            (TwitterCardsComplete, self.twitter_complete),
            (LoadTime, self.load_time_ok),
            (RobotsTxt, self.has_robots_txt),
            (Sitemap, self.has_sitemap),
            (MetaRobots, self.has_meta_robots),
            (Hreflang, self.has_hreflang),
            (NoEmailsExposed, self.no_emails_exposed),
            (NoPhoneNumbersExposed, self.no_phone_numbers_exposed),
            (NoCifsExposed, self.no_cifs_exposed),
        ]
    }

    fn passed(&self) -> usize {
        self.flags().iter().filter(|(_, ok)| *ok).count()
    }
}

/// The 0-100 overall score: passed checks over total checks.
pub fn score(outcomes: &CheckOutcomes) -> f64 {
    outcomes.passed() as f64 / TOTAL_CHECKS as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_passing() -> CheckOutcomes {
        CheckOutcomes {
            title_length_ok: true,
            meta_description_ok: true,
            single_h1: true,
            images_have_alt: true,
            has_canonical: true,
            has_viewport: true,
            https: true,
            has_schema: true,
            heading_hierarchy_valid: true,
            url_length_ok: true,
            og_complete: true,
            twitter_complete: true,
            load_time_ok: true,
            has_robots_txt: true,
            has_sitemap: true,
            has_meta_robots: true,
            has_hreflang: true,
            no_emails_exposed: true,
            no_phone_numbers_exposed: true,
            no_cifs_exposed: true,
        }
    }

    #[test]
    fn test_perfect_page_scores_one_hundred() {
        assert_eq!(score(&all_passing()), 100.0);
    }

    #[test]
    fn test_failing_page_scores_zero() {
        assert_eq!(score(&CheckOutcomes::default()), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let outcomes = CheckOutcomes {
            https: true,
            has_viewport: true,
            ..CheckOutcomes::default()
        };
        assert_eq!(score(&outcomes), score(&outcomes));
    }

    #[test]
    fn test_one_flag_moves_score_by_exactly_one_share() {
        let full = all_passing();
        let mut one_off = all_passing();
        one_off.has_sitemap = false;

        let delta = score(&full) - score(&one_off);
        assert_eq!(delta, 100.0 / TOTAL_CHECKS as f64);
    }

    #[test]
    fn test_flag_count_matches_total() {
        assert_eq!(all_passing().flags().len(), TOTAL_CHECKS);
    }
}
