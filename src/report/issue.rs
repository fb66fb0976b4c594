// src/report/issue.rs
// =============================================================================
// This module defines structured SEO issues.
//
// Every issue carries a `kind` assigned at the moment it's detected, and the
// severity is a straight lookup over that kind. Nothing ever inspects the
// message text to decide how bad an issue is - the message is purely for
// humans.
//
// Rust concepts:
// - Enums: A closed set of issue kinds the compiler can check exhaustively
// - match: The severity table is one exhaustive match expression
// - #[derive(Serialize)]: Issues go straight into the JSON report
// =============================================================================

use serde::Serialize;

/// How bad an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Every kind of issue the audit can detect.
///
/// One variant per detectable deviation; adding a check means adding a
/// variant here, and the compiler then forces a severity entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    TitleLength,
    MetaDescriptionLength,
    ImagesMissingAlt,
    PageDoesNotStartWithH1,
    HeadingLevelJump,
    MissingH1,
    MultipleH1,
    MissingCanonical,
    MissingViewport,
    MissingSchemaMarkup,
    MissingOgTitle,
    MissingOgDescription,
    MissingOgImage,
    MissingTwitterCard,
    MissingTwitterTitle,
    MissingTwitterDescription,
    MissingTwitterImage,
    MissingMetaRobots,
    MissingHreflang,
    UrlTooLong,
    NotHttps,
    SlowLoadTime,
    RobotsTxtMissing,
    RobotsTxtUnreachable,
    SitemapMissing,
    SitemapUnreachable,
    EmailsExposed,
    PhoneNumbersExposed,
    CifsExposed,
}

impl IssueKind {
    /// The severity table.
    ///
    /// High: structural problems and anything a search engine outright
    /// requires. Low: checks we could not even perform (an unreachable
    /// robots.txt is weaker evidence than a missing one). Medium: the rest.
    pub fn severity(self) -> Severity {
        use IssueKind::*;
        match self {
            PageDoesNotStartWithH1
            | HeadingLevelJump
            | MissingH1
            | MultipleH1
            | ImagesMissingAlt
            | MissingCanonical
            | MissingViewport
            | MissingSchemaMarkup
            | MissingOgTitle
            | MissingOgDescription
            | MissingOgImage
            | MissingTwitterCard
            | MissingTwitterTitle
            | MissingTwitterDescription
            | MissingTwitterImage
            | MissingMetaRobots
            | MissingHreflang
            | UrlTooLong
            | NotHttps
            | SlowLoadTime
            | RobotsTxtMissing
            | SitemapMissing => Severity::High,

            RobotsTxtUnreachable | SitemapUnreachable => Severity::Low,

            TitleLength | MetaDescriptionLength | EmailsExposed | PhoneNumbersExposed
            | CifsExposed => Severity::Medium,
        }
    }
}

/// One detected deviation, ready for the report.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    /// Builds an issue; the severity comes from the kind, never from the
    /// message.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Issue {
            kind,
            message: message.into(),
            severity: kind.severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_comes_from_kind_not_message() {
        // Same message text, different kinds, different severities
        let a = Issue::new(IssueKind::RobotsTxtMissing, "robots.txt file not found");
        let b = Issue::new(IssueKind::RobotsTxtUnreachable, "robots.txt file not found");
        assert_eq!(a.severity, Severity::High);
        assert_eq!(b.severity, Severity::Low);
    }

    #[test]
    fn test_structural_issues_are_high() {
        assert_eq!(IssueKind::MultipleH1.severity(), Severity::High);
        assert_eq!(IssueKind::HeadingLevelJump.severity(), Severity::High);
        assert_eq!(IssueKind::NotHttps.severity(), Severity::High);
    }

    #[test]
    fn test_length_issues_are_medium() {
        assert_eq!(IssueKind::TitleLength.severity(), Severity::Medium);
        assert_eq!(IssueKind::MetaDescriptionLength.severity(), Severity::Medium);
    }
}
