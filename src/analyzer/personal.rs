// src/analyzer/personal.rs
// =============================================================================
// This module detects personal data exposed in page text.
//
// This is a privacy-exposure check, not data extraction: the matches are
// surfaced read-only in the report so the site owner can see what a scraper
// would see. Three patterns are scanned for:
// - Email addresses
// - Spanish mobile phone numbers (optionally prefixed +34 / 0034 / 34)
// - Spanish company tax IDs (CIF: one letter, seven digits, one check char)
//
// Rust concepts:
// - The regex crate for pattern scanning ((?i) = case-insensitive flag)
// - Collecting matches into owned Strings for the report
// =============================================================================

use regex::Regex;

use crate::report::{Issue, IssueKind, PersonalInfo};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"(\+34|0034|34)?[ -]*(6|7)[ -]*([0-9][ -]*){8}";
const CIF_PATTERN: &str = r"(?i)[ABCDEFGHJKLMNPQRSUVW][0-9]{7}[0-9A-J]";

/// Scans the page text for all three personal-data patterns.
pub fn detect_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        emails: find_all(EMAIL_PATTERN, text),
        phone_numbers: find_all(PHONE_PATTERN, text),
        cifs: find_all(CIF_PATTERN, text),
    }
}

/// One issue per non-empty match list, reporting the count only.
pub fn personal_info_issues(info: &PersonalInfo) -> Vec<Issue> {
    let mut issues = Vec::new();

    if !info.emails.is_empty() {
        issues.push(Issue::new(
            IssueKind::EmailsExposed,
            format!("Found {} email(s) in page content", info.emails.len()),
        ));
    }
    if !info.phone_numbers.is_empty() {
        issues.push(Issue::new(
            IssueKind::PhoneNumbersExposed,
            format!(
                "Found {} phone number(s) in page content",
                info.phone_numbers.len()
            ),
        ));
    }
    if !info.cifs.is_empty() {
        issues.push(Issue::new(
            IssueKind::CifsExposed,
            format!("Found {} CIF(s) in page content", info.cifs.len()),
        ));
    }

    issues
}

fn find_all(pattern: &str, text: &str) -> Vec<String> {
    let regex = Regex::new(pattern).unwrap();
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
