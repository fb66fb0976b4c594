// src/report/mod.rs
// =============================================================================
// This module owns everything that ends up in the final report.
//
// Submodules:
// - issue: Structured issues (kind + severity + message)
// - checklist: The fixed scoring checklist and the 0-100 score
// - suggestions: Localized, deterministic advice for failed checks
// - metrics: The performance-metrics provider (simulated by default)
// - audit: The AuditReport aggregate itself
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod audit;
mod checklist;
mod issue;
mod metrics;
mod suggestions;

pub use audit::{AuditReport, OgTags, PersonalInfo, TwitterTags};
pub use checklist::{score, ChecklistItem, CheckOutcomes};
pub use issue::{Issue, IssueKind, Severity};
pub use metrics::{PerformanceMetrics, PerformanceMetricsProvider, SimulatedMetrics};
pub use suggestions::{generate_suggestions, Locale, SuggestionInput};
