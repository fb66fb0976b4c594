// src/error.rs
// =============================================================================
// This file defines the typed error returned by the audit pipeline.
//
// Only FATAL failures become an AuditError:
// - a URL that can't be parsed (we reject it before touching the network)
// - the primary page being unreachable or answering with a non-2xx status
// - the global deadline expiring
//
// Everything else (robots.txt missing, a discovered link timing out, ...)
// is absorbed into the report as a negative finding and never shows up here.
//
// Rust concepts:
// - thiserror: Derives std::error::Error + Display from an enum
// - Enums with data: Each failure kind carries what the caller needs
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// Fatal failures of the audit pipeline.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The request never made it to the network: the URL was missing,
    /// relative, or not http/https.
    #[error("invalid URL '{url}': {reason}")]
    Validation { url: String, reason: String },

    /// The primary page answered, but with a non-success status.
    /// Without the page body there is nothing to analyze.
    #[error("failed to fetch page: HTTP {status}")]
    Fetch { status: u16 },

    /// The primary page could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// Either a single fetch or the whole pipeline ran out of time.
    #[error("{scope} timed out")]
    Timeout { scope: String },
}

impl AuditError {
    /// Short machine-readable tag for the error kind.
    /// Used in the structured JSON error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AuditError::Validation { .. } => "validation_error",
            AuditError::Fetch { .. } => "fetch_error",
            AuditError::Network(_) => "network_error",
            AuditError::Timeout { .. } => "timeout_error",
        }
    }
}

/// The structured error body: `{error, message, details}`.
///
/// This is what callers see when the pipeline fails, whether they asked for
/// JSON or not (the table printer formats the same fields).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AuditError> for ErrorResponse {
    fn from(err: &AuditError) -> Self {
        let details = match err {
            AuditError::Validation { reason, .. } => Some(reason.clone()),
            AuditError::Fetch { status } => Some(format!("HTTP {}", status)),
            AuditError::Network(reason) => Some(reason.clone()),
            AuditError::Timeout { scope } => Some(scope.clone()),
        };
        ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            details,
        }
    }
}
