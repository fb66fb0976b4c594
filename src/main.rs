// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the audit pipeline against the given URL
// 3. Print the report (human table or JSON)
// 4. Exit with proper code (0 = clean, 1 = high-severity issues, 2 = error)
//
// Rust concepts used:
// - async/await: Because the audit makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analyzer; // src/analyzer/ - pure content analysis
mod checker; // src/checker/ - link discovery and validation
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - timeouts and limits
mod error; // src/error.rs - the typed pipeline error
mod fetcher; // src/fetcher/ - timeout-bounded HTTP GETs
mod pipeline; // src/pipeline/ - the orchestrator
mod report; // src/report/ - issues, checklist, score, suggestions

use std::time::Duration;

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, Commands};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use config::AuditConfig;
use error::{AuditError, ErrorResponse};
use report::{AuditReport, Locale, Severity, SimulatedMetrics};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = audit completed, no high-severity issues
//   Ok(1) = audit completed, high-severity issues found
//   Ok(2) = audit failed (bad URL, unreachable page, timeout)
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            url,
            json,
            locale,
            timeout_secs,
        } => handle_audit(&url, json, locale, timeout_secs).await,
    }
}

// Handles the 'audit' subcommand
async fn handle_audit(
    url: &str,
    json: bool,
    locale: Locale,
    timeout_secs: Option<u64>,
) -> Result<i32> {
    let mut config = AuditConfig::default();
    if let Some(secs) = timeout_secs {
        config.global_deadline = Duration::from_secs(secs);
    }

    if !json {
        println!("🔍 Auditing: {}", url);
    }

    // The metrics provider is injected here; swap in a real one when
    // browser instrumentation exists
    let metrics = SimulatedMetrics;

    match pipeline::run_audit(url, &config, &metrics, locale).await {
        Ok(report) => {
            let high_severity = report
                .seo_issues
                .iter()
                .filter(|i| i.severity == Severity::High)
                .count();

            print_report(&report, json)?;

            if high_severity > 0 {
                Ok(1) // Exit code 1 = high-severity issues found
            } else {
                Ok(0) // Exit code 0 = all good
            }
        }
        Err(e) => {
            print_error(&e, json)?;
            Ok(2) // Exit code 2 = the audit itself failed
        }
    }
}

// Prints the report either as a table or JSON
fn print_report(report: &AuditReport, json: bool) -> Result<()> {
    if json {
        // Serialize the full report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

// Prints the structured error body, matching the JSON error shape
fn print_error(error: &AuditError, json: bool) -> Result<()> {
    let body = ErrorResponse::from(error);
    if json {
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("❌ {}: {}", body.error, body.message);
        if let Some(details) = body.details {
            eprintln!("   {}", details);
        }
    }
    Ok(())
}

// Prints the report as a human-readable summary in the terminal
fn print_table(report: &AuditReport) {
    println!();
    println!("📊 Overall score: {:.0}/100", report.overall_score);
    println!("{}", "=".repeat(60));

    println!("🌐 {}", report.url);
    println!("   Title: {}", truncate(&report.title, 50));
    println!(
        "   Load time: {}ms | Page size: {} bytes | Words: {}",
        report.load_time, report.page_size, report.word_count
    );
    println!(
        "   Readability: {:.0}/100 | Links: {} internal, {} external",
        report.readability_score, report.internal_links_count, report.external_links_count
    );
    println!(
        "   ⚠️  Performance metrics are SIMULATED: FCP {}ms, LCP {}ms, CLS {:.2}",
        report.performance.fcp_ms, report.performance.lcp_ms, report.performance.cls
    );

    if !report.seo_issues.is_empty() {
        println!();
        println!("🚩 Issues ({}):", report.seo_issues.len());
        for issue in &report.seo_issues {
            println!("   {} {}", severity_icon(issue.severity), issue.message);
        }
    }

    if !report.broken_links.is_empty() {
        println!();
        println!("🔗 Broken links ({}):", report.broken_links_count);
        for link in &report.broken_links {
            println!("   ❌ {} ({})", truncate(&link.url, 57), link.reason);
        }
    }

    if !report.keyword_density.is_empty() {
        println!();
        println!("🔑 Top keywords:");
        for keyword in &report.keyword_density {
            println!("   {:<20} {:.2}%", keyword.word, keyword.density);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("💡 Suggestions:");
        for suggestion in &report.suggestions {
            println!("   → {}", suggestion);
        }
    }

    println!();
}

// Formats the severity as a small icon
fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴",
        Severity::Medium => "🟡",
        Severity::Low => "🔵",
    }
}

// Truncates a string for display
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
