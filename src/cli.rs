// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::report::Locale;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "seo-guardian",
    version = "0.1.0",
    about = "A CLI tool that audits a web page for SEO and performance problems",
    long_about = "seo-guardian fetches a page, analyzes its HTML against a fixed SEO checklist \
                  (metadata, heading hierarchy, social tags, broken links, exposed personal data) \
                  and prints a scored report with concrete suggestions."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a web page and print the scored report
    ///
    /// Example: seo-guardian audit https://example.com --json
    Audit {
        /// Page URL to audit (must be absolute, http or https)
        ///
        /// This is a positional argument (required, no flag needed)
        url: String,

        /// Output the full report as JSON instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Language of the suggestion copy
        ///
        /// Affects message text only, never which suggestions fire
        #[arg(long, value_enum, default_value = "en")]
        locale: Locale,

        /// Override the global analysis deadline, in seconds (default: 60)
        ///
        /// If the whole audit takes longer than this it is abandoned
        /// and reported as a timeout
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
