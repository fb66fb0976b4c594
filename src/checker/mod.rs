// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - discover: Finds same-domain links in the parsed page
// - validate: Makes HTTP requests to see which of them are broken
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod discover;
mod validate;

// Re-export public items from submodules
// This lets users write `checker::check_links()` instead of
// `checker::validate::check_links()`
pub use discover::discover_same_domain_links;
pub use validate::{check_links, LinkCheckOutcome};
