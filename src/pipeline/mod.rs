// src/pipeline/mod.rs
// =============================================================================
// This module is the orchestrator: it sequences the whole audit.
//
// Submodules:
// - orchestrator: fetch -> (content analysis || link check) -> score,
//   raced against the global deadline
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod orchestrator;

// Re-export the pipeline entry point
pub use orchestrator::run_audit;
