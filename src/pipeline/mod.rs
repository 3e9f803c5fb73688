//! Batch orchestration: per-creature generation, failure policy, cancellation and reporting.

/// Per-creature generation and batch runner.
pub mod batch;
/// Cooperative cancellation.
pub mod cancel;
/// Per-creature outcomes and batch summaries.
pub mod report;
