//! Post-generation checks. Nothing here writes, retries or regenerates.

/// Directory-level placeholder audit.
pub mod audit;
/// Per-artifact minimum-size gate.
pub mod budget;
