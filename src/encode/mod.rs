//! Image encoding and artifact persistence.
//!
//! Encoders turn a finished raster into compressed bytes; sinks decide where those bytes live.

/// WebP / PNG encoders.
pub mod codec;
/// Artifact sinks (filesystem and in-memory).
pub mod sink;
