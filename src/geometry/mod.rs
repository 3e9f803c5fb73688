//! Typed drawable fragments and the parametric primitives that produce them.

/// Fragment model (shape + resolved style).
pub mod fragment;
/// Noise, blob, particle, gear, facet and ring generators.
pub mod primitives;
