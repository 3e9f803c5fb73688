//! Scene assembly: gradients, anchoring transform and SVG serialization.

/// Scene model and assembly.
pub mod document;
/// SVG writer.
pub mod svg;

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;
