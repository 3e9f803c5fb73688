//! sprite-forge procedurally generates enemy sprites.
//!
//! Each creature in the static [catalog](creature::catalog) composes typed vector
//! [`Fragment`]s from a small set of parametric primitives. The fragments are wrapped into a
//! [`SceneDocument`] (background, glow, anchored creature, vignette), rendered with `resvg` at a
//! supersampled size, Lanczos3-downsampled, encoded to WebP or PNG and persisted through an
//! [`ArtifactSink`]. A flat size budget flags artifacts that came out too plain.
//!
//! WebP output is always lossless, so [`Effort`] only tunes PNG compression.
//!
//! - Pick creatures with [`creature::catalog::select`]
//! - Configure a [`BatchOpts`]
//! - Run [`run_batch`] and inspect the [`BatchReport`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Optional JSON config file.
pub mod config;
/// Creature catalog and layered composer.
pub mod creature;
/// Image encoders and artifact sinks.
pub mod encode;
/// Fragments and geometry primitives.
pub mod geometry;
/// Batch orchestration.
pub mod pipeline;
/// SVG rasterization.
pub mod render;
/// Scene assembly and SVG serialization.
pub mod scene;
/// Size budget and asset audit.
pub mod validate;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, BezPath, PathEl, Point, Rect, Span, Vec2};
pub use crate::foundation::error::{FailureKind, SpriteError, SpriteResult};
pub use crate::foundation::rng::{RandomSource, SpriteRng, time_seed};

pub use crate::config::ForgeConfig;
pub use crate::creature::CreatureDef;
pub use crate::encode::codec::{Effort, EncodeOpts, ImageFormat};
pub use crate::encode::sink::{ArtifactInfo, ArtifactSink, FileSink, InMemorySink};
pub use crate::geometry::fragment::{Fragment, Shape, Style};
pub use crate::pipeline::batch::{BatchOpts, FailurePolicy, generate_one, run_batch};
pub use crate::pipeline::cancel::CancelToken;
pub use crate::pipeline::report::{BatchReport, CreatureOutcome, GenerationResult};
pub use crate::render::raster::{RasterOpts, rasterize};
pub use crate::scene::document::{SceneDocument, SceneOpts};
pub use crate::validate::budget::BudgetCheck;
