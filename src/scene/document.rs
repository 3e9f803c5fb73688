use crate::creature::CreatureDef;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::geometry::fragment::Fragment;

/// Largest accepted canvas edge, matching the rasterizer's allocation guard.
pub const MAX_CANVAS_PX: u32 = 16_384;

/// Scene layout options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneOpts {
    /// Square canvas edge in pixels; also the supersampled render size.
    pub canvas_px: u32,
}

impl Default for SceneOpts {
    fn default() -> Self {
        Self { canvas_px: 768 }
    }
}

impl SceneOpts {
    /// Reject zero or oversized canvases.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.canvas_px == 0 || self.canvas_px > MAX_CANVAS_PX {
            return Err(SpriteError::validation(format!(
                "canvas_px must be in 1..={MAX_CANVAS_PX}, got {}",
                self.canvas_px
            )));
        }
        Ok(())
    }

    /// Where creature-local `(0, 0)` lands on the canvas: horizontally centered, nudged down by
    /// a 48th of the canvas so the creature's feet clear the vignette.
    pub fn anchor(&self) -> Point {
        let s = f64::from(self.canvas_px);
        Point::new(s / 2.0, s / 2.0 + s / 48.0)
    }
}

/// One gradient stop. `offset` and `opacity` are fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the radius.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
    /// Stop opacity.
    pub opacity: f64,
}

impl GradientStop {
    /// Fully opaque stop.
    pub const fn solid(offset: f64, color: Color) -> Self {
        Self {
            offset,
            color,
            opacity: 1.0,
        }
    }
}

/// Full-canvas radial gradient. Geometry is expressed as fractions of the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// Document-unique id referenced by `url(#id)`.
    pub id: String,
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
    /// Stops in increasing offset order.
    pub stops: Vec<GradientStop>,
}

/// Shared edge darkening painted over every creature.
pub fn vignette() -> RadialGradient {
    RadialGradient {
        id: "vignette".to_owned(),
        cx: 0.5,
        cy: 0.5,
        r: 0.5,
        stops: vec![
            GradientStop {
                offset: 0.4,
                color: Color::BLACK,
                opacity: 0.0,
            },
            GradientStop {
                offset: 1.0,
                color: Color::BLACK,
                opacity: 0.7,
            },
        ],
    }
}

/// A creature's complete scene, ready for serialization.
///
/// Paint order is fixed: background, glow, the translated fragment group, vignette.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneDocument {
    /// Canvas edge in pixels.
    pub canvas_px: u32,
    /// Two-stop background wash.
    pub background: RadialGradient,
    /// Low-opacity glow behind the creature.
    pub glow: RadialGradient,
    /// Shared vignette.
    pub vignette: RadialGradient,
    /// Translation applied to all fragments.
    pub translate: Vec2,
    /// Creature fragments in paint order.
    pub fragments: Vec<Fragment>,
}

impl SceneDocument {
    /// Wrap a creature's fragments into a scene.
    pub fn assemble(
        def: &CreatureDef,
        fragments: Vec<Fragment>,
        opts: &SceneOpts,
    ) -> SpriteResult<Self> {
        opts.validate()?;
        def.validate()?;
        if fragments.is_empty() {
            return Err(SpriteError::validation(format!(
                "creature '{}' has no fragments to assemble",
                def.id
            )));
        }

        let (inner, outer) = def.background;
        Ok(Self {
            canvas_px: opts.canvas_px,
            background: RadialGradient {
                id: format!("bg-{}", def.id),
                cx: 0.5,
                cy: 0.45,
                r: 0.7,
                stops: vec![GradientStop::solid(0.0, inner), GradientStop::solid(1.0, outer)],
            },
            glow: RadialGradient {
                id: format!("glow-{}", def.id),
                cx: 0.5,
                cy: 0.4,
                r: 0.45,
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: def.glow,
                        opacity: 0.12,
                    },
                    GradientStop {
                        offset: 1.0,
                        color: def.glow,
                        opacity: 0.0,
                    },
                ],
            },
            vignette: vignette(),
            translate: opts.anchor().to_vec2(),
            fragments,
        })
    }
}
