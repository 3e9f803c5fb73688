//! Creature definitions and the layered composer that turns them into fragment lists.

/// Static creature catalog.
pub mod catalog;
/// Layered fragment accumulator.
pub mod composer;

mod common;
mod spire;

use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::rng::RandomSource;
use crate::geometry::fragment::Fragment;

use composer::Composer;

/// Fills a [`Composer`] with one creature's parts.
pub type ComposeFn = fn(&mut Composer<'_>) -> SpriteResult<()>;

/// Immutable description of one generated creature.
#[derive(Clone, Copy)]
pub struct CreatureDef {
    /// Stable identifier; also the artifact file stem.
    pub id: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Background gradient stops (center, edge).
    pub background: (Color, Color),
    /// Glow gradient color.
    pub glow: Color,
    /// Part builder.
    pub compose: ComposeFn,
}

impl CreatureDef {
    /// Run the compose function and flatten the result into paint order.
    pub fn build_parts(&self, rng: &mut dyn RandomSource) -> SpriteResult<Vec<Fragment>> {
        let mut composer = Composer::new(rng);
        (self.compose)(&mut composer).map_err(|e| e.for_creature(self.id))?;
        composer.finish().map_err(|e| e.for_creature(self.id))
    }

    /// Check that `id` is non-empty and only uses `[A-Za-z0-9_-]`.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.id.is_empty() {
            return Err(SpriteError::validation("creature id must be non-empty"));
        }
        if let Some(bad) = self
            .id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(SpriteError::validation(format!(
                "creature id '{}' contains '{bad}', not filename-safe",
                self.id
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for CreatureDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatureDef")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("background", &self.background)
            .field("glow", &self.glow)
            .finish_non_exhaustive()
    }
}

/// Five curved claws fanning out from `hand` over the angular `(start, spread)` range.
///
/// Bases sit on a 10x8 ellipse around the hand, tips reach 20 horizontally and `reach_y`
/// vertically; `bend` offsets each control point from the base-tip midpoint.
fn claws(
    k: &mut Composer<'_>,
    hand: Point,
    (start, spread): (f64, f64),
    reach_y: f64,
    bend: (f64, f64),
    color: Color,
) {
    for i in 0..5 {
        let angle = start + (f64::from(i) / 4.0) * spread;
        let (sin, cos) = angle.sin_cos();
        let base = Point::new(hand.x + cos * 10.0, hand.y + sin * 8.0);
        let tip = Point::new(hand.x + cos * 20.0, hand.y + sin * reach_y);
        let mid = base.midpoint(tip);
        let mut path = BezPath::new();
        path.move_to(base);
        path.quad_to(Point::new(mid.x + bend.0, mid.y + bend.1), tip);
        k.push(Fragment::path(path).outline(color, 3.0).opacity(0.9));
    }
}

fn filled(d: &str, color: Color, opacity: f64) -> SpriteResult<Fragment> {
    Ok(Fragment::path_d(d)?.fill(color).opacity(opacity))
}

fn stroked(d: &str, color: Color, width: f64, opacity: f64) -> SpriteResult<Fragment> {
    Ok(Fragment::path_d(d)?.outline(color, width).opacity(opacity))
}

fn shadow(cx: f64, cy: f64, rx: f64, ry: f64, opacity: f64) -> Fragment {
    Fragment::ellipse(cx, cy, rx, ry)
        .fill(Color::BLACK)
        .opacity(opacity)
}

fn oval(cx: f64, cy: f64, rx: f64, ry: f64, color: Color, opacity: f64) -> Fragment {
    Fragment::ellipse(cx, cy, rx, ry).fill(color).opacity(opacity)
}

fn disc(cx: f64, cy: f64, r: f64, color: Color, opacity: f64) -> Fragment {
    Fragment::circle(cx, cy, r).fill(color).opacity(opacity)
}

fn ring(cx: f64, cy: f64, r: f64, color: Color, width: f64, opacity: f64) -> Fragment {
    Fragment::circle(cx, cy, r)
        .outline(color, width)
        .opacity(opacity)
}

fn slab(x: f64, y: f64, w: f64, h: f64, corner: f64, color: Color, opacity: f64) -> Fragment {
    Fragment::rect(x, y, w, h)
        .corner(corner)
        .fill(color)
        .opacity(opacity)
}

#[cfg(test)]
#[path = "../../tests/unit/creature/def.rs"]
mod tests;
