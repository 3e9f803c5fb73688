//! Parametric shape generators.
//!
//! Each primitive is a pure function of its request plus the draws it takes from the injected
//! [`RandomSource`]. Output order and draw order are fixed; later fragments paint over earlier
//! ones. Degenerate requests (zero counts, zero or negative sizes, empty palettes) never fail:
//! they produce an empty list or degenerate but well-formed geometry.

use std::f64::consts::TAU;

use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, Rect, Span, Vec2};
use crate::foundation::rng::RandomSource;
use crate::geometry::fragment::{Fragment, Style};

/// Fractions of a tooth's angular slice at which gear vertices sit.
pub const GEAR_TOOTH_FRACTIONS: [f64; 6] = [0.0, 0.15, 0.35, 0.5, 0.65, 0.85];
const GEAR_TOOTH_OUTER: [bool; 6] = [false, false, true, true, true, false];

/// Uniform disc texture inside a rectangle.
#[derive(Clone, Debug)]
pub struct NoiseScatter<'a> {
    /// Exact number of discs produced.
    pub count: usize,
    /// Area the disc centers are drawn from.
    pub bounds: Rect,
    /// Candidate fill colors, chosen uniformly.
    pub palette: &'a [Color],
    /// Opacity interval.
    pub opacity: Span,
    /// Radius interval.
    pub size: Span,
}

impl<'a> NoiseScatter<'a> {
    /// Texture of `count` discs over the rect `(x, y, w, h)` with the default `1..4` radius.
    pub fn new(count: usize, (x, y, w, h): (f64, f64, f64, f64), palette: &'a [Color]) -> Self {
        Self {
            count,
            bounds: Rect::new(x, y, x + w, y + h),
            palette,
            opacity: Span::new(0.05, 0.15),
            size: Span::new(1.0, 4.0),
        }
    }

    /// Override the opacity interval.
    pub fn opacity(mut self, lo: f64, hi: f64) -> Self {
        self.opacity = Span::new(lo, hi);
        self
    }

    /// Override the radius interval.
    pub fn size(mut self, lo: f64, hi: f64) -> Self {
        self.size = Span::new(lo, hi);
        self
    }
}

/// Scatter `count` discs uniformly over `bounds`.
///
/// Always returns exactly `count` fragments, each centered inside `bounds`. An empty palette
/// falls back to black.
pub fn noise_scatter<R: RandomSource + ?Sized>(
    req: &NoiseScatter<'_>,
    rng: &mut R,
) -> Vec<Fragment> {
    let bounds = req.bounds.abs();
    let mut out = Vec::with_capacity(req.count);
    for _ in 0..req.count {
        let x = bounds.x0 + rng.next_f64() * bounds.width();
        let y = bounds.y0 + rng.next_f64() * bounds.height();
        let r = req.size.at(rng.next_f64()).max(0.0);
        let color = pick(req.palette, rng);
        let opacity = req.opacity.at(rng.next_f64());
        out.push(Fragment::circle(x, y, r).fill(color).opacity(opacity));
    }
    out
}

/// Irregular rounded silhouette.
#[derive(Clone, Copy, Debug)]
pub struct OrganicBlob {
    /// Center.
    pub center: Point,
    /// Unperturbed radius.
    pub radius: f64,
    /// Number of vertices around the center.
    pub vertices: usize,
    /// Radius perturbation as a fraction of `radius` (each vertex moves by up to half of it).
    pub irregularity: f64,
    /// Fill color.
    pub fill: Color,
    /// Opacity.
    pub opacity: f64,
}

impl OrganicBlob {
    /// Blob at `(cx, cy)`.
    pub fn new(cx: f64, cy: f64, radius: f64, vertices: usize, irregularity: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            radius,
            vertices,
            irregularity,
            fill: Color::BLACK,
            opacity: 1.0,
        }
    }

    /// Set fill and opacity.
    pub fn paint(mut self, fill: Color, opacity: f64) -> Self {
        self.fill = fill;
        self.opacity = opacity;
        self
    }
}

/// Build one closed blob path.
///
/// Vertices sit at equal angular steps with independently perturbed radii (one draw per vertex).
/// The outline is a closed chain of quadratic curves using each vertex as the control point and
/// the midpoint to the next vertex as the endpoint. Zero irregularity places every vertex on the
/// circle of `radius`. Zero vertices yields no fragment.
pub fn organic_blob<R: RandomSource + ?Sized>(req: &OrganicBlob, rng: &mut R) -> Vec<Fragment> {
    let n = req.vertices;
    if n == 0 {
        return Vec::new();
    }
    let irregularity = if req.irregularity.is_finite() {
        req.irregularity.max(0.0)
    } else {
        0.0
    };
    let step = TAU / n as f64;
    let pts: Vec<Point> = (0..n)
        .map(|i| {
            let r = req.radius * (1.0 + rng.jitter(irregularity));
            req.center + Vec2::from_angle(i as f64 * step) * r
        })
        .collect();

    let mut path = BezPath::new();
    path.move_to(pts[n - 1].midpoint(pts[0]));
    for i in 0..n {
        let next = pts[(i + 1) % n];
        path.quad_to(pts[i], pts[i].midpoint(next));
    }
    path.close_path();

    vec![
        Fragment::path(path)
            .fill(req.fill)
            .opacity(req.opacity),
    ]
}

/// Ambient particle cluster.
#[derive(Clone, Copy, Debug)]
pub struct ParticleCloud {
    /// Cloud center.
    pub center: Point,
    /// Number of particles.
    pub count: usize,
    /// Maximum distance from `center`.
    pub radius: f64,
    /// Particle color.
    pub color: Color,
}

impl ParticleCloud {
    /// Cloud of `count` particles within `radius` of `(cx, cy)`.
    pub fn new(cx: f64, cy: f64, count: usize, radius: f64, color: Color) -> Self {
        Self {
            center: Point::new(cx, cy),
            count,
            radius,
            color,
        }
    }
}

/// Scatter `count` small discs by uniform angle and uniform *linear* distance.
///
/// Linear distance sampling clusters particles toward the center.
pub fn particle_cloud<R: RandomSource + ?Sized>(req: &ParticleCloud, rng: &mut R) -> Vec<Fragment> {
    let radius = req.radius.max(0.0);
    let mut out = Vec::with_capacity(req.count);
    for _ in 0..req.count {
        let angle = rng.next_f64() * TAU;
        let dist = rng.next_f64() * radius;
        let p = req.center + Vec2::from_angle(angle) * dist;
        let r = 1.0 + rng.next_f64() * 3.0;
        let opacity = 0.2 + rng.next_f64() * 0.5;
        out.push(Fragment::circle(p.x, p.y, r).fill(req.color).opacity(opacity));
    }
    out
}

/// Cog outline.
#[derive(Clone, Copy, Debug)]
pub struct GearProfile {
    /// Center.
    pub center: Point,
    /// Root radius.
    pub inner: f64,
    /// Tip radius.
    pub outer: f64,
    /// Number of teeth.
    pub teeth: usize,
    /// Fill color.
    pub fill: Color,
    /// Opacity.
    pub opacity: f64,
}

impl GearProfile {
    /// Gear at `(cx, cy)`.
    pub fn new(cx: f64, cy: f64, inner: f64, outer: f64, teeth: usize) -> Self {
        Self {
            center: Point::new(cx, cy),
            inner,
            outer,
            teeth,
            fill: Color::BLACK,
            opacity: 1.0,
        }
    }

    /// Set fill and opacity.
    pub fn paint(mut self, fill: Color, opacity: f64) -> Self {
        self.fill = fill;
        self.opacity = opacity;
        self
    }
}

/// Build a closed gear path with six vertices per tooth.
///
/// The path has exactly `6 * teeth` line segments; the final segment returns to the first vertex.
/// Zero teeth yields no fragment. No randomness is consumed.
pub fn gear_profile(req: &GearProfile) -> Vec<Fragment> {
    if req.teeth == 0 {
        return Vec::new();
    }
    let slice = TAU / req.teeth as f64;
    let mut path = BezPath::new();
    let mut first = None;
    for tooth in 0..req.teeth {
        let base = tooth as f64 * slice;
        for (frac, outer) in GEAR_TOOTH_FRACTIONS.iter().zip(GEAR_TOOTH_OUTER) {
            let r = if outer { req.outer } else { req.inner };
            let p = req.center + Vec2::from_angle(base + frac * slice) * r;
            match first {
                None => {
                    path.move_to(p);
                    first = Some(p);
                }
                Some(_) => path.line_to(p),
            }
        }
    }
    if let Some(p0) = first {
        path.line_to(p0);
    }
    path.close_path();

    vec![
        Fragment::path(path)
            .fill(req.fill)
            .opacity(req.opacity),
    ]
}

/// Radial fan of triangular facets.
#[derive(Clone, Debug)]
pub struct CrystalFacets<'a> {
    /// Fan center.
    pub center: Point,
    /// Nominal ring radius.
    pub size: f64,
    /// Number of facets.
    pub facets: usize,
    /// Candidate facet colors.
    pub palette: &'a [Color],
}

impl<'a> CrystalFacets<'a> {
    /// Fan at `(cx, cy)`.
    pub fn new(cx: f64, cy: f64, size: f64, facets: usize, palette: &'a [Color]) -> Self {
        Self {
            center: Point::new(cx, cy),
            size,
            facets,
            palette,
        }
    }
}

/// Build `facets` triangles fanning out from the center.
///
/// Facet `i` spans the angles `i/F` to `(i+1)/F` of a full turn, so the fan covers the circle
/// exactly once. Each facet draws: ring radius, second-point scale, color, opacity.
pub fn crystal_facets<R: RandomSource + ?Sized>(
    req: &CrystalFacets<'_>,
    rng: &mut R,
) -> Vec<Fragment> {
    let f = req.facets;
    let mut out = Vec::with_capacity(f);
    for i in 0..f {
        let a0 = i as f64 / f as f64 * TAU;
        let a1 = (i + 1) as f64 / f as f64 * TAU;
        let r = req.size * (0.8 + rng.next_f64() * 0.4);
        let r2 = r * (0.9 + rng.next_f64() * 0.2);
        let color = pick(req.palette, rng);
        let opacity = 0.4 + rng.next_f64() * 0.4;

        let mut path = BezPath::new();
        path.move_to(req.center);
        path.line_to(req.center + Vec2::from_angle(a0) * r);
        path.line_to(req.center + Vec2::from_angle(a1) * r2);
        path.close_path();
        out.push(Fragment::path(path).fill(color).opacity(opacity));
    }
    out
}

/// Annular sector between two radii.
#[derive(Clone, Copy, Debug)]
pub struct RingSegment {
    /// Ring center.
    pub center: Point,
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
    /// Inner radius.
    pub inner: f64,
    /// Outer radius.
    pub outer: f64,
    /// Paint.
    pub style: Style,
}

/// Build one closed annular-sector path. Zero sweep or a zero-width ring still yields a
/// (degenerate) path. No randomness is consumed.
pub fn ring_segment(req: &RingSegment) -> Vec<Fragment> {
    let sweep = req.end - req.start;
    let inner = req.inner.max(0.0);
    let outer = req.outer.max(0.0);

    let outer_arc = kurbo::Arc::new(req.center, (outer, outer), req.start, sweep, 0.0);
    let inner_arc = kurbo::Arc::new(req.center, (inner, inner), req.end, -sweep, 0.0);

    let mut path = BezPath::new();
    path.move_to(req.center + Vec2::from_angle(req.start) * inner);
    path.line_to(req.center + Vec2::from_angle(req.start) * outer);
    outer_arc.to_cubic_beziers(0.1, |p1, p2, p| path.curve_to(p1, p2, p));
    path.line_to(req.center + Vec2::from_angle(req.end) * inner);
    inner_arc.to_cubic_beziers(0.1, |p1, p2, p| path.curve_to(p1, p2, p));
    path.close_path();

    let mut frag = Fragment::path(path).opacity(req.style.opacity);
    frag = match req.style.fill {
        Some(c) => frag.fill(c),
        None => frag.no_fill(),
    };
    if let Some(s) = req.style.stroke {
        frag = frag.stroke(s.color, s.width);
    }
    if let Some(rot) = req.style.rotation {
        frag = frag.rotate(rot.degrees, rot.about.x, rot.about.y);
    }
    vec![frag]
}

fn pick<R: RandomSource + ?Sized>(palette: &[Color], rng: &mut R) -> Color {
    if palette.is_empty() {
        // One draw per pick regardless of palette.
        let _ = rng.next_f64();
        return Color::BLACK;
    }
    palette[rng.index(palette.len())]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
