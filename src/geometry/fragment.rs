use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{SpriteError, SpriteResult};
use kurbo::Shape as _;

/// Geometry of a single drawable element, in composer-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Disc.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        r: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Arbitrary path (lines, quadratic and cubic segments).
    Path(BezPath),
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Rectangle with optional corner radius.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius (`0` for square corners).
        corner: f64,
    },
}

/// Stroke paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in local units.
    pub width: f64,
}

/// Rotation applied around a pivot, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Clockwise rotation in degrees (SVG convention).
    pub degrees: f64,
    /// Pivot point.
    pub about: Point,
}

/// Fully resolved paint for a fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Fill color; `None` renders as `fill="none"`.
    pub fill: Option<Color>,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional rotation.
    pub rotation: Option<Rotation>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: None,
            opacity: 1.0,
            rotation: None,
        }
    }
}

/// One resolved, immutable drawable unit.
///
/// Fragments are order-significant: within a list, fragment `i` is painted before `i + 1`.
/// Builder methods consume and return the fragment, so a finished value is never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    shape: Shape,
    style: Style,
}

impl Fragment {
    /// Wrap a shape with the default style (opaque black fill).
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            style: Style::default(),
        }
    }

    /// Disc at `(cx, cy)`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new(Shape::Circle {
            center: Point::new(cx, cy),
            r,
        })
    }

    /// Ellipse at `(cx, cy)`.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new(Shape::Ellipse {
            center: Point::new(cx, cy),
            rx,
            ry,
        })
    }

    /// Segment from `(x1, y1)` to `(x2, y2)`.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Shape::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        })
    }

    /// Rectangle with origin `(x, y)` and size `(w, h)`.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Shape::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            corner: 0.0,
        })
    }

    /// Path fragment.
    pub fn path(path: BezPath) -> Self {
        Self::new(Shape::Path(path))
    }

    /// Path fragment from SVG path data.
    pub fn path_d(d: &str) -> SpriteResult<Self> {
        Ok(Self::path(parse_path(d)?))
    }

    /// Set the fill color.
    pub fn fill(mut self, color: Color) -> Self {
        self.style.fill = Some(color);
        self
    }

    /// Remove the fill.
    pub fn no_fill(mut self) -> Self {
        self.style.fill = None;
        self
    }

    /// Add a stroke, keeping the current fill.
    pub fn stroke(mut self, color: Color, width: f64) -> Self {
        self.style.stroke = Some(Stroke { color, width });
        self
    }

    /// Stroke only: sets the stroke and removes the fill.
    pub fn outline(self, color: Color, width: f64) -> Self {
        self.stroke(color, width).no_fill()
    }

    /// Set opacity, clamped to `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Rotate by `degrees` around `(cx, cy)`.
    pub fn rotate(mut self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.style.rotation = Some(Rotation {
            degrees,
            about: Point::new(cx, cy),
        });
        self
    }

    /// Set the corner radius of a rectangle. No effect on other shapes.
    pub fn corner(mut self, radius: f64) -> Self {
        if let Shape::Rect { corner, .. } = &mut self.shape {
            *corner = radius.max(0.0);
        }
        self
    }

    /// Geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Paint.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Untransformed geometric bounds (stroke width and rotation not included).
    pub fn bounds(&self) -> Rect {
        match &self.shape {
            Shape::Circle { center, r } => {
                Rect::from_center_size(*center, (2.0 * r.abs(), 2.0 * r.abs()))
            }
            Shape::Ellipse { center, rx, ry } => {
                Rect::from_center_size(*center, (2.0 * rx.abs(), 2.0 * ry.abs()))
            }
            Shape::Path(p) => p.bounding_box(),
            Shape::Line { from, to } => Rect::from_points(*from, *to),
            Shape::Rect { rect, .. } => rect.abs(),
        }
    }
}

/// Parse SVG path data (absolute and relative commands, arcs converted to curves).
pub fn parse_path(d: &str) -> SpriteResult<BezPath> {
    BezPath::from_svg(d).map_err(|e| SpriteError::validation(format!("bad path data '{d}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fragment.rs"]
mod tests;
