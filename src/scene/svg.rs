//! SVG serialization of a [`SceneDocument`].
//!
//! Fragments stay typed until this point; this is the only place that produces markup. Numbers
//! are written with at most two decimals.

use std::fmt::{self, Write as _};

use crate::foundation::core::{BezPath, PathEl};
use crate::foundation::math::fmt_num;
use crate::geometry::fragment::{Fragment, Shape, Style};
use crate::scene::document::{RadialGradient, SceneDocument};

impl SceneDocument {
    /// Serialize into a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SceneDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.canvas_px;
        writeln!(
            f,
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        writeln!(f, "  <defs>")?;
        for g in [&self.background, &self.glow, &self.vignette] {
            write_gradient(f, g)?;
        }
        writeln!(f, "  </defs>")?;
        writeln!(
            f,
            r#"  <rect width="{size}" height="{size}" fill="url(#{})" />"#,
            self.background.id
        )?;
        writeln!(
            f,
            r#"  <rect width="{size}" height="{size}" fill="url(#{})" />"#,
            self.glow.id
        )?;
        writeln!(
            f,
            r#"  <g transform="translate({}, {})">"#,
            fmt_num(self.translate.x),
            fmt_num(self.translate.y)
        )?;
        for frag in &self.fragments {
            f.write_str("    ")?;
            write_fragment(f, frag)?;
            f.write_char('\n')?;
        }
        writeln!(f, "  </g>")?;
        writeln!(
            f,
            r#"  <rect width="{size}" height="{size}" fill="url(#{})" />"#,
            self.vignette.id
        )?;
        f.write_str("</svg>\n")
    }
}

fn pct(v: f64) -> String {
    format!("{}%", fmt_num(v * 100.0))
}

fn write_gradient(f: &mut fmt::Formatter<'_>, g: &RadialGradient) -> fmt::Result {
    writeln!(
        f,
        r#"    <radialGradient id="{}" cx="{}" cy="{}" r="{}">"#,
        g.id,
        pct(g.cx),
        pct(g.cy),
        pct(g.r)
    )?;
    for stop in &g.stops {
        write!(
            f,
            r#"      <stop offset="{}" stop-color="{}""#,
            pct(stop.offset),
            stop.color
        )?;
        if stop.opacity < 1.0 {
            write!(f, r#" stop-opacity="{}""#, fmt_num(stop.opacity))?;
        }
        f.write_str(" />\n")?;
    }
    writeln!(f, "    </radialGradient>")
}

/// Write one fragment as a single SVG element.
pub(crate) fn write_fragment(out: &mut impl fmt::Write, frag: &Fragment) -> fmt::Result {
    match frag.shape() {
        Shape::Circle { center, r } => write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(r.max(0.0))
        )?,
        Shape::Ellipse { center, rx, ry } => write!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(rx.max(0.0)),
            fmt_num(ry.max(0.0))
        )?,
        Shape::Path(path) => {
            out.write_str(r#"<path d=""#)?;
            write_path_data(out, path)?;
            out.write_char('"')?;
        }
        Shape::Line { from, to } => write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        )?,
        Shape::Rect { rect, corner } => {
            let rect = rect.abs();
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_num(rect.x0),
                fmt_num(rect.y0),
                fmt_num(rect.width()),
                fmt_num(rect.height())
            )?;
            if *corner > 0.0 {
                write!(out, r#" rx="{}""#, fmt_num(*corner))?;
            }
        }
    }
    write_style(out, frag.style())?;
    out.write_str(" />")
}

fn write_style(out: &mut impl fmt::Write, style: &Style) -> fmt::Result {
    match style.fill {
        Some(c) => write!(out, r#" fill="{c}""#)?,
        None => out.write_str(r#" fill="none""#)?,
    }
    if let Some(s) = style.stroke {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            s.color,
            fmt_num(s.width)
        )?;
    }
    if style.opacity < 1.0 {
        write!(out, r#" opacity="{}""#, fmt_num(style.opacity))?;
    }
    if let Some(rot) = style.rotation {
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            fmt_num(rot.degrees),
            fmt_num(rot.about.x),
            fmt_num(rot.about.y)
        )?;
    }
    Ok(())
}

/// Write absolute path data (`M`, `L`, `Q`, `C`, `Z`).
pub(crate) fn write_path_data(out: &mut impl fmt::Write, path: &BezPath) -> fmt::Result {
    let mut first = true;
    for el in path.elements() {
        if !first {
            out.write_char(' ')?;
        }
        first = false;
        match *el {
            PathEl::MoveTo(p) => write!(out, "M {} {}", fmt_num(p.x), fmt_num(p.y))?,
            PathEl::LineTo(p) => write!(out, "L {} {}", fmt_num(p.x), fmt_num(p.y))?,
            PathEl::QuadTo(c, p) => write!(
                out,
                "Q {} {} {} {}",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(p.x),
                fmt_num(p.y)
            )?,
            PathEl::CurveTo(c1, c2, p) => write!(
                out,
                "C {} {} {} {} {} {}",
                fmt_num(c1.x),
                fmt_num(c1.y),
                fmt_num(c2.x),
                fmt_num(c2.y),
                fmt_num(p.x),
                fmt_num(p.y)
            )?,
            PathEl::ClosePath => out.write_char('Z')?,
        }
    }
    Ok(())
}
