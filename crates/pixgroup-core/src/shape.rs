//! Shape geometry
//!
//! Builds the ordered vertex outline of a stamped shape from the two corner
//! points of its drag box. Pentagon and star use the fixed 36° interior
//! angle trigonometry of a regular five-pointed figure stretched to the box.

use crate::error::Error;
use crate::pixel::Vertex;
use std::fmt;
use std::str::FromStr;

/// Kind of shape the user stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    #[default]
    Rectangle,
    /// Triangle with its apex at the top edge
    TriangleUp,
    /// Triangle with its apex at the bottom edge
    TriangleDown,
    /// Triangle with its apex at the left edge
    TriangleLeft,
    /// Triangle with its apex at the right edge
    TriangleRight,
    /// Five-sided polygon
    Pentagon,
    /// Self-intersecting five-pointed star
    Star,
    /// Free line between the two points
    Line,
}

impl ShapeKind {
    /// Selection order used when cycling through tools.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rectangle,
        ShapeKind::TriangleUp,
        ShapeKind::TriangleDown,
        ShapeKind::TriangleLeft,
        ShapeKind::TriangleRight,
        ShapeKind::Pentagon,
        ShapeKind::Star,
        ShapeKind::Line,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Next kind in selection order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous kind in selection order, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the last vertex joins back to the first.
    pub fn is_closed(self) -> bool {
        self != ShapeKind::Line
    }

    /// Whether the interior is filled when stamped.
    ///
    /// Stars are self-intersecting and lines have no interior.
    pub fn is_fillable(self) -> bool {
        !matches!(self, ShapeKind::Star | ShapeKind::Line)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::TriangleUp => "triangle-up",
            ShapeKind::TriangleDown => "triangle-down",
            ShapeKind::TriangleLeft => "triangle-left",
            ShapeKind::TriangleRight => "triangle-right",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Star => "star",
            ShapeKind::Line => "line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => ShapeKind::Rectangle,
            "triangle-up" | "triangle1" => ShapeKind::TriangleUp,
            "triangle-down" | "triangle2" => ShapeKind::TriangleDown,
            "triangle-left" | "triangle3" => ShapeKind::TriangleLeft,
            "triangle-right" | "triangle4" => ShapeKind::TriangleRight,
            "pentagon" => ShapeKind::Pentagon,
            "star" => ShapeKind::Star,
            "line" | "free" => ShapeKind::Line,
            _ => return Err(Error::InvalidParameter(format!("unknown shape kind '{s}'"))),
        };
        Ok(kind)
    }
}

/// Interior angle of a regular pentagram point.
const STAR_ANGLE: f64 = 36.0 * std::f64::consts::PI / 180.0;

/// Outline vertices of a shape spanning the corners `a` and `b`.
///
/// `Line` keeps the two points as given. Every other kind first sorts the
/// corners into a box with `y` growing downward and widens a zero-width or
/// zero-height box by one pixel.
pub fn shape_vertices(kind: ShapeKind, a: Vertex, b: Vertex) -> Vec<Vertex> {
    if kind == ShapeKind::Line {
        return vec![a, b];
    }

    let (x0, mut x1) = (a.x.min(b.x), a.x.max(b.x));
    let (y0, mut y1) = (a.y.min(b.y), a.y.max(b.y));
    if x0 == x1 {
        x1 += 1.0;
    }
    if y0 == y1 {
        y1 += 1.0;
    }

    let top_left = Vertex::new(x0, y0);
    let top_right = Vertex::new(x1, y0);
    let bottom_left = Vertex::new(x0, y1);
    let bottom_right = Vertex::new(x1, y1);
    let xm = (x0 + x1) / 2.0;
    let ym = (y0 + y1) / 2.0;

    match kind {
        ShapeKind::Rectangle => vec![top_left, top_right, bottom_right, bottom_left],
        ShapeKind::TriangleUp => vec![Vertex::new(xm, y0), bottom_left, bottom_right],
        ShapeKind::TriangleDown => vec![Vertex::new(xm, y1), top_left, top_right],
        ShapeKind::TriangleLeft => vec![Vertex::new(x0, ym), top_right, bottom_right],
        ShapeKind::TriangleRight => vec![Vertex::new(x1, ym), top_left, bottom_left],
        ShapeKind::Pentagon | ShapeKind::Star => {
            let hy = (y1 - y0) / 2.0 * STAR_ANGLE.tan();
            let hx = (x1 - x0) / 2.0 * (STAR_ANGLE / 2.0).tan();
            let top = Vertex::new(xm, y0);
            let left = Vertex::new(x0, y0 + hy);
            let right = Vertex::new(x1, y0 + hy);
            let low_left = Vertex::new(x0 + hx, y1);
            let low_right = Vertex::new(x1 - hx, y1);
            if kind == ShapeKind::Pentagon {
                vec![top, right, low_right, low_left, left]
            } else {
                vec![low_left, top, low_right, left, right]
            }
        }
        ShapeKind::Line => unreachable!(),
    }
}
