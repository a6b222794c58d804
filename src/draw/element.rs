//! Draw element variants.
//!
//! Each variant carries its geometry (window-local) and the brush data it
//! is painted with. The renderer owns everything past this point.

use std::fmt;

use crate::draw::path::PathOp;
use crate::geometry::{Color, Rect, Vec2};
use crate::platform::{FontId, TextureId};
use crate::style::value::{Border, Brush, Filled, Stroke};

/// Text laid out inside `rect` according to `align` flags.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub font: FontId,
    pub rect: Rect,
    pub color: Color,
    pub align: u32,
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

/// A (possibly rounded) rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub rect: Rect,
    pub border: Option<Border>,
    pub filled: Option<Filled>,
}

/// A path in mini-language form. Built with the chaining methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathElement {
    pub data: String,
    pub stroke: Option<Stroke>,
    pub filled: Option<Filled>,
}

impl PathElement {
    /// Create an empty path.
    pub fn new(stroke: Option<Stroke>, filled: Option<Filled>) -> Self {
        Self { data: String::new(), stroke, filled }
    }

    fn push(&mut self, op: PathOp) -> &mut Self {
        op.write(&mut self.data);
        self
    }

    /// `M x y`
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.push(PathOp::MoveTo(p))
    }

    /// `L x y`
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.push(PathOp::LineTo(p))
    }

    /// `C c1 c2 end`
    pub fn curve_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) -> &mut Self {
        self.push(PathOp::CurveTo(c1, c2, end))
    }

    /// `S c end`
    pub fn smooth_to(&mut self, c: Vec2, end: Vec2) -> &mut Self {
        self.push(PathOp::SmoothTo(c, end))
    }

    /// `Q c end`
    pub fn quad_to(&mut self, c: Vec2, end: Vec2) -> &mut Self {
        self.push(PathOp::QuadTo(c, end))
    }

    /// `T end`
    pub fn smooth_quad_to(&mut self, end: Vec2) -> &mut Self {
        self.push(PathOp::SmoothQuadTo(end))
    }

    /// `Z`
    pub fn close(&mut self) -> &mut Self {
        self.push(PathOp::Close)
    }
}

/// A texture blit from `src` (texture pixels) to `dst`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub texture: TextureId,
    pub src: Rect,
    pub dst: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleElement {
    pub center: Vec2,
    pub radius: f32,
    pub stroke: Option<Stroke>,
    pub filled: Option<Filled>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EllipseElement {
    pub center: Vec2,
    pub radii: Vec2,
    pub stroke: Option<Stroke>,
    pub filled: Option<Filled>,
}

/// A closed polygon through `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonElement {
    pub points: Vec<Vec2>,
    pub stroke: Option<Stroke>,
    pub filled: Option<Filled>,
}

/// A primitive draw element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Line(LineElement),
    Rect(RectElement),
    Path(PathElement),
    Image(ImageElement),
    Circle(CircleElement),
    Ellipse(EllipseElement),
    Polygon(PolygonElement),
}

// ---------------------------------------------------------------------------
// Display (one-line summaries for logs and test snapshots)
// ---------------------------------------------------------------------------

struct Paint<'a>(Option<&'a Stroke>, Option<&'a Filled>);

impl fmt::Display for Paint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filled) = self.1 {
            match &filled.brush {
                Brush::None => {}
                Brush::Solid(c) => write!(f, " fill={c}")?,
                Brush::Hatch(..) => f.write_str(" fill=hatch")?,
                Brush::Texture(t) => write!(f, " fill=texture({})", t.url)?,
                Brush::Linear(..) => f.write_str(" fill=linear")?,
            }
        }
        if let Some(stroke) = self.0 {
            write!(f, " stroke={}/{}", stroke.width, stroke.color)?;
        }
        Ok(())
    }
}

fn rect(f: &mut fmt::Formatter<'_>, r: Rect) -> fmt::Result {
    write!(f, "{},{} {}x{}", r.x, r.y, r.w, r.h)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text(t) => {
                write!(f, "text {:?} ", t.text)?;
                rect(f, t.rect)?;
                write!(f, " color={}", t.color)
            }
            Element::Line(l) => write!(
                f,
                "line {},{} -> {},{}{}",
                l.from.x,
                l.from.y,
                l.to.x,
                l.to.y,
                Paint(Some(&l.stroke), None)
            ),
            Element::Rect(r) => {
                let stroke = r.border.map(|b| b.stroke());
                f.write_str("rect ")?;
                rect(f, r.rect)?;
                write!(f, "{}", Paint(stroke.as_ref(), r.filled.as_ref()))
            }
            Element::Path(p) => write!(
                f,
                "path {:?}{}",
                p.data,
                Paint(p.stroke.as_ref(), p.filled.as_ref())
            ),
            Element::Image(i) => {
                write!(f, "image {} ", i.texture)?;
                rect(f, i.dst)
            }
            Element::Circle(c) => write!(
                f,
                "circle {},{} r={}{}",
                c.center.x,
                c.center.y,
                c.radius,
                Paint(c.stroke.as_ref(), c.filled.as_ref())
            ),
            Element::Ellipse(e) => write!(
                f,
                "ellipse {},{} r={}x{}{}",
                e.center.x,
                e.center.y,
                e.radii.x,
                e.radii.y,
                Paint(e.stroke.as_ref(), e.filled.as_ref())
            ),
            Element::Polygon(p) => write!(
                f,
                "polygon n={}{}",
                p.points.len(),
                Paint(p.stroke.as_ref(), p.filled.as_ref())
            ),
        }
    }
}
