//! Typed style values: the [`Value`] sum type and the brush descriptors it
//! carries.
//!
//! Widgets read values through [`FromValue`], which performs the few
//! coercions that make sheets pleasant to write (ints as floats, a plain color
//! where a fill is expected).

use crate::geometry::{Color, Vec2, Vec4};
use crate::style::names::style;

// ---------------------------------------------------------------------------
// Brush descriptors
// ---------------------------------------------------------------------------

/// Line style for strokes and borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeStyle {
    None,
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl StrokeStyle {
    /// Map a flag value from the keyword table.
    pub fn from_flags(flags: u32) -> Option<StrokeStyle> {
        match flags {
            style::NONE => Some(StrokeStyle::None),
            style::SOLID => Some(StrokeStyle::Solid),
            style::DASH => Some(StrokeStyle::Dash),
            style::DOT => Some(StrokeStyle::Dot),
            style::DASH_DOT => Some(StrokeStyle::DashDot),
            style::DASH_DOT_DOT => Some(StrokeStyle::DashDotDot),
            _ => None,
        }
    }
}

/// Hatch pattern used by hatched fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatchPattern {
    Horizontal,
    Vertical,
    Cross,
    BDiagonal,
    FDiagonal,
    DiagCross,
}

impl HatchPattern {
    /// Map a flag value from the keyword table.
    pub fn from_flags(flags: u32) -> Option<HatchPattern> {
        match flags {
            style::HATCH_HORIZONTAL => Some(HatchPattern::Horizontal),
            style::HATCH_VERTICAL => Some(HatchPattern::Vertical),
            style::HATCH_CROSS => Some(HatchPattern::Cross),
            style::HATCH_BDIAGONAL => Some(HatchPattern::BDiagonal),
            style::HATCH_FDIAGONAL => Some(HatchPattern::FDiagonal),
            style::HATCH_DIAGCROSS => Some(HatchPattern::DiagCross),
            _ => None,
        }
    }
}

/// A line: style, width and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub style: StrokeStyle,
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    /// A solid stroke.
    pub const fn solid(width: f32, color: Color) -> Self {
        Self { style: StrokeStyle::Solid, width, color }
    }
}

/// A rectangle outline with per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub style: StrokeStyle,
    pub width: f32,
    pub color: Color,
    /// Corner radii: top-left, top-right, bottom-right, bottom-left.
    pub radius: Vec4,
}

impl Border {
    /// The stroke part of the border, without radii.
    pub fn stroke(&self) -> Stroke {
        Stroke { style: self.style, width: self.width, color: self.color }
    }
}

/// Foreground and background colors of a hatch fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatchBrush {
    pub fore: Color,
    pub back: Color,
}

/// A texture sampled from `url` over the source rect `src` (x, y, w, h).
#[derive(Debug, Clone, PartialEq)]
pub struct TextureBrush {
    pub url: String,
    pub src: Vec4,
}

/// A two-stop linear gradient between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

/// The paint inside a fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    None,
    Solid(Color),
    Hatch(HatchPattern, HatchBrush),
    Texture(TextureBrush),
    Linear(LinearGradient),
}

/// An area fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Filled {
    pub brush: Brush,
}

impl Filled {
    /// A solid color fill.
    pub const fn solid(color: Color) -> Self {
        Self { brush: Brush::Solid(color) }
    }

    /// A fill that paints nothing.
    pub const fn none() -> Self {
        Self { brush: Brush::None }
    }

    /// Whether this fill paints anything.
    pub fn is_visible(&self) -> bool {
        match &self.brush {
            Brush::None => false,
            Brush::Solid(c) => c.a > 0,
            _ => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A parsed attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Int(i32),
    Float(f32),
    Flags(u32),
    String(String),
    Color(Color),
    Vec2(Vec2),
    Vec4(Vec4),
    Url(String),
    Hatch(HatchBrush),
    Texture(TextureBrush),
    Linear(LinearGradient),
    Stroke(Stroke),
    Border(Border),
    Filled(Filled),
    /// Continue the fallback search. Never a final answer.
    Inherit,
}

impl Value {
    /// Whether the value terminates a style lookup.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Value::None | Value::Inherit)
    }

    /// The value as a number, if it is one.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Int(i) => Some(i as f32),
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    /// The value as a color, if it is one.
    pub fn as_color(&self) -> Option<Color> {
        match *self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    /// The value as a flag word, if it is one.
    pub fn as_flags(&self) -> Option<u32> {
        match *self {
            Value::Flags(f) => Some(f),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Flags(_) => "flags",
            Value::String(_) => "string",
            Value::Color(_) => "color",
            Value::Vec2(_) => "vec2",
            Value::Vec4(_) => "vec4",
            Value::Url(_) => "url",
            Value::Hatch(_) => "hatch",
            Value::Texture(_) => "texture",
            Value::Linear(_) => "linear",
            Value::Stroke(_) => "stroke",
            Value::Border(_) => "border",
            Value::Filled(_) => "filled",
            Value::Inherit => "inherit",
        }
    }
}

// ---------------------------------------------------------------------------
// FromValue
// ---------------------------------------------------------------------------

/// Typed extraction from a [`Value`].
///
/// Returns `None` when the value has an incompatible type; callers then fall
/// back to their default.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f32()
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Int(i) => Some(i),
            Value::Float(f) => Some(f.round() as i32),
            _ => None,
        }
    }
}

impl FromValue for u32 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Flags(f) => Some(f),
            Value::Int(i) if i >= 0 => Some(i as u32),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i != 0),
            Value::String(s) if s == "true" => Some(true),
            Value::String(s) if s == "false" => Some(false),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) | Value::Url(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for Color {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_color()
    }
}

impl FromValue for Vec2 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec2(v) => Some(v),
            Value::Int(_) | Value::Float(_) => value.as_f32().map(|f| Vec2::new(f, f)),
            _ => None,
        }
    }
}

impl FromValue for Vec4 {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Vec4(v) => Some(v),
            Value::Int(_) | Value::Float(_) => value.as_f32().map(Vec4::splat),
            _ => None,
        }
    }
}

impl FromValue for Stroke {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Stroke(s) => Some(s),
            Value::Border(b) => Some(b.stroke()),
            _ => None,
        }
    }
}

impl FromValue for Border {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Border(b) => Some(b),
            Value::Stroke(s) => Some(Border {
                style: s.style,
                width: s.width,
                color: s.color,
                radius: Vec4::ZERO,
            }),
            Value::Flags(style::NONE) => Some(Border {
                style: StrokeStyle::None,
                width: 0.0,
                color: Color::TRANSPARENT,
                radius: Vec4::ZERO,
            }),
            _ => None,
        }
    }
}

impl FromValue for Filled {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Filled(f) => Some(f.clone()),
            Value::Color(c) => Some(Filled::solid(*c)),
            Value::Flags(style::NONE) => Some(Filled::none()),
            _ => None,
        }
    }
}
