//! Core geometry types: Vec2, Vec4, Rect, Color.
//!
//! All coordinates are window-local logical units (already multiplied by the
//! DPI scale where a widget asks for it). Colors are straight 8-bit RGBA.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D point or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Vec4
// ---------------------------------------------------------------------------

/// Four floats. Used for corner radii, insets, and texture source rects.
///
/// When used as insets or radii the order is `x = left/top-left`,
/// `y = top/top-right`, `z = right/bottom-right`, `w = bottom/bottom-left`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Vec4 = Vec4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// All four components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle: position plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rect at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { x: 0.0, y: 0.0, w: size.x, h: size.y }
    }

    /// The right edge (exclusive).
    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.w
    }

    /// The bottom edge (exclusive).
    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner.
    #[inline]
    pub const fn pos(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }

    /// Width and height.
    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2 { x: self.w, y: self.h }
    }

    /// Center point.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Whether `p` lies inside. Left/top edges inclusive, right/bottom exclusive.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether the rect has no area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Move the rect by `offset`.
    #[inline]
    pub fn translate(self, offset: Vec2) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Contract inward by `insets` (left, top, right, bottom). Size clamps at zero.
    #[inline]
    pub fn shrink(self, insets: Vec4) -> Rect {
        Rect {
            x: self.x + insets.x,
            y: self.y + insets.y,
            w: (self.w - insets.x - insets.z).max(0.0),
            h: (self.h - insets.y - insets.w).max(0.0),
        }
    }

    /// Split at `offset` from the left edge. Returns `(left, right)`.
    #[inline]
    pub fn split_left(self, offset: f32) -> (Rect, Rect) {
        let o = offset.clamp(0.0, self.w.max(0.0));
        (
            Rect { w: o, ..self },
            Rect { x: self.x + o, w: self.w - o, ..self },
        )
    }

    /// Split at `offset` from the top edge. Returns `(top, bottom)`.
    #[inline]
    pub fn split_top(self, offset: f32) -> (Rect, Rect) {
        let o = offset.clamp(0.0, self.h.max(0.0));
        (
            Rect { h: o, ..self },
            Rect { y: self.y + o, h: self.h - o, ..self },
        )
    }

    /// Intersection of two rects, or [`Rect::EMPTY`] if they do not overlap.
    pub fn intersection(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 <= x1 || y2 <= y1 {
            Rect::EMPTY
        } else {
            Rect::new(x1, y1, x2 - x1, y2 - y1)
        }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse hex digits without the leading `#`.
    ///
    /// Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Move RGB toward black by `amount` (0..=1). Alpha is preserved.
    pub fn darken(self, amount: f32) -> Color {
        let k = 1.0 - amount.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 * k).round() as u8;
        Color::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }

    /// Move RGB toward white by `amount` (0..=1). Alpha is preserved.
    pub fn lighten(self, amount: f32) -> Color {
        let k = amount.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 + (255.0 - c as f32) * k).round() as u8;
        Color::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rect ────────────────────────────────────────────────────────

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 14.9)));
        assert!(!r.contains(Vec2::new(30.0, 12.0)));
        assert!(!r.contains(Vec2::new(15.0, 15.0)));
        assert!(!r.contains(Vec2::new(9.9, 12.0)));
    }

    #[test]
    fn rect_shrink_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).shrink(Vec4::new(4.0, 1.0, 8.0, 1.0));
        assert_eq!(r, Rect::new(4.0, 1.0, 0.0, 8.0));
    }

    #[test]
    fn rect_split_left_clamps_offset() {
        let (l, r) = Rect::new(0.0, 0.0, 100.0, 20.0).split_left(30.0);
        assert_eq!(l, Rect::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(r, Rect::new(30.0, 0.0, 70.0, 20.0));

        let (l, r) = Rect::new(0.0, 0.0, 100.0, 20.0).split_left(500.0);
        assert_eq!(l.w, 100.0);
        assert_eq!(r.w, 0.0);
    }

    #[test]
    fn rect_split_top() {
        let (t, b) = Rect::new(5.0, 5.0, 50.0, 40.0).split_top(10.0);
        assert_eq!(t, Rect::new(5.0, 5.0, 50.0, 10.0));
        assert_eq!(b, Rect::new(5.0, 15.0, 50.0, 30.0));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), Rect::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a.intersection(Rect::new(20.0, 0.0, 1.0, 1.0)), Rect::EMPTY);
    }

    // ── Color ───────────────────────────────────────────────────────

    #[test]
    fn color_from_hex_lengths() {
        assert_eq!(Color::from_hex("FF0000FF"), Some(Color::rgba(255, 0, 0, 255)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("0008"), Some(Color::rgba(0, 0, 0, 0x88)));
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn color_darken_lighten() {
        let c = Color::rgba(100, 200, 50, 128);
        assert_eq!(c.darken(0.5), Color::rgba(50, 100, 25, 128));
        assert_eq!(Color::BLACK.lighten(1.0), Color::WHITE);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn color_display_is_rrggbbaa() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#FF0010FF");
    }
}
