//! Function values: `name(arg, ...)`.
//!
//! Each entry consumes its own parenthesised argument list through the
//! shared [`Parser`], so arguments nest (`border(solid, 1, dark(blue), 2)`).
//! A parser returns `None` when its arguments do not fit; the caller then
//! rewinds and keeps the raw text.

use crate::geometry::{Color, Vec2, Vec4};
use crate::style::names::style;
use crate::style::parser::Parser;
use crate::style::tokenizer::Token;
use crate::style::value::{
    Border, Brush, Filled, HatchBrush, HatchPattern, LinearGradient, Stroke, StrokeStyle,
    TextureBrush, Value,
};

/// A function value parser. The cursor sits on `(` when it is called.
pub(crate) type FunctionParser = fn(&mut Parser<'_>) -> Option<Value>;

const FUNCTIONS: &[(&str, FunctionParser)] = &[
    ("rgb", parse_rgb),
    ("rgba", parse_rgba),
    ("vec2", parse_vec2),
    ("vec4", parse_vec4),
    ("dark", parse_dark),
    ("light", parse_light),
    ("hatch", parse_hatch),
    ("sample", parse_sample),
    ("linear", parse_linear),
    ("stroke", parse_stroke),
    ("border", parse_border),
    ("filled", parse_filled),
    ("url", parse_url),
];

/// Default amount for `dark()` and `light()`.
const SHADE_AMOUNT: f32 = 0.2;

/// Look up the parser for a function name.
pub(crate) fn lookup(name: &str) -> Option<FunctionParser> {
    FUNCTIONS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

fn number(v: &Value) -> Option<f32> {
    v.as_f32()
}

fn channel(v: &Value) -> Option<u8> {
    number(v).map(|f| f.round().clamp(0.0, 255.0) as u8)
}

fn stroke_style(v: &Value) -> Option<StrokeStyle> {
    v.as_flags().and_then(StrokeStyle::from_flags)
}

fn vec4_or_splat(v: &Value) -> Option<Vec4> {
    match *v {
        Value::Vec4(r) => Some(r),
        _ => number(v).map(Vec4::splat),
    }
}

// ---------------------------------------------------------------------------
// Colors and vectors
// ---------------------------------------------------------------------------

fn parse_rgb(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [r, g, b] => Some(Value::Color(Color::rgb(channel(r)?, channel(g)?, channel(b)?))),
        _ => None,
    }
}

/// `rgba(r, g, b, a)`. An alpha written as a float is a 0..1 fraction, an
/// integer alpha is 0..255.
fn parse_rgba(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [r, g, b, a] => {
            let alpha = match *a {
                Value::Float(f) => (f.clamp(0.0, 1.0) * 255.0).round() as u8,
                _ => channel(a)?,
            };
            Some(Value::Color(Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha)))
        }
        _ => None,
    }
}

fn parse_vec2(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [x, y] => Some(Value::Vec2(Vec2::new(number(x)?, number(y)?))),
        _ => None,
    }
}

fn parse_vec4(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [x, y, z, w] => Some(Value::Vec4(Vec4::new(number(x)?, number(y)?, number(z)?, number(w)?))),
        _ => None,
    }
}

fn shade(p: &mut Parser<'_>, f: fn(Color, f32) -> Color) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [c] => Some(Value::Color(f(c.as_color()?, SHADE_AMOUNT))),
        [c, amount] => Some(Value::Color(f(c.as_color()?, number(amount)?))),
        _ => None,
    }
}

fn parse_dark(p: &mut Parser<'_>) -> Option<Value> {
    shade(p, Color::darken)
}

fn parse_light(p: &mut Parser<'_>) -> Option<Value> {
    shade(p, Color::lighten)
}

// ---------------------------------------------------------------------------
// Brushes
// ---------------------------------------------------------------------------

/// `hatch(fore, back)`; `back` defaults to transparent.
fn parse_hatch(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [fore] => Some(Value::Hatch(HatchBrush { fore: fore.as_color()?, back: Color::TRANSPARENT })),
        [fore, back] => Some(Value::Hatch(HatchBrush { fore: fore.as_color()?, back: back.as_color()? })),
        _ => None,
    }
}

/// `sample(url(path), vec4(x, y, w, h))`; the source rect defaults to zero,
/// meaning the whole texture.
fn parse_sample(p: &mut Parser<'_>) -> Option<Value> {
    let args = p.parse_args()?;
    let url = match args.first()? {
        Value::Url(u) | Value::String(u) => u.clone(),
        _ => return None,
    };
    let src = match args.get(1) {
        Some(Value::Vec4(v)) => *v,
        None => Vec4::ZERO,
        Some(_) => return None,
    };
    if args.len() > 2 {
        return None;
    }
    Some(Value::Texture(TextureBrush { url, src }))
}

/// `linear(vec2 start, vec2 end, from, to)`.
fn parse_linear(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [Value::Vec2(start), Value::Vec2(end), from, to] => Some(Value::Linear(LinearGradient {
            start: *start,
            end: *end,
            from: from.as_color()?,
            to: to.as_color()?,
        })),
        _ => None,
    }
}

/// `stroke(style, width, color)`.
fn parse_stroke(p: &mut Parser<'_>) -> Option<Value> {
    match p.parse_args()?.as_slice() {
        [s, width, color] => Some(Value::Stroke(Stroke {
            style: stroke_style(s)?,
            width: number(width)?,
            color: color.as_color()?,
        })),
        _ => None,
    }
}

/// `border(style, width, color[, radius])`; radius is a `vec4` or a number.
fn parse_border(p: &mut Parser<'_>) -> Option<Value> {
    let args = p.parse_args()?;
    let (s, width, color, radius) = match args.as_slice() {
        [s, width, color] => (s, width, color, Vec4::ZERO),
        [s, width, color, radius] => (s, width, color, vec4_or_splat(radius)?),
        _ => return None,
    };
    Some(Value::Border(Border {
        style: stroke_style(s)?,
        width: number(width)?,
        color: color.as_color()?,
        radius,
    }))
}

/// `filled(kind, brush)`.
///
/// The first argument decides how the second is read:
/// - `solid` → a color
/// - a hatch pattern → `hatch(fore, back)` or a plain fore color
/// - `texture` → `sample(...)` or a bare `url(...)`
/// - `linear` → `linear(...)`
/// - `none` → no second argument
///
/// A lone color argument is shorthand for `filled(solid, color)`.
fn parse_filled(p: &mut Parser<'_>) -> Option<Value> {
    if !p.eat(Token::ParenOpen) {
        return None;
    }

    let kind = p.parse_value();
    let brush = match kind {
        Value::Color(c) => Brush::Solid(c),
        Value::Flags(style::NONE) => Brush::None,
        Value::Flags(flags) => {
            if !p.eat(Token::Comma) {
                return None;
            }
            let arg = p.parse_value();
            match flags {
                style::SOLID => Brush::Solid(arg.as_color()?),
                style::TEXTURE => match arg {
                    Value::Texture(t) => Brush::Texture(t),
                    Value::Url(url) => Brush::Texture(TextureBrush { url, src: Vec4::ZERO }),
                    _ => return None,
                },
                style::LINEAR => match arg {
                    Value::Linear(l) => Brush::Linear(l),
                    _ => return None,
                },
                _ => {
                    let pattern = HatchPattern::from_flags(flags)?;
                    let hatch = match arg {
                        Value::Hatch(h) => h,
                        Value::Color(fore) => HatchBrush { fore, back: Color::TRANSPARENT },
                        _ => return None,
                    };
                    Brush::Hatch(pattern, hatch)
                }
            }
        }
        _ => return None,
    };

    if !p.eat(Token::ParenClose) {
        return None;
    }
    Some(Value::Filled(Filled { brush }))
}

/// `url(path)`. The path is taken verbatim (or unquoted if quoted).
fn parse_url(p: &mut Parser<'_>) -> Option<Value> {
    if !p.eat(Token::ParenOpen) {
        return None;
    }
    let path = match p.parse_value() {
        Value::String(s) if matches!(p.peek(), Some(Token::ParenClose)) => s,
        _ => return None,
    };
    if !p.eat(Token::ParenClose) {
        return None;
    }
    Some(Value::Url(path))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::style::parser::parse_value;

    // ── Colors ───────────────────────────────────────────────────────

    #[test]
    fn rgb_and_rgba() {
        assert_eq!(parse_value("rgb(1, 2, 3)"), Value::Color(Color::rgb(1, 2, 3)));
        assert_eq!(parse_value("rgba(1, 2, 3, 4)"), Value::Color(Color::rgba(1, 2, 3, 4)));
        assert_eq!(parse_value("rgba(0, 0, 0, 0.5)"), Value::Color(Color::rgba(0, 0, 0, 128)));
        assert_eq!(parse_value("rgb(300, -4, 0)"), Value::Color(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn rgb_wrong_arity_is_raw() {
        assert_eq!(parse_value("rgb(1, 2)"), Value::String("rgb(1, 2)".into()));
    }

    #[test]
    fn dark_and_light() {
        assert_eq!(parse_value("dark(white, 0.5)"), Value::Color(Color::rgb(128, 128, 128)));
        assert_eq!(parse_value("light(black, 1)"), Value::Color(Color::WHITE));
        assert_eq!(parse_value("dark(rgb(100, 100, 100))"), Value::Color(Color::rgb(80, 80, 80)));
    }

    #[test]
    fn vectors() {
        assert_eq!(parse_value("vec2(1.5, -2)"), Value::Vec2(Vec2::new(1.5, -2.0)));
        assert_eq!(
            parse_value("vec4(1, 2, 3, 4)"),
            Value::Vec4(Vec4::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    // ── Strokes and borders ──────────────────────────────────────────

    #[test]
    fn stroke_value() {
        assert_eq!(
            parse_value("stroke(dash, 1.5, #00FF00FF)"),
            Value::Stroke(Stroke { style: StrokeStyle::Dash, width: 1.5, color: Color::rgb(0, 255, 0) })
        );
    }

    #[test]
    fn border_with_scalar_radius() {
        let Value::Border(b) = parse_value("border(solid, 1, black, 4)") else {
            panic!("expected border");
        };
        assert_eq!(b.radius, Vec4::splat(4.0));
    }

    #[test]
    fn border_with_bad_style_is_raw() {
        assert!(matches!(parse_value("border(red, 1, black)"), Value::String(_)));
    }

    // ── Filled ───────────────────────────────────────────────────────

    #[test]
    fn filled_solid() {
        assert_eq!(
            parse_value("filled(solid, red)"),
            Value::Filled(Filled::solid(Color::rgb(255, 0, 0)))
        );
        assert_eq!(
            parse_value("filled(blue)"),
            Value::Filled(Filled::solid(Color::rgb(0, 0, 255)))
        );
    }

    #[test]
    fn filled_none() {
        assert_eq!(parse_value("filled(none)"), Value::Filled(Filled::none()));
    }

    #[test]
    fn filled_hatch_reads_hatch_colors() {
        assert_eq!(
            parse_value("filled(cross, hatch(black, white))"),
            Value::Filled(Filled {
                brush: Brush::Hatch(
                    HatchPattern::Cross,
                    HatchBrush { fore: Color::BLACK, back: Color::WHITE }
                ),
            })
        );
        assert_eq!(
            parse_value("filled(vertical, red)"),
            Value::Filled(Filled {
                brush: Brush::Hatch(
                    HatchPattern::Vertical,
                    HatchBrush { fore: Color::rgb(255, 0, 0), back: Color::TRANSPARENT }
                ),
            })
        );
    }

    #[test]
    fn filled_texture_reads_sample() {
        assert_eq!(
            parse_value("filled(texture, sample(url(skin/button.png), vec4(0, 0, 16, 16)))"),
            Value::Filled(Filled {
                brush: Brush::Texture(TextureBrush {
                    url: "skin/button.png".into(),
                    src: Vec4::new(0.0, 0.0, 16.0, 16.0),
                }),
            })
        );
        assert_eq!(
            parse_value("filled(texture, url('a b.png'))"),
            Value::Filled(Filled {
                brush: Brush::Texture(TextureBrush { url: "a b.png".into(), src: Vec4::ZERO }),
            })
        );
    }

    #[test]
    fn filled_linear_reads_gradient() {
        assert_eq!(
            parse_value("filled(linear, linear(vec2(0, 0), vec2(0, 1), white, black))"),
            Value::Filled(Filled {
                brush: Brush::Linear(LinearGradient {
                    start: Vec2::new(0.0, 0.0),
                    end: Vec2::new(0.0, 1.0),
                    from: Color::WHITE,
                    to: Color::BLACK,
                }),
            })
        );
    }

    #[test]
    fn filled_schema_mismatch_is_raw() {
        // `solid` expects a color, not a gradient.
        assert!(matches!(
            parse_value("filled(solid, linear(vec2(0,0), vec2(1,1), red, blue))"),
            Value::String(_)
        ));
        // `linear` expects a gradient, not a color.
        assert!(matches!(parse_value("filled(linear, red)"), Value::String(_)));
    }

    // ── url ──────────────────────────────────────────────────────────

    #[test]
    fn url_keeps_path_verbatim() {
        assert_eq!(parse_value("url(images/ok.png)"), Value::Url("images/ok.png".into()));
        assert_eq!(parse_value("url(\"x.png\")"), Value::Url("x.png".into()));
    }
}
