//! Path mini-language.
//!
//! Paths travel from widget code to the renderer as space-delimited text:
//! `M x y`, `L x y`, `C c1x c1y c2x c2y ex ey`, `S cx cy ex ey`,
//! `Q cx cy ex ey`, `T ex ey`, `Z`. Coordinates are decimal text.
//! [`PathOp::parse_all`] reads it back; an unknown opcode is an error.

use std::fmt::Write as _;

use crate::geometry::Vec2;

/// Errors from reading path text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("unknown path opcode '{0}'")]
    UnknownOp(String),
    #[error("opcode '{op}' expects {expected} coordinates")]
    MissingCoordinate { op: char, expected: usize },
    #[error("invalid path coordinate '{0}'")]
    BadNumber(String),
}

/// One path operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo(Vec2, Vec2, Vec2),
    SmoothTo(Vec2, Vec2),
    QuadTo(Vec2, Vec2),
    SmoothQuadTo(Vec2),
    Close,
}

impl PathOp {
    /// Append this operation to `out` in mini-language form.
    pub fn write(&self, out: &mut String) {
        if !out.is_empty() {
            out.push(' ');
        }
        let pt = |out: &mut String, p: Vec2| {
            let _ = write!(out, " {} {}", p.x, p.y);
        };
        match *self {
            PathOp::MoveTo(p) => {
                out.push('M');
                pt(out, p);
            }
            PathOp::LineTo(p) => {
                out.push('L');
                pt(out, p);
            }
            PathOp::CurveTo(c1, c2, e) => {
                out.push('C');
                pt(out, c1);
                pt(out, c2);
                pt(out, e);
            }
            PathOp::SmoothTo(c, e) => {
                out.push('S');
                pt(out, c);
                pt(out, e);
            }
            PathOp::QuadTo(c, e) => {
                out.push('Q');
                pt(out, c);
                pt(out, e);
            }
            PathOp::SmoothQuadTo(e) => {
                out.push('T');
                pt(out, e);
            }
            PathOp::Close => out.push('Z'),
        }
    }

    /// Parse path text into operations.
    pub fn parse_all(data: &str) -> Result<Vec<PathOp>, PathError> {
        let mut words = data.split_whitespace();
        let mut ops = Vec::new();

        while let Some(op) = words.next() {
            let mut points = |op: char, n: usize| -> Result<Vec<Vec2>, PathError> {
                let mut pts = Vec::with_capacity(n);
                for _ in 0..n {
                    let mut coord = || -> Result<f32, PathError> {
                        let word = words
                            .next()
                            .ok_or(PathError::MissingCoordinate { op, expected: n * 2 })?;
                        word.parse::<f32>().map_err(|_| PathError::BadNumber(word.to_string()))
                    };
                    let x = coord()?;
                    let y = coord()?;
                    pts.push(Vec2::new(x, y));
                }
                Ok(pts)
            };

            let parsed = match op {
                "M" => PathOp::MoveTo(points('M', 1)?[0]),
                "L" => PathOp::LineTo(points('L', 1)?[0]),
                "C" => {
                    let p = points('C', 3)?;
                    PathOp::CurveTo(p[0], p[1], p[2])
                }
                "S" => {
                    let p = points('S', 2)?;
                    PathOp::SmoothTo(p[0], p[1])
                }
                "Q" => {
                    let p = points('Q', 2)?;
                    PathOp::QuadTo(p[0], p[1])
                }
                "T" => PathOp::SmoothQuadTo(points('T', 1)?[0]),
                "Z" => PathOp::Close,
                other => return Err(PathError::UnknownOp(other.to_string())),
            };
            ops.push(parsed);
        }

        Ok(ops)
    }
}
