//! Draw command model: element variants, path mini-language, frame buffer.

pub mod element;
pub mod list;
pub mod path;

pub use element::{
    CircleElement, Element, EllipseElement, ImageElement, LineElement, PathElement,
    PolygonElement, RectElement, TextElement,
};
pub use list::{CommandList, DrawCommand};
pub use path::{PathError, PathOp};
