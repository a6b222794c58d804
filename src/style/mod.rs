//! Style engine: tokenizer, value parser, selector sheets, cascade lookup.

pub mod functions;
pub mod names;
pub mod parser;
pub mod query;
pub mod sheet;
pub mod tokenizer;
pub mod value;

pub use parser::{parse_value, ParseError};
pub use query::StyleQuery;
pub use sheet::{cascade_find, Selector, StyleSheet};
pub use value::{
    Border, Brush, Filled, FromValue, HatchBrush, HatchPattern, LinearGradient, Stroke,
    StrokeStyle, TextureBrush, Value,
};
