//! Named keyword tables: flag keywords and CSS color names.
//!
//! A bare word in a value position is looked up here after the numeric
//! checks fail. Flag keywords share one namespace; the attribute that reads
//! the value decides which group it belongs to (`solid` is both a stroke style
//! and a fill style).

use crate::geometry::Color;

// ---------------------------------------------------------------------------
// Flag constants
// ---------------------------------------------------------------------------

/// Stroke, border and fill styles.
pub mod style {
    pub const NONE: u32 = 0;
    pub const SOLID: u32 = 1;
    pub const DASH: u32 = 2;
    pub const DOT: u32 = 3;
    pub const DASH_DOT: u32 = 4;
    pub const DASH_DOT_DOT: u32 = 5;

    pub const HATCH_HORIZONTAL: u32 = 16;
    pub const HATCH_VERTICAL: u32 = 17;
    pub const HATCH_CROSS: u32 = 18;
    pub const HATCH_BDIAGONAL: u32 = 19;
    pub const HATCH_FDIAGONAL: u32 = 20;
    pub const HATCH_DIAGCROSS: u32 = 21;

    pub const TEXTURE: u32 = 32;
    pub const LINEAR: u32 = 33;
}

/// Text alignment bits. Horizontal and vertical bits combine.
pub mod align {
    pub const LEFT: u32 = 0x0100;
    pub const RIGHT: u32 = 0x0200;
    pub const HCENTER: u32 = 0x0400;
    pub const TOP: u32 = 0x0800;
    pub const BOTTOM: u32 = 0x1000;
    pub const VCENTER: u32 = 0x2000;
    pub const CENTER: u32 = HCENTER | VCENTER;

    pub const HORIZONTAL: u32 = LEFT | RIGHT | HCENTER;
    pub const VERTICAL: u32 = TOP | BOTTOM | VCENTER;
}

/// Slider, scrollbar and progress orientations.
pub mod direction {
    pub const LEFT_RIGHT: u32 = 0x1_0000;
    pub const RIGHT_LEFT: u32 = 0x2_0000;
    pub const TOP_BOTTOM: u32 = 0x4_0000;
    pub const BOTTOM_TOP: u32 = 0x8_0000;
}

const FLAGS: &[(&str, u32)] = &[
    ("none", style::NONE),
    ("solid", style::SOLID),
    ("dash", style::DASH),
    ("dot", style::DOT),
    ("dash_dot", style::DASH_DOT),
    ("dash_dot_dot", style::DASH_DOT_DOT),
    ("horizontal", style::HATCH_HORIZONTAL),
    ("vertical", style::HATCH_VERTICAL),
    ("cross", style::HATCH_CROSS),
    ("bdiagonal", style::HATCH_BDIAGONAL),
    ("fdiagonal", style::HATCH_FDIAGONAL),
    ("diagcross", style::HATCH_DIAGCROSS),
    ("texture", style::TEXTURE),
    ("linear", style::LINEAR),
    ("left", align::LEFT),
    ("right", align::RIGHT),
    ("hcenter", align::HCENTER),
    ("top", align::TOP),
    ("bottom", align::BOTTOM),
    ("vcenter", align::VCENTER),
    ("center", align::CENTER),
    ("left_right", direction::LEFT_RIGHT),
    ("right_left", direction::RIGHT_LEFT),
    ("top_bottom", direction::TOP_BOTTOM),
    ("bottom_top", direction::BOTTOM_TOP),
];

const COLORS: &[(&str, Color)] = &[
    ("transparent", Color::rgba(0, 0, 0, 0)),
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("aqua", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("silver", Color::rgb(192, 192, 192)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("dimgray", Color::rgb(105, 105, 105)),
    ("gainsboro", Color::rgb(220, 220, 220)),
    ("whitesmoke", Color::rgb(245, 245, 245)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("darkred", Color::rgb(139, 0, 0)),
    ("crimson", Color::rgb(220, 20, 60)),
    ("tomato", Color::rgb(255, 99, 71)),
    ("coral", Color::rgb(255, 127, 80)),
    ("salmon", Color::rgb(250, 128, 114)),
    ("pink", Color::rgb(255, 192, 203)),
    ("hotpink", Color::rgb(255, 105, 180)),
    ("orange", Color::rgb(255, 165, 0)),
    ("darkorange", Color::rgb(255, 140, 0)),
    ("gold", Color::rgb(255, 215, 0)),
    ("khaki", Color::rgb(240, 230, 140)),
    ("olive", Color::rgb(128, 128, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("darkgreen", Color::rgb(0, 100, 0)),
    ("lightgreen", Color::rgb(144, 238, 144)),
    ("seagreen", Color::rgb(46, 139, 87)),
    ("teal", Color::rgb(0, 128, 128)),
    ("navy", Color::rgb(0, 0, 128)),
    ("darkblue", Color::rgb(0, 0, 139)),
    ("royalblue", Color::rgb(65, 105, 225)),
    ("steelblue", Color::rgb(70, 130, 180)),
    ("dodgerblue", Color::rgb(30, 144, 255)),
    ("skyblue", Color::rgb(135, 206, 235)),
    ("lightblue", Color::rgb(173, 216, 230)),
    ("purple", Color::rgb(128, 0, 128)),
    ("indigo", Color::rgb(75, 0, 130)),
    ("violet", Color::rgb(238, 130, 238)),
    ("orchid", Color::rgb(218, 112, 214)),
    ("brown", Color::rgb(165, 42, 42)),
    ("chocolate", Color::rgb(210, 105, 30)),
    ("tan", Color::rgb(210, 180, 140)),
    ("beige", Color::rgb(245, 245, 220)),
    ("ivory", Color::rgb(255, 255, 240)),
];

/// Look up a flag keyword. Case-sensitive, like the rest of the grammar.
pub fn flag(name: &str) -> Option<u32> {
    FLAGS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Look up a CSS color name. Case-insensitive.
pub fn color(name: &str) -> Option<Color> {
    COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}
