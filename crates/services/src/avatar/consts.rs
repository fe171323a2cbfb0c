// Initials used when the caller gives no name
pub const DEFAULT_FIRST_INITIAL: &str = "N";
pub const DEFAULT_SECOND_INITIAL: &str = "L";

// Colors are hex digits without the leading `#`
pub const DEFAULT_BACKGROUND_COLOR: &str = "d9d9d9";
pub const DEFAULT_TEXT_COLOR: &str = "000";
pub const COLOR_PATTERN: &str = "^[0-9a-fA-F]{3,6}$";

// Canvas size in pixels
pub const DEFAULT_SIZE: u32 = 100;
pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 512;

// Font size multiplier, relative to the canvas size
pub const DEFAULT_FONT_SIZE_MULTIPLIER: f64 = 1.0;
pub const MIN_FONT_SIZE_MULTIPLIER: f64 = 0.5;
pub const MAX_FONT_SIZE_MULTIPLIER: f64 = 1.2;

/// Ratio between canvas size and glyph size that visually fills the square
pub const FONT_SCALE: f64 = 0.64;

pub const DEFAULT_FONT_WEIGHT: &str = "normal";
pub const FONT_WEIGHTS: [&str; 4] = ["normal", "bold", "bolder", "lighter"];

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
