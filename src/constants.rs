// DOM hooks for the front-end. Styling for these classes lives in the page.

pub const FRAME_CLASS: &str = "crt-frame";
pub const CANVAS_CLASS: &str = "crt-canvas";
pub const LAYER_CLASS_PREFIX: &str = "crt-";

pub const TEAR_BAND_CLASS: &str = "crt-tear-effect";
pub const TEAR_SCANLINE_CLASS: &str = "crt-scanline-tear";

pub const TEXT_CONTAINER_CLASS: &str = "crt-text-container";
pub const TEXT_PHRASE_CLASS: &str = "crt-text";
pub const TEXT_HEADLINE_CLASS: &str = "crt-headline";
pub const TEXT_CURSOR_CLASS: &str = "crt-cursor";
pub const CURSOR_GLYPH: &str = "_";

pub const HIDDEN_STYLE: &str = "display:none";
