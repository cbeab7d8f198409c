// Shared timing and tuning constants for the CRT effect.

// Surface size in buffer pixels. Pages may scale the output; the bar geometry
// is always computed in this space.
pub const SURFACE_WIDTH: u32 = 1280;
pub const SURFACE_HEIGHT: u32 = 720;

// Periodic process intervals (milliseconds)
pub const MODULATOR_PERIOD_MS: u64 = 100;
pub const TYPER_PERIOD_MS: u64 = 300; // cycling phrase queue
pub const HEADLINE_PERIOD_MS: u64 = 200; // single caller-supplied phrase
pub const CURSOR_PERIOD_MS: u64 = 500;

// Upper bound on ticks a single interval process may run in one frame after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 4;

// Modulator curves: value = base + |sin(t * rate) * span|
pub const BLUR_BASE: f64 = 5.0;
pub const BLUR_SPAN: f64 = 12.0;
pub const BLUR_RATE: f64 = 0.3;

pub const NOISE_OPACITY_BASE: f64 = 0.3;
pub const NOISE_OPACITY_SPAN: f64 = 0.23;
pub const NOISE_OPACITY_RATE: f64 = 0.5;

pub const CHROMATIC_SPAN: f64 = 6.0;
pub const CHROMATIC_RATE: f64 = 0.4;

pub const LAYER_OFFSET_SPAN: f64 = 5.0;
pub const LAYER_OFFSET_RATE: f64 = 0.6;
// Vertical layer offset held for the whole mounted lifetime (px)
pub const LAYER_OFFSET_HELD: f64 = 100.0;

// Tear gate: open while -0.8 < sin(t * 0.8) < 0.6
pub const TEAR_RATE: f64 = 0.8;
pub const TEAR_GATE_LOW: f64 = -0.8;
pub const TEAR_GATE_HIGH: f64 = 0.6;
pub const TEAR_MAX: f64 = 100.0;

// Tear bands (positions in percent of overlay height)
pub const TEAR_BAND_TOP_MIN: f64 = 20.0;
pub const TEAR_BAND_TOP_SPAN: f64 = 60.0;
pub const TEAR_SCANLINE_TOP_SPAN: f64 = 80.0;
pub const TEAR_BAND_OPACITY: f64 = 0.7;
pub const TEAR_SCANLINE_OPACITY: f64 = 0.5;

pub const DEFAULT_PHRASES: [&str; 8] = [
    "HELLO",
    "WORLD",
    "LOOKING",
    "FOR",
    "SOMETHING",
    "TO",
    "BELIEVE",
    "IN",
];

pub const DEFAULT_HEADLINE: &str = "JETLAG";
