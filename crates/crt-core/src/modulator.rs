//! Time-driven animation parameters.
//!
//! Every parameter except the tear is a deterministic function of the clock.
//! The tear is gated by the phase of a slow sine and rolled fresh on each
//! tick while the gate is open, which gives bursty, irregular glitches.

use crate::constants::*;
use instant::Instant;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Snapshot of every animated value the compositor consumes.
///
/// Replaced as a whole on each modulator tick; readers copy it out and never
/// observe a half-written record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParameters {
    /// Base blur radius in px, in `[5, 17]`.
    pub blur: f64,
    /// Grain layer opacity, in `[0.3, 0.53]`.
    pub noise_opacity: f64,
    /// Horizontal channel split in px, in `[0, 6]`.
    pub chromatic_offset: f64,
    /// Vertical channel split in px. Held at its mount value.
    pub layer_offset: f64,
    /// Tear strength, `0` when the gate is closed, otherwise in `[0, 100]`.
    pub tear_intensity: f64,
}

#[inline]
pub fn blur_at(t: f64) -> f64 {
    BLUR_BASE + ((t * BLUR_RATE).sin() * BLUR_SPAN).abs()
}

#[inline]
pub fn noise_opacity_at(t: f64) -> f64 {
    NOISE_OPACITY_BASE + ((t * NOISE_OPACITY_RATE).sin() * NOISE_OPACITY_SPAN).abs()
}

#[inline]
pub fn chromatic_offset_at(t: f64) -> f64 {
    ((t * CHROMATIC_RATE).sin() * CHROMATIC_SPAN).abs()
}

/// Vertical offset curve. Not applied by [`Modulator`]; the parameter keeps
/// its mount value.
#[inline]
pub fn layer_offset_at(t: f64) -> f64 {
    ((t * LAYER_OFFSET_RATE).sin() * LAYER_OFFSET_SPAN).abs()
}

/// True while `-0.8 < sin(0.8 t) < 0.6`.
#[inline]
pub fn tear_gate_open(t: f64) -> bool {
    let s = (t * TEAR_RATE).sin();
    s > TEAR_GATE_LOW && s < TEAR_GATE_HIGH
}

pub fn tear_intensity_at<R: Rng + ?Sized>(t: f64, rng: &mut R) -> f64 {
    if tear_gate_open(t) {
        rng.gen_range(0.0..=TEAR_MAX)
    } else {
        0.0
    }
}

/// Monotonic time source read by the modulator.
pub trait Clock {
    /// Seconds since the clock's origin.
    fn now_secs(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_secs(&self) -> f64 {
        (**self).now_secs()
    }
}

/// Wall-independent clock starting at zero when created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and offline rendering.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(now_secs: f64) -> Self {
        Self {
            now: Cell::new(now_secs),
        }
    }

    pub fn set(&self, now_secs: f64) {
        self.now.set(now_secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

pub struct Modulator {
    rng: StdRng,
    layer_offset: f64,
    ticks: u64,
}

impl Modulator {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            layer_offset: LAYER_OFFSET_HELD,
            ticks: 0,
        }
    }

    /// Evaluate every curve at `t` without counting a tick.
    pub fn sample(&mut self, t: f64) -> AnimationParameters {
        AnimationParameters {
            blur: blur_at(t),
            noise_opacity: noise_opacity_at(t),
            chromatic_offset: chromatic_offset_at(t),
            layer_offset: self.layer_offset,
            tear_intensity: tear_intensity_at(t, &mut self.rng),
        }
    }

    /// One periodic update: a complete new snapshot for time `now_secs`.
    pub fn tick(&mut self, now_secs: f64) -> AnimationParameters {
        self.ticks += 1;
        self.sample(now_secs)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
