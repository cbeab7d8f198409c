//! The mounted effect: buffers, processes and the state each one owns.
//!
//! Every field group has exactly one writer. The grain buffer is written only
//! by the noise process, the parameter snapshot only by the modulator, and the
//! text state only by the typers and the cursor. Display code reads copies
//! through [`Monitor::scene`] and [`Monitor::text_overlay`].

use crate::compositor::{compose, Scene};
use crate::constants::{DEFAULT_HEADLINE, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::{CrtError, Result};
use crate::modulator::{AnimationParameters, Clock, Modulator};
use crate::noise::NoiseGenerator;
use crate::overlay::{blurred_text_style, TextOverlay};
use crate::pattern;
use crate::pixel::PixelBuffer;
use crate::schedule::{DueList, Process, Schedule, Timings};
use crate::tear::TearOverlay;
use crate::text::{CursorBlinker, CyclingTyper, HeadlineStep, HeadlineTyper, PhraseQueue, TypedState};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct MonitorConfig {
    pub width: u32,
    pub height: u32,
    pub phrases: PhraseQueue,
    pub headline: String,
    pub timings: Timings,
    /// Whether the text overlay runs from the start.
    pub active: bool,
    /// Fixed seed for grain, tear and band rolls; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            phrases: PhraseQueue::default(),
            headline: DEFAULT_HEADLINE.to_string(),
            timings: Timings::default(),
            active: false,
            seed: None,
        }
    }
}

/// What changed during one [`Monitor::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    pub noise: bool,
    pub params: bool,
    pub text: bool,
}

impl FrameUpdate {
    /// Layer styles or text need to be re-applied.
    pub fn needs_restyle(&self) -> bool {
        self.params || self.text
    }

    pub fn is_empty(&self) -> bool {
        !(self.noise || self.params || self.text)
    }
}

pub struct Monitor {
    pattern: PixelBuffer,
    noise: PixelBuffer,
    noise_gen: NoiseGenerator,
    modulator: Modulator,
    params: AnimationParameters,
    typer: CyclingTyper,
    headline: HeadlineTyper,
    cursor: CursorBlinker,
    schedule: Schedule,
    clock: Box<dyn Clock>,
    tear_rng: StdRng,
    active: bool,
    mounted: bool,
}

impl Monitor {
    pub fn mount(config: MonitorConfig, clock: impl Clock + 'static) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(CrtError::EmptySurface {
                width: config.width,
                height: config.height,
            });
        }
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        // Independent streams per consumer so one never shifts another's sequence
        let stream = |i: u64| StdRng::seed_from_u64(seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let mut pattern = PixelBuffer::new(config.width, config.height);
        pattern::render(&mut pattern);

        let mut noise = PixelBuffer::new(config.width, config.height);
        let mut noise_gen = NoiseGenerator::new(stream(1));
        noise_gen.tick(&mut noise);

        let mut modulator = Modulator::new(stream(2));
        let params = modulator.sample(clock.now_secs());

        let mut schedule = Schedule::new(config.timings);
        for process in Process::ALL.into_iter().filter(|p| p.is_text()) {
            schedule.set_enabled(process, config.active);
        }

        log::info!(
            "[crt] mounted {}x{} active={} blur={:.2} noise={:.2}",
            config.width,
            config.height,
            config.active,
            params.blur,
            params.noise_opacity
        );

        Ok(Self {
            pattern,
            noise,
            noise_gen,
            modulator,
            params,
            typer: CyclingTyper::new(config.phrases),
            headline: HeadlineTyper::new(config.headline),
            cursor: CursorBlinker::new(),
            schedule,
            clock: Box::new(clock),
            tear_rng: stream(3),
            active: config.active,
            mounted: true,
        })
    }

    /// Run every process that came due during the last `dt`.
    pub fn frame(&mut self, dt: Duration) -> FrameUpdate {
        let mut update = FrameUpdate::default();
        if !self.mounted {
            return update;
        }
        let mut due = DueList::new();
        self.schedule.advance(dt, &mut due);
        for process in due {
            self.dispatch(process, &mut update);
        }
        update
    }

    fn dispatch(&mut self, process: Process, update: &mut FrameUpdate) {
        match process {
            Process::Noise => {
                self.noise_gen.tick(&mut self.noise);
                update.noise = true;
            }
            Process::Modulator => {
                self.params = self.modulator.tick(self.clock.now_secs());
                update.params = true;
            }
            Process::Typer => {
                self.typer.tick();
                update.text = true;
            }
            Process::Headline => match self.headline.tick() {
                HeadlineStep::Revealed(_) => update.text = true,
                HeadlineStep::Finished => {
                    self.schedule.set_enabled(Process::Headline, false);
                    log::debug!("[typer] headline {:?} fully shown", self.headline.text());
                }
            },
            Process::Cursor => {
                self.cursor.toggle();
                update.text = true;
            }
        }
    }

    /// Start or stop the text processes. Activation begins the phrase cycle
    /// and the headline from scratch.
    pub fn set_active(&mut self, active: bool) {
        if !self.mounted || self.active == active {
            return;
        }
        self.active = active;
        if active {
            self.typer.reset();
            self.headline.restart();
            self.cursor = CursorBlinker::new();
        }
        for process in Process::ALL.into_iter().filter(|p| p.is_text()) {
            self.schedule.set_enabled(process, active);
        }
        log::info!("[crt] active={}", active);
    }

    /// Replace the headline. Any partial reveal of the old text is dropped
    /// and the pending headline tick is discarded.
    pub fn set_headline(&mut self, text: &str) {
        if !self.mounted {
            return;
        }
        if self.headline.set_text(text) {
            self.rearm_headline();
        }
    }

    pub fn restart_headline(&mut self) {
        if !self.mounted {
            return;
        }
        self.headline.restart();
        self.rearm_headline();
    }

    fn rearm_headline(&mut self) {
        if self.active {
            self.schedule.set_enabled(Process::Headline, true);
        }
    }

    /// Cancel every process. Later calls into the monitor change nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.schedule.cancel();
        self.mounted = false;
        log::info!(
            "[crt] unmounted after {} noise frames, {} modulator ticks",
            self.noise_gen.frames(),
            self.modulator.ticks()
        );
    }

    /// Compose the current snapshot. The tear bands are re-rolled on every
    /// call.
    pub fn scene(&mut self) -> Scene {
        let tear = TearOverlay::roll(self.params.tear_intensity, &mut self.tear_rng);
        compose(&self.params, tear)
    }

    pub fn text_overlay(&self) -> Option<TextOverlay> {
        if !self.active || !self.mounted {
            return None;
        }
        Some(TextOverlay {
            phrase: self.typer.revealed().to_string(),
            headline: self.headline.revealed().to_string(),
            cursor_visible: self.cursor.is_visible(),
            style: blurred_text_style(self.params.blur, self.params.chromatic_offset),
        })
    }

    pub fn typed_state(&self) -> TypedState {
        TypedState {
            revealed_prefix_len: self.typer.prefix_len(),
            cursor_visible: self.cursor.is_visible(),
        }
    }

    pub fn params(&self) -> AnimationParameters {
        self.params
    }

    pub fn pattern(&self) -> &PixelBuffer {
        &self.pattern
    }

    pub fn noise(&self) -> &PixelBuffer {
        &self.noise
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn typer(&self) -> &CyclingTyper {
        &self.typer
    }

    pub fn headline(&self) -> &HeadlineTyper {
        &self.headline
    }

    pub fn noise_frames(&self) -> u64 {
        self.noise_gen.frames()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
