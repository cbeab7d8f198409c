//! The periodic processes that drive the effect, and a fixed-step scheduler
//! that runs them from a single frame loop.
//!
//! Each interval process owns an accumulator, so the processes keep their own
//! cadence even though they share one loop. Nothing orders one process's ticks
//! against another's beyond the order of [`Process::ALL`] within a frame.

use crate::constants::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Process {
    /// Grain redraw, once per display frame.
    Noise,
    Modulator,
    Typer,
    Headline,
    Cursor,
}

impl Process {
    pub const ALL: [Process; 5] = [
        Process::Noise,
        Process::Modulator,
        Process::Typer,
        Process::Headline,
        Process::Cursor,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            Process::Noise => 0,
            Process::Modulator => 1,
            Process::Typer => 2,
            Process::Headline => 3,
            Process::Cursor => 4,
        }
    }

    /// Processes that only run while the text overlay is active.
    pub fn is_text(self) -> bool {
        matches!(self, Process::Typer | Process::Headline | Process::Cursor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub modulator: Duration,
    pub typer: Duration,
    pub headline: Duration,
    pub cursor: Duration,
    pub max_catch_up: u32,
}

impl Timings {
    /// `None` for the per-frame process.
    pub fn period(&self, process: Process) -> Option<Duration> {
        match process {
            Process::Noise => None,
            Process::Modulator => Some(self.modulator),
            Process::Typer => Some(self.typer),
            Process::Headline => Some(self.headline),
            Process::Cursor => Some(self.cursor),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            modulator: Duration::from_millis(MODULATOR_PERIOD_MS),
            typer: Duration::from_millis(TYPER_PERIOD_MS),
            headline: Duration::from_millis(HEADLINE_PERIOD_MS),
            cursor: Duration::from_millis(CURSOR_PERIOD_MS),
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    enabled: bool,
    accum: Duration,
    fired: u64,
}

pub type DueList = SmallVec<[Process; 8]>;

pub struct Schedule {
    timings: Timings,
    slots: [Slot; 5],
    cancelled: bool,
}

impl Schedule {
    /// Every process starts enabled.
    pub fn new(timings: Timings) -> Self {
        let slot = Slot {
            enabled: true,
            ..Slot::default()
        };
        Self {
            timings,
            slots: [slot; 5],
            cancelled: false,
        }
    }

    /// Advance by one display frame of length `dt`, pushing every due tick
    /// onto `out` in firing order.
    pub fn advance(&mut self, dt: Duration, out: &mut DueList) {
        if self.cancelled {
            return;
        }
        for process in Process::ALL {
            let max_catch_up = self.timings.max_catch_up;
            let period = self.timings.period(process);
            let slot = &mut self.slots[process.slot()];
            if !slot.enabled {
                continue;
            }
            let period = match period {
                Some(p) if !p.is_zero() => p,
                _ => {
                    slot.fired += 1;
                    out.push(process);
                    continue;
                }
            };
            slot.accum += dt;
            let mut ticks = 0;
            while slot.accum >= period && ticks < max_catch_up {
                slot.accum -= period;
                ticks += 1;
                out.push(process);
            }
            if slot.accum >= period {
                // Stalled frame; keep the phase, drop the backlog
                let rem = slot.accum.as_nanos() % period.as_nanos();
                slot.accum = Duration::from_nanos(rem as u64);
                log::debug!("[schedule] {:?} dropped backlog after stall", process);
            }
            slot.fired += ticks as u64;
        }
    }

    /// Turning a process on or off restarts its period.
    pub fn set_enabled(&mut self, process: Process, enabled: bool) {
        if self.cancelled {
            return;
        }
        let slot = &mut self.slots[process.slot()];
        slot.enabled = enabled;
        slot.accum = Duration::ZERO;
    }

    pub fn is_enabled(&self, process: Process) -> bool {
        !self.cancelled && self.slots[process.slot()].enabled
    }

    /// Stop every process for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        for slot in &mut self.slots {
            slot.enabled = false;
            slot.accum = Duration::ZERO;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Ticks delivered for `process` so far.
    pub fn fired(&self, process: Process) -> u64 {
        self.slots[process.slot()].fired
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }
}
