//! # Frame Clock
//!
//! Wall-clock deltas for [`ParticleEmitter::update`](ember_core::ParticleEmitter::update).
//!
//! ```text
//! tick():
//!   now   = Instant::now()
//!   delta = now - last_update        (clamped to max_delta, if set)
//!   last_update = now
//! ```
//!
//! The emitter itself never reads the clock. Anything that can produce a
//! delta in seconds can drive it; this is the usual source.

use std::time::{Duration, Instant};

/// Tracks the timestamp of the last update and hands out deltas.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_update: Instant,
    max_delta: Option<f32>,
    frames: u64,
}

impl FrameClock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Starts the clock at a given instant.
    #[must_use]
    pub const fn starting_at(start: Instant) -> Self {
        Self {
            last_update: start,
            max_delta: None,
            frames: 0,
        }
    }

    /// Caps every delta at `seconds`, so a stall does not become one huge step.
    #[must_use]
    pub fn with_max_delta(mut self, seconds: f32) -> Self {
        self.max_delta = Some(seconds);
        self
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds between the previous tick and `now`.
    ///
    /// An instant earlier than the last update yields 0.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.last_update)
            .unwrap_or(Duration::ZERO)
            .as_secs_f32();
        self.last_update = now;
        self.frames += 1;
        match self.max_delta {
            Some(max) => elapsed.min(max),
            None => elapsed,
        }
    }

    /// When the last tick happened (or the clock started).
    #[must_use]
    pub const fn last_update(&self) -> Instant {
        self.last_update
    }

    /// Number of ticks so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
