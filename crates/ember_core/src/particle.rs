//! # Particle Record
//!
//! Pure data. Particles live only inside the emitter's pool and are created
//! and destroyed by index manipulation, never individually allocated.

use crate::math::{Color4, Vec3};

/// Motion model of an emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmitterKind {
    /// Constant gravity plus radial/tangential acceleration around the spawn
    /// origin.
    #[default]
    Gravity,
    /// Particles orbit the source position at a decaying radius.
    Radial,
}

impl EmitterKind {
    /// Decodes the numeric emitter type used by particle designer documents
    /// (`0` gravity, `1` radial).
    #[must_use]
    pub const fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Gravity),
            1 => Some(Self::Radial),
            _ => None,
        }
    }

    /// Numeric emitter type.
    #[must_use]
    pub const fn to_raw(self) -> i64 {
        match self {
            Self::Gravity => 0,
            Self::Radial => 1,
        }
    }
}

/// A single simulated particle.
///
/// `color_delta`, `size_delta` and `radius_delta` are per-tick increments
/// computed once at spawn against the fixed 60 Hz tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Velocity (units per second).
    pub direction: Vec3,
    /// Emitter source position at spawn time.
    pub start_position: Vec3,
    /// Current color.
    pub color: Color4,
    /// Color increment per update.
    pub color_delta: Color4,
    /// Copied from the config at spawn.
    pub radial_acceleration: f32,
    /// Copied from the config at spawn.
    pub tangential_acceleration: f32,
    /// Orbit radius (radial mode).
    pub radius: f32,
    /// Radius decrement per update (radial mode).
    pub radius_delta: f32,
    /// Orbit angle in radians (radial mode).
    pub angle: f32,
    /// Orbit speed in radians per second (radial mode).
    pub angular_velocity: f32,
    /// Current size. May go negative; render records clamp it to zero.
    pub size: f32,
    /// Size increment per update.
    pub size_delta: f32,
    /// Remaining lifetime in seconds. `<= 0` means dead.
    pub time_to_live: f32,
}

impl Particle {
    /// Is this particle alive?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.time_to_live > 0.0
    }
}
