//! # Emitter Configuration
//!
//! Base values plus variances for everything a spawned particle samples.
//! Built by an external loader and handed to [`crate::ParticleEmitter::configure`];
//! the emitter owns it afterwards and never mutates it.
//!
//! Angles are in degrees, times in seconds. Every variance is applied as
//! `base + variance * r` with `r` uniform in `[-1, 1]`.

use crate::math::{Color4, Vec3};
use crate::particle::EmitterKind;

/// Sentinel duration meaning "emit forever".
pub const INFINITE_DURATION: f32 = -1.0;

/// `GL_SRC_ALPHA`
const GL_SRC_ALPHA: u32 = 0x0302;
/// `GL_ONE_MINUS_SRC_ALPHA`
const GL_ONE_MINUS_SRC_ALPHA: u32 = 0x0303;

/// Raw blend function values.
///
/// Passed through to the render adapter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendFunc {
    /// Source factor (GL enum value).
    pub source: u32,
    /// Destination factor (GL enum value).
    pub destination: u32,
}

impl Default for BlendFunc {
    fn default() -> Self {
        Self {
            source: GL_SRC_ALPHA,
            destination: GL_ONE_MINUS_SRC_ALPHA,
        }
    }
}

/// Complete emitter description.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Motion model.
    pub kind: EmitterKind,
    /// Spawn origin.
    pub source_position: Vec3,
    /// Per-axis spawn jitter.
    pub source_position_variance: Vec3,
    /// Initial speed.
    pub speed: f32,
    /// Speed variance.
    pub speed_variance: f32,
    /// Emission angle in degrees.
    pub angle: f32,
    /// Emission angle variance in degrees.
    pub angle_variance: f32,
    /// Particle lifespan in seconds. Also drives the emission rate.
    pub particle_lifespan: f32,
    /// Lifespan variance in seconds.
    pub particle_lifespan_variance: f32,
    /// Constant acceleration (gravity mode).
    pub gravity: Vec3,
    /// Acceleration away from the spawn origin (gravity mode).
    pub radial_acceleration: f32,
    /// Parsed but not sampled.
    pub radial_accel_variance: f32,
    /// Acceleration perpendicular to the radial direction (gravity mode).
    pub tangential_acceleration: f32,
    /// Parsed but not sampled.
    pub tangential_accel_variance: f32,
    /// Color at birth.
    pub start_color: Color4,
    /// Per-channel birth color variance.
    pub start_color_variance: Color4,
    /// Color at death.
    pub finish_color: Color4,
    /// Per-channel death color variance.
    pub finish_color_variance: Color4,
    /// Size at birth.
    pub start_particle_size: f32,
    /// Birth size variance.
    pub start_particle_size_variance: f32,
    /// Size at death.
    pub finish_particle_size: f32,
    /// Death size variance.
    pub finish_particle_size_variance: f32,
    /// Pool capacity. Fixed at configure time.
    pub max_particles: usize,
    /// Emission duration in seconds, or [`INFINITE_DURATION`].
    pub duration: f32,
    /// Starting orbit radius (radial mode).
    pub max_radius: f32,
    /// Starting orbit radius variance (radial mode).
    pub max_radius_variance: f32,
    /// Parsed but not used by either motion model.
    pub radius_speed: f32,
    /// Orbit radius below which a particle dies (radial mode).
    pub min_radius: f32,
    /// Orbit speed in degrees per second (radial mode).
    pub rotate_per_second: f32,
    /// Orbit speed variance in degrees per second (radial mode).
    pub rotate_per_second_variance: f32,
    /// Blend function for the render adapter.
    pub blend: BlendFunc,
    /// Opaque texture handle for the render adapter.
    pub texture: Option<String>,
}

impl EmitterConfig {
    /// Does emission stop on its own?
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn has_finite_duration(&self) -> bool {
        self.duration != INFINITE_DURATION
    }

    /// Particles per second: `max_particles / particle_lifespan`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn emission_rate(&self) -> f32 {
        self.max_particles as f32 / self.particle_lifespan
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            kind: EmitterKind::Gravity,
            source_position: Vec3::ZERO,
            source_position_variance: Vec3::ZERO,
            speed: 0.0,
            speed_variance: 0.0,
            angle: 0.0,
            angle_variance: 0.0,
            particle_lifespan: 1.0,
            particle_lifespan_variance: 0.0,
            gravity: Vec3::ZERO,
            radial_acceleration: 0.0,
            radial_accel_variance: 0.0,
            tangential_acceleration: 0.0,
            tangential_accel_variance: 0.0,
            start_color: Color4::WHITE,
            start_color_variance: Color4::TRANSPARENT,
            finish_color: Color4::new(1.0, 1.0, 1.0, 0.0),
            finish_color_variance: Color4::TRANSPARENT,
            start_particle_size: 1.0,
            start_particle_size_variance: 0.0,
            finish_particle_size: 0.0,
            finish_particle_size_variance: 0.0,
            max_particles: 100,
            duration: INFINITE_DURATION,
            max_radius: 0.0,
            max_radius_variance: 0.0,
            radius_speed: 0.0,
            min_radius: 0.0,
            rotate_per_second: 0.0,
            rotate_per_second_variance: 0.0,
            blend: BlendFunc::default(),
            texture: None,
        }
    }
}
