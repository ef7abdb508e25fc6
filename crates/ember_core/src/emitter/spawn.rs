//! Particle initialization from config base values and variances.
//!
//! Samples are drawn in a fixed order so a replayed random source
//! reproduces a particle exactly:
//!
//! ```text
//! position x, y, z | angle | speed | radius | orbit angle | rotation |
//! lifespan | start size | finish size | start rgba | finish rgba
//! ```
//!
//! 3 + 8 + 4 + 4 = 19 samples per particle.

use crate::config::EmitterConfig;
use crate::math::{Color4, Vec3};
use crate::particle::Particle;
use crate::random::RandomSource;

use super::FIXED_TICK_SECONDS;

/// Number of random samples drawn per spawned particle.
pub const SAMPLES_PER_PARTICLE: usize = 19;

#[inline]
fn vary<R: RandomSource>(rng: &mut R, base: f32, variance: f32) -> f32 {
    base + variance * rng.signed_unit()
}

/// Spreads `change` over `lifetime` seconds of fixed ticks.
#[inline]
fn per_tick(change: f32, lifetime: f32) -> f32 {
    (change / lifetime) * FIXED_TICK_SECONDS
}

fn vary_color<R: RandomSource>(rng: &mut R, base: Color4, variance: Color4) -> Color4 {
    Color4::new(
        vary(rng, base.r, variance.r),
        vary(rng, base.g, variance.g),
        vary(rng, base.b, variance.b),
        vary(rng, base.a, variance.a),
    )
}

/// Builds a fresh particle.
///
/// Per-tick deltas are divided by the sampled lifetime; a zero lifetime
/// yields non-finite deltas rather than an error.
pub(crate) fn init_particle<R: RandomSource>(config: &EmitterConfig, rng: &mut R) -> Particle {
    let source = config.source_position;
    let jitter = config.source_position_variance;
    let position = Vec3::new(
        vary(rng, source.x, jitter.x),
        vary(rng, source.y, jitter.y),
        vary(rng, source.z, jitter.z),
    );

    // z takes cos(angle) too. Existing emitter files are tuned against it.
    let direction_angle = vary(rng, config.angle, config.angle_variance).to_radians();
    let heading = Vec3::new(direction_angle.cos(), direction_angle.sin(), direction_angle.cos());
    let speed = vary(rng, config.speed, config.speed_variance);

    let radius = vary(rng, config.max_radius, config.max_radius_variance);
    let radius_delta = per_tick(config.max_radius, config.particle_lifespan);
    let angle = vary(rng, config.angle, config.angle_variance).to_radians();
    let angular_velocity = vary(rng, config.rotate_per_second, config.rotate_per_second_variance).to_radians();

    let time_to_live = vary(rng, config.particle_lifespan, config.particle_lifespan_variance).max(0.0);

    let start_size = vary(rng, config.start_particle_size, config.start_particle_size_variance);
    let finish_size = vary(rng, config.finish_particle_size, config.finish_particle_size_variance);
    let size_delta = per_tick(finish_size - start_size, time_to_live);

    let start = vary_color(rng, config.start_color, config.start_color_variance);
    let end = vary_color(rng, config.finish_color, config.finish_color_variance);
    let color_delta = Color4::new(
        per_tick(end.r - start.r, time_to_live),
        per_tick(end.g - start.g, time_to_live),
        per_tick(end.b - start.b, time_to_live),
        per_tick(end.a - start.a, time_to_live),
    );

    Particle {
        position,
        direction: heading * speed,
        start_position: source,
        color: start,
        color_delta,
        radial_acceleration: config.radial_acceleration,
        tangential_acceleration: config.tangential_acceleration,
        radius,
        radius_delta,
        angle,
        angular_velocity,
        size: start_size.max(0.0),
        size_delta,
        time_to_live,
    }
}
