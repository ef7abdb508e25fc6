//! The two motion models.

use crate::math::Vec3;
use crate::particle::Particle;

/// Orbit step: advance the angle, shrink the radius, place the particle on
/// the circle around `source`.
///
/// Forces `time_to_live` to zero once the radius drops below `min_radius`.
/// The particle still renders this frame and is removed on the next update.
#[inline]
pub(crate) fn step_radial(particle: &mut Particle, source: Vec3, min_radius: f32, dt: f32) {
    particle.angle += particle.angular_velocity * dt;
    particle.radius -= particle.radius_delta;

    particle.position = Vec3::new(
        source.x - particle.angle.cos() * particle.radius,
        source.y - particle.angle.sin() * particle.radius,
        source.z,
    );

    if particle.radius < min_radius {
        particle.time_to_live = 0.0;
    }
}

/// Gravity step: radial and tangential acceleration relative to the spawn
/// origin, plus constant gravity, then explicit Euler integration.
#[inline]
#[allow(clippy::float_cmp)]
pub(crate) fn step_gravity(particle: &mut Particle, gravity: Vec3, dt: f32) {
    let origin = particle.start_position;
    let local = particle.position - origin;

    let radial_dir = if local.x != 0.0 || local.y != 0.0 {
        local.normalize()
    } else {
        Vec3::ZERO
    };

    let radial = radial_dir * particle.radial_acceleration;
    let tangential = Vec3::new(-radial_dir.y, radial_dir.x, radial_dir.z) * particle.tangential_acceleration;

    particle.direction += (radial + tangential + gravity) * dt;
    particle.position = (local + particle.direction * dt) + origin;
}
