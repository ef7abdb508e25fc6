//! # Particle Emitter
//!
//! Owns the particle pool, the render buffer and the config, and drives the
//! per-frame lifecycle:
//!
//! ```text
//! update(dt):
//! ┌──────────────────────────────────────────────────────────────┐
//! │ 1. EMIT      accumulator += dt, spawn while > 1/rate         │
//! │              elapsed += dt, stop emitting past duration      │
//! │ 2. INTEGRATE for each live slot i:                           │
//! │              ttl -= dt                                       │
//! │              alive → motion step, color/size step,           │
//! │                      write render record i, i += 1           │
//! │              dead  → last slot moves into i, len -= 1        │
//! │ 3. PUBLISH   render_records() = records[..len]               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A slot freed by a dead particle is refilled from the end of the pool and
//! re-examined at the same index in the same pass, so every live particle is
//! integrated exactly once per update and spawn order is not preserved.

mod motion;
mod spawn;

pub use spawn::SAMPLES_PER_PARTICLE;

use tracing::{debug, info, trace, warn};

use crate::config::EmitterConfig;
use crate::error::{EmberError, EmberResult};
use crate::memory::{try_alloc_slice, ParticlePool};
use crate::particle::{EmitterKind, Particle};
use crate::random::{ChaChaSource, RandomSource};
use crate::sprite::PointSprite;

/// Nominal update interval the per-tick deltas are normalized against.
pub const FIXED_TICK_SECONDS: f32 = 1.0 / 60.0;

/// The capability surface a frame loop drives.
pub trait ParticleSimulation {
    /// Applies a config, (re)allocating all storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is rejected or storage cannot be
    /// allocated.
    fn configure(&mut self, config: EmitterConfig) -> EmberResult<()>;

    /// Advances the simulation by `delta_time` seconds.
    fn update(&mut self, delta_time: f32);

    /// Render records produced by the last update.
    fn render_records(&self) -> &[PointSprite];
}

/// Statistics from the emitter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterStats {
    /// Pool capacity
    pub capacity: usize,
    /// Currently alive particles
    pub alive_count: usize,
    /// Particles spawned during the last update
    pub spawned_this_frame: usize,
    /// Particles removed during the last update
    pub died_this_frame: usize,
    /// Updates since configure
    pub frames: u64,
}

/// A single particle emitter.
///
/// Created empty, sized by [`configure`](Self::configure), then driven by
/// [`update`](Self::update) once per frame.
#[derive(Debug, Clone)]
pub struct ParticleEmitter<R = ChaChaSource> {
    /// Current config (None until configured).
    config: Option<EmitterConfig>,
    /// Live particles packed at the front.
    particles: ParticlePool<Particle>,
    /// One record per live particle, rewritten every update.
    render_buffer: Box<[PointSprite]>,
    /// Seconds of emission so far.
    elapsed_time: f32,
    /// Time owed to the spawner.
    emit_accumulator: f32,
    /// Is emission enabled?
    active: bool,
    /// Variance samples.
    rng: R,
    /// Current statistics.
    stats: EmitterStats,
}

impl ParticleEmitter<ChaChaSource> {
    /// Creates an unconfigured emitter with a seeded ChaCha source.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ChaChaSource::seeded(seed))
    }
}

impl<R: RandomSource> ParticleEmitter<R> {
    /// Creates an unconfigured emitter.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            config: None,
            particles: ParticlePool::empty(),
            render_buffer: Box::default(),
            elapsed_time: 0.0,
            emit_accumulator: 0.0,
            active: false,
            rng,
            stats: EmitterStats::default(),
        }
    }

    /// Applies `config`: allocates the pool and render buffer to
    /// `max_particles`, resets all counters and enables emission.
    ///
    /// Only a zero capacity is rejected; every other field is accepted
    /// as-is. On failure the emitter is left unconfigured.
    ///
    /// # Errors
    ///
    /// - [`EmberError::Configuration`] if `max_particles` is zero
    /// - [`EmberError::Allocation`] if storage cannot be allocated
    pub fn configure(&mut self, config: EmitterConfig) -> EmberResult<()> {
        let capacity = config.max_particles;
        if capacity == 0 {
            self.release();
            return Err(EmberError::Configuration(
                "max_particles must be greater than zero".into(),
            ));
        }

        let storage = ParticlePool::try_new(capacity)
            .and_then(|pool| Ok((pool, try_alloc_slice::<PointSprite>(capacity)?)));
        let (particles, render_buffer) = match storage {
            Ok(storage) => storage,
            Err(err) => {
                warn!("Emitter allocation failed: {}", err);
                self.release();
                return Err(err);
            }
        };

        debug!(
            "Emitter configured: capacity={} kind={:?} lifespan={}s duration={}s",
            capacity, config.kind, config.particle_lifespan, config.duration
        );

        self.particles = particles;
        self.render_buffer = render_buffer;
        self.config = Some(config);
        self.elapsed_time = 0.0;
        self.emit_accumulator = 0.0;
        self.active = true;
        self.stats = EmitterStats {
            capacity,
            ..Default::default()
        };
        Ok(())
    }

    /// Spawns one particle at the end of the live range.
    ///
    /// Returns false without drawing any random samples when the pool is
    /// full or the emitter is unconfigured.
    pub fn try_spawn_one(&mut self) -> bool {
        let Some(config) = self.config.as_ref() else {
            return false;
        };
        if self.particles.is_full() {
            return false;
        }
        let particle = spawn::init_particle(config, &mut self.rng);
        self.particles.push(particle).is_some()
    }

    /// Advances the emitter by `delta_time` seconds.
    ///
    /// Emission runs only while active. Live particles are integrated and
    /// compacted whether or not emission has stopped. Does nothing on an
    /// unconfigured emitter.
    pub fn update(&mut self, delta_time: f32) {
        if self.config.is_none() {
            return;
        }

        self.stats.spawned_this_frame = 0;
        self.stats.died_this_frame = 0;

        if self.active {
            self.emit(delta_time);
        }
        self.integrate(delta_time);

        self.stats.alive_count = self.particles.len();
        self.stats.frames += 1;
        trace!(
            "Emitter frame {}: alive={} spawned={} died={}",
            self.stats.frames,
            self.stats.alive_count,
            self.stats.spawned_this_frame,
            self.stats.died_this_frame
        );
    }

    /// Spawns what the accumulator owes and applies the duration cutoff.
    fn emit(&mut self, delta_time: f32) {
        let Some(config) = self.config.as_ref() else {
            return;
        };
        let emission_rate = config.emission_rate();
        if emission_rate <= 0.0 || emission_rate.is_nan() {
            return;
        }
        let interval = 1.0 / emission_rate;
        let has_finite_duration = config.has_finite_duration();
        let duration = config.duration;

        self.emit_accumulator += delta_time;
        while !self.particles.is_full() && self.emit_accumulator > interval {
            if self.try_spawn_one() {
                self.stats.spawned_this_frame += 1;
            }
            self.emit_accumulator -= interval;
        }

        self.elapsed_time += delta_time;
        if has_finite_duration && self.elapsed_time > duration {
            info!(
                "Emitter duration elapsed after {:.3}s, emission stopped",
                self.elapsed_time
            );
            self.active = false;
        }
    }

    /// Single pass: age, move, recolor, emit records, swap out the dead.
    fn integrate(&mut self, delta_time: f32) {
        let Some(config) = self.config.as_ref() else {
            return;
        };

        let mut index = 0;
        while index < self.particles.len() {
            let Some(particle) = self.particles.get_mut(index) else {
                break;
            };
            particle.time_to_live -= delta_time;

            if particle.is_alive() {
                match config.kind {
                    EmitterKind::Radial => motion::step_radial(
                        particle,
                        config.source_position,
                        config.min_radius,
                        delta_time,
                    ),
                    EmitterKind::Gravity => {
                        motion::step_gravity(particle, config.gravity, delta_time);
                    }
                }

                particle.color += particle.color_delta;
                particle.size += particle.size_delta;
                self.render_buffer[index] =
                    PointSprite::new(particle.position, particle.size, particle.color);

                index += 1;
            } else {
                self.particles.swap_remove(index);
                self.stats.died_this_frame += 1;
            }
        }
    }

    /// Render records from the last update, one per live particle.
    ///
    /// Borrowed until the next call that mutates the emitter.
    #[inline]
    #[must_use]
    pub fn render_records(&self) -> &[PointSprite] {
        &self.render_buffer[..self.particles.len()]
    }

    /// Render records as raw bytes for upload.
    #[inline]
    #[must_use]
    pub fn render_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.render_records())
    }

    /// Stops emission. Live particles keep updating until they expire.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Re-enables emission and restarts the duration clock.
    pub fn start(&mut self) {
        if self.config.is_some() {
            self.active = true;
            self.elapsed_time = 0.0;
            self.emit_accumulator = 0.0;
        }
    }

    /// Releases the pool and render buffer. The emitter can be configured
    /// again afterwards.
    pub fn teardown(&mut self) {
        if self.config.is_some() {
            debug!("Emitter torn down: {} particles dropped", self.particles.len());
        }
        self.release();
    }

    fn release(&mut self) {
        self.config = None;
        self.particles = ParticlePool::empty();
        self.render_buffer = Box::default();
        self.elapsed_time = 0.0;
        self.emit_accumulator = 0.0;
        self.active = false;
        self.stats = EmitterStats::default();
    }

    /// Live particles, packed at the front of the pool.
    #[inline]
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// Number of live particles.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.particles.len()
    }

    /// Pool capacity (zero when unconfigured).
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    /// Is emission enabled?
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Has a config been applied?
    #[inline]
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Seconds of emission since configure or start.
    #[inline]
    #[must_use]
    pub const fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// The applied config.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Option<&EmitterConfig> {
        self.config.as_ref()
    }

    /// Returns current statistics
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> EmitterStats {
        self.stats
    }
}

impl<R: RandomSource> ParticleSimulation for ParticleEmitter<R> {
    fn configure(&mut self, config: EmitterConfig) -> EmberResult<()> {
        ParticleEmitter::configure(self, config)
    }

    fn update(&mut self, delta_time: f32) {
        ParticleEmitter::update(self, delta_time);
    }

    fn render_records(&self) -> &[PointSprite] {
        ParticleEmitter::render_records(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Color4, Vec3};
    use crate::random::ReplaySource;

    fn emitter(config: EmitterConfig) -> ParticleEmitter<ReplaySource> {
        let mut emitter = ParticleEmitter::new(ReplaySource::constant(0.0));
        emitter.configure(config).unwrap();
        emitter
    }

    #[test]
    fn test_configure_allocates_and_resets() {
        let e = emitter(EmitterConfig {
            max_particles: 64,
            ..Default::default()
        });
        assert!(e.is_configured());
        assert!(e.is_active());
        assert_eq!(e.capacity(), 64);
        assert_eq!(e.active_count(), 0);
        assert_eq!(e.elapsed_time(), 0.0);
        assert!(e.render_records().is_empty());
    }

    #[test]
    fn test_configure_zero_capacity_rejected() {
        let mut e = ParticleEmitter::with_seed(1);
        let err = e
            .configure(EmitterConfig {
                max_particles: 0,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, EmberError::Configuration(_)));
        assert!(!e.is_configured());
    }

    #[test]
    fn test_configure_impossible_capacity_is_allocation_error() {
        let mut e = ParticleEmitter::with_seed(1);
        let err = e
            .configure(EmitterConfig {
                max_particles: usize::MAX / 2,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, EmberError::Allocation { .. }));
        assert!(!e.is_configured());
        assert_eq!(e.capacity(), 0);
    }

    #[test]
    fn test_unconfigured_update_is_noop() {
        let mut e = ParticleEmitter::with_seed(1);
        e.update(1.0);
        assert!(!e.try_spawn_one());
        assert_eq!(e.stats().frames, 0);
    }

    #[test]
    fn test_try_spawn_one_until_full() {
        let mut e = emitter(EmitterConfig {
            max_particles: 3,
            ..Default::default()
        });
        assert!(e.try_spawn_one());
        assert!(e.try_spawn_one());
        assert!(e.try_spawn_one());
        assert!(!e.try_spawn_one());
        assert_eq!(e.active_count(), 3);
    }

    #[test]
    fn test_full_pool_draws_no_samples() {
        let mut e = ParticleEmitter::new(ReplaySource::constant(0.0));
        e.configure(EmitterConfig {
            max_particles: 1,
            ..Default::default()
        })
        .unwrap();
        assert!(e.try_spawn_one());
        assert!(!e.try_spawn_one());
        assert_eq!(e.rng.drawn(), SAMPLES_PER_PARTICLE);
    }

    #[test]
    fn test_emission_is_strictly_greater_than_interval() {
        // rate = 4/s, interval = 0.25
        let mut e = emitter(EmitterConfig {
            max_particles: 4,
            particle_lifespan: 1.0,
            ..Default::default()
        });
        e.update(0.25);
        assert_eq!(e.active_count(), 0);
        e.update(0.25);
        assert_eq!(e.active_count(), 1);
    }

    #[test]
    fn test_burst_fills_pool_once() {
        let mut e = emitter(EmitterConfig {
            max_particles: 5,
            particle_lifespan: 10.0,
            ..Default::default()
        });
        // rate = 0.5/s: 100s owes 49 particles, pool holds 5
        e.update(100.0);
        assert_eq!(e.active_count(), 0, "everything spawned dies in the same pass");
        assert_eq!(e.stats().spawned_this_frame, 5);
        assert_eq!(e.stats().died_this_frame, 5);
    }

    #[test]
    fn test_render_records_follow_particles() {
        let mut e = emitter(EmitterConfig {
            max_particles: 2,
            source_position: Vec3::new(1.0, 2.0, 3.0),
            start_color: Color4::new(0.5, 0.5, 0.5, 1.0),
            finish_color: Color4::new(0.5, 0.5, 0.5, 1.0),
            start_particle_size: 4.0,
            finish_particle_size: 4.0,
            particle_lifespan: 10.0,
            ..Default::default()
        });
        e.try_spawn_one();
        e.update(0.01);

        let records = e.render_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(records[0].size, 4.0);
        assert_eq!(records[0].color, Color4::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(e.render_bytes().len(), PointSprite::SIZE);
    }

    #[test]
    fn test_negative_size_renders_as_zero() {
        let mut e = emitter(EmitterConfig {
            max_particles: 1,
            start_particle_size: 0.0,
            finish_particle_size: -60.0,
            particle_lifespan: 1.0,
            ..Default::default()
        });
        e.try_spawn_one();
        e.update(0.01);

        assert!(e.particles()[0].size < 0.0);
        assert_eq!(e.render_records()[0].size, 0.0);
    }

    #[test]
    fn test_dead_slot_refilled_from_end() {
        let mut e = emitter(EmitterConfig {
            max_particles: 3,
            particle_lifespan: 1.0,
            ..Default::default()
        });
        for _ in 0..3 {
            e.try_spawn_one();
        }
        e.particles.get_mut(0).unwrap().time_to_live = 0.05;
        e.particles.get_mut(1).unwrap().time_to_live = 5.0;
        e.particles.get_mut(2).unwrap().time_to_live = 7.0;

        e.update(0.1);

        // Slot 0 died, slot 2 moved into it and was integrated once
        let ttls: Vec<f32> = e.particles().iter().map(|p| p.time_to_live).collect();
        assert_eq!(e.active_count(), 2);
        assert!((ttls[0] - 6.9).abs() < 1e-5);
        assert!((ttls[1] - 4.9).abs() < 1e-5);
        assert_eq!(e.stats().died_this_frame, 1);
    }

    #[test]
    fn test_stop_keeps_particles_updating() {
        let mut e = emitter(EmitterConfig {
            max_particles: 10,
            particle_lifespan: 1.0,
            ..Default::default()
        });
        e.update(0.35);
        let alive = e.active_count();
        assert!(alive > 0);

        e.stop();
        assert!(!e.is_active());
        e.update(0.1);
        assert_eq!(e.active_count(), alive);
        assert_eq!(e.stats().spawned_this_frame, 0);

        e.update(2.0);
        assert_eq!(e.active_count(), 0);
    }

    #[test]
    fn test_start_restarts_duration_clock() {
        let mut e = emitter(EmitterConfig {
            max_particles: 10,
            duration: 0.5,
            ..Default::default()
        });
        e.update(0.6);
        assert!(!e.is_active());

        e.start();
        assert!(e.is_active());
        assert_eq!(e.elapsed_time(), 0.0);
    }

    #[test]
    fn test_teardown_releases_storage() {
        let mut e = emitter(EmitterConfig::default());
        e.update(0.5);
        e.teardown();

        assert!(!e.is_configured());
        assert_eq!(e.capacity(), 0);
        assert!(e.render_records().is_empty());

        // Can be configured again
        e.configure(EmitterConfig::default()).unwrap();
        assert_eq!(e.capacity(), 100);
    }

    #[test]
    fn test_reconfigure_resets_counters() {
        let mut e = emitter(EmitterConfig::default());
        e.update(0.5);
        assert!(e.active_count() > 0);

        e.configure(EmitterConfig {
            max_particles: 8,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(e.active_count(), 0);
        assert_eq!(e.capacity(), 8);
        assert_eq!(e.stats().frames, 0);
    }

    #[test]
    fn test_trait_object_drives_emitter() {
        let mut e = ParticleEmitter::with_seed(9);
        let sim: &mut dyn ParticleSimulation = &mut e;
        sim.configure(EmitterConfig::default()).unwrap();
        sim.update(0.5);
        assert!(!sim.render_records().is_empty());
    }
}
