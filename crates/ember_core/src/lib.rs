//! # EMBER Core Engine
//!
//! CPU-side particle emitter designed for:
//! - Fixed-capacity pools allocated once per configure
//! - O(1) per-particle updates (deltas precomputed at spawn)
//! - Packed render records ready for upload
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in update** - Pool and render buffer are pre-allocated
//! 2. **Dense storage** - Live particles are always packed at the front
//! 3. **Injectable randomness** - Same seed + same deltas = same records
//!
//! ## Example
//!
//! ```rust,ignore
//! use ember_core::{EmitterConfig, ParticleEmitter};
//!
//! let mut emitter = ParticleEmitter::with_seed(42);
//! emitter.configure(EmitterConfig::default())?;
//! emitter.update(1.0 / 60.0);
//! for sprite in emitter.render_records() {
//!     // hand off to the renderer
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod math;
pub mod memory;
pub mod particle;
pub mod random;
pub mod sprite;

pub use config::{BlendFunc, EmitterConfig, INFINITE_DURATION};
pub use emitter::{
    EmitterStats, ParticleEmitter, ParticleSimulation, FIXED_TICK_SECONDS, SAMPLES_PER_PARTICLE,
};
pub use error::{EmberError, EmberResult};
pub use math::{Color4, Vec3};
pub use memory::ParticlePool;
pub use particle::{EmitterKind, Particle};
pub use random::{ChaChaSource, RandomSource, ReplaySource};
pub use sprite::PointSprite;
