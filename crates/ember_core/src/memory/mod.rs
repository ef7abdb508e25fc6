//! # Memory Management
//!
//! Pre-allocated storage for zero-allocation frames.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once in `configure`. During `update`:
//! - No heap allocations
//! - Dead particles are removed by swapping, not freeing

mod pool;

pub use pool::{try_alloc_slice, ParticlePool};
