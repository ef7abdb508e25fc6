//! # EMBER
//!
//! CPU particle emitters, integrating all units.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                              EMBER                                │
//! ├───────────────────────────────────────────────────────────────────┤
//! │                                                                   │
//! │  ┌───────────────┐     ┌───────────────┐     ┌───────────────┐    │
//! │  │ ember_config  │────>│  ember_core   │────>│ember_rendering│    │
//! │  │               │     │               │     │               │    │
//! │  │ • TOML docs   │     │ • Pool        │     │ • Blend decode│    │
//! │  │ • Validation  │     │ • Spawn       │     │ • SpriteBatch │    │
//! │  │               │     │ • Motion      │     │ • Adapter     │    │
//! │  └───────────────┘     └───────┬───────┘     └───────────────┘    │
//! │                                │                                  │
//! │                        ┌───────┴───────┐                          │
//! │                        │  FrameClock   │                          │
//! │                        │ (delta time)  │                          │
//! │                        └───────────────┘                          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `clock`: Frame timing for `update`

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;

// Re-export the units
pub use ember_config as config;
pub use ember_core as core;
pub use ember_rendering as rendering;

// Re-export commonly used types
pub use clock::FrameClock;
pub use ember_core::{EmitterConfig, ParticleEmitter, ParticleSimulation};
