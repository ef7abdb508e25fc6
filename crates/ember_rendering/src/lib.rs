//! # EMBER Rendering Boundary
//!
//! Everything between the emitter's render records and a real renderer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PointSprite[] → SpriteBatch (offset, u8 colors) → Adapter  │
//! │  BlendFunc (GL enums) → BlendState → Adapter                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - No graphics API dependency
//! - Blend values and texture names pass through untouched
//! - Batches are reused, so steady-state rendering does not allocate

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod adapter;
pub mod batch;
pub mod blend;

pub use adapter::{DrawCall, EmitterRenderer, RecordingAdapter, RenderAdapter};
pub use batch::{color_to_bytes, DrawOffset, SpriteBatch, SpriteVertex};
pub use blend::{BlendFactor, BlendMode, BlendState};
