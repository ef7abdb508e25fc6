//! The render adapter boundary.
//!
//! ```text
//! ParticleSimulation ──render_records()──► EmitterRenderer
//!                                              │ fill(offset)
//!                                              ▼
//!                                          SpriteBatch ──draw()──► RenderAdapter
//! ```
//!
//! Adapters own the graphics device and resolve texture handles. Nothing
//! here touches a GPU.

use ember_core::{EmitterConfig, ParticleSimulation};
use tracing::trace;

use crate::batch::{DrawOffset, SpriteBatch};
use crate::blend::BlendState;

/// Something that can draw a sprite batch.
pub trait RenderAdapter {
    /// Draws every sprite in `batch` with its blend state and texture.
    fn draw(&mut self, batch: &SpriteBatch);
}

/// Per-emitter draw state: the reusable batch plus where to draw it.
#[derive(Debug, Clone)]
pub struct EmitterRenderer {
    batch: SpriteBatch,
    offset: DrawOffset,
}

impl EmitterRenderer {
    /// Creates a renderer for an emitter configured with `config`.
    #[must_use]
    pub fn new(config: &EmitterConfig) -> Self {
        Self {
            batch: SpriteBatch::for_config(config),
            offset: DrawOffset::default(),
        }
    }

    /// Sets the translation applied to all sprites.
    pub fn set_offset(&mut self, offset: DrawOffset) {
        self.offset = offset;
    }

    /// Current translation.
    #[must_use]
    pub const fn offset(&self) -> DrawOffset {
        self.offset
    }

    /// Packs the simulation's current records and hands them to `adapter`.
    ///
    /// Empty frames are skipped. Returns the number of sprites drawn.
    pub fn render<S, A>(&mut self, simulation: &S, adapter: &mut A) -> usize
    where
        S: ParticleSimulation + ?Sized,
        A: RenderAdapter + ?Sized,
    {
        self.batch.fill(simulation.render_records(), self.offset);
        if self.batch.is_empty() {
            return 0;
        }
        trace!(sprites = self.batch.len(), "drawing emitter batch");
        adapter.draw(&self.batch);
        self.batch.len()
    }

    /// The batch from the last render.
    #[must_use]
    pub const fn batch(&self) -> &SpriteBatch {
        &self.batch
    }
}

/// One draw as seen by a [`RecordingAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Sprites in the batch
    pub sprite_count: usize,
    /// Uploaded bytes
    pub byte_len: usize,
    /// Blend state
    pub blend: BlendState,
    /// Texture handle
    pub texture: Option<String>,
}

/// Adapter that only records what it was asked to draw.
///
/// Used by headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    calls: Vec<DrawCall>,
}

impl RecordingAdapter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every draw so far.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Total sprites across all draws.
    #[must_use]
    pub fn total_sprites(&self) -> usize {
        self.calls.iter().map(|call| call.sprite_count).sum()
    }

    /// Forgets recorded draws.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderAdapter for RecordingAdapter {
    fn draw(&mut self, batch: &SpriteBatch) {
        self.calls.push(DrawCall {
            sprite_count: batch.len(),
            byte_len: batch.as_bytes().len(),
            blend: batch.blend(),
            texture: batch.texture().map(str::to_owned),
        });
    }
}
