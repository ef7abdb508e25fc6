//! Sprite batch packing.
//!
//! Turns the emitter's render records into upload-ready vertices:
//! translated by the draw offset, colors scaled to 8 bits.
//!
//! The core keeps colors as unclamped floats. This is the only place they
//! are clamped.

use bytemuck::{Pod, Zeroable};
use ember_core::{Color4, EmitterConfig, PointSprite};

use crate::blend::BlendState;

/// Screen-space translation applied to every sprite in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOffset {
    /// X translation
    pub x: f32,
    /// Y translation
    pub y: f32,
}

impl DrawOffset {
    /// Creates an offset.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One point sprite as uploaded.
///
/// 20 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Translated position
    pub position: [f32; 3],
    /// Point size
    pub size: f32,
    /// RGBA, 0..=255
    pub color: [u8; 4],
}

impl SpriteVertex {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Packs a render record.
    #[inline]
    #[must_use]
    pub fn from_sprite(sprite: &PointSprite, offset: DrawOffset) -> Self {
        Self {
            position: [sprite.x + offset.x, sprite.y + offset.y, sprite.z],
            size: sprite.size,
            color: color_to_bytes(sprite.color),
        }
    }
}

/// Scales a float color to 8 bits per channel, clamping out-of-range values.
///
/// Channels truncate toward zero (`0.5` becomes 127). NaN channels become 0.
#[inline]
#[must_use]
pub fn color_to_bytes(color: Color4) -> [u8; 4] {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    ]
}

/// Vertices plus the state needed to draw them.
#[derive(Debug, Clone, Default)]
pub struct SpriteBatch {
    vertices: Vec<SpriteVertex>,
    blend: BlendState,
    texture: Option<String>,
}

impl SpriteBatch {
    /// Creates an empty batch with room for `capacity` sprites.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            blend: BlendState::default(),
            texture: None,
        }
    }

    /// Creates a batch sized and styled for an emitter config.
    #[must_use]
    pub fn for_config(config: &EmitterConfig) -> Self {
        Self {
            vertices: Vec::with_capacity(config.max_particles),
            blend: config.blend.into(),
            texture: config.texture.clone(),
        }
    }

    /// Replaces the contents with `records`, translated by `offset`.
    ///
    /// Does not allocate once the batch has grown to the record count.
    pub fn fill(&mut self, records: &[PointSprite], offset: DrawOffset) {
        self.vertices.clear();
        self.vertices.extend(
            records
                .iter()
                .map(|sprite| SpriteVertex::from_sprite(sprite, offset)),
        );
    }

    /// Packed vertices.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    /// Vertices as bytes for upload.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of sprites.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Nothing to draw?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Blend state for the draw.
    #[inline]
    #[must_use]
    pub const fn blend(&self) -> BlendState {
        self.blend
    }

    /// Texture handle, if any.
    #[inline]
    #[must_use]
    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::BlendMode;
    use ember_core::{BlendFunc, Vec3};

    #[test]
    fn test_vertex_size() {
        assert_eq!(SpriteVertex::SIZE, 20);
    }

    #[test]
    fn test_color_scaling() {
        assert_eq!(color_to_bytes(Color4::WHITE), [255, 255, 255, 255]);
        assert_eq!(color_to_bytes(Color4::TRANSPARENT), [0, 0, 0, 0]);
        assert_eq!(color_to_bytes(Color4::new(0.5, 0.25, 1.0, 0.0)), [127, 63, 255, 0]);
    }

    #[test]
    fn test_color_channels_truncate() {
        // 0.999 * 255 = 254.745
        assert_eq!(color_to_bytes(Color4::new(0.999, 0.002, 0.7, 0.3)), [254, 0, 178, 76]);
    }

    #[test]
    fn test_color_clamped_at_boundary() {
        let wild = Color4::new(1.7, -0.3, f32::NAN, 250.0);
        assert_eq!(color_to_bytes(wild), [255, 0, 0, 255]);
    }

    #[test]
    fn test_fill_applies_offset() {
        let records = [
            PointSprite::new(Vec3::new(1.0, 2.0, 3.0), 4.0, Color4::WHITE),
            PointSprite::new(Vec3::new(-1.0, 0.0, 0.0), 2.0, Color4::TRANSPARENT),
        ];
        let mut batch = SpriteBatch::with_capacity(2);
        batch.fill(&records, DrawOffset::new(100.0, 50.0));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.vertices()[0].position, [101.0, 52.0, 3.0]);
        assert_eq!(batch.vertices()[1].position, [99.0, 50.0, 0.0]);
        assert!((batch.vertices()[0].size - 4.0).abs() < f32::EPSILON);
        assert_eq!(batch.as_bytes().len(), 2 * SpriteVertex::SIZE);
    }

    #[test]
    fn test_refill_replaces_contents() {
        let records = [PointSprite::new(Vec3::ZERO, 1.0, Color4::WHITE); 8];
        let mut batch = SpriteBatch::with_capacity(8);
        batch.fill(&records, DrawOffset::default());
        batch.fill(&records[..3], DrawOffset::default());
        assert_eq!(batch.len(), 3);

        batch.fill(&[], DrawOffset::default());
        assert!(batch.is_empty());
    }

    #[test]
    fn test_for_config_carries_state() {
        let config = EmitterConfig {
            max_particles: 64,
            blend: BlendFunc {
                source: 770,
                destination: 1,
            },
            texture: Some("spark.png".into()),
            ..Default::default()
        };
        let batch = SpriteBatch::for_config(&config);
        assert_eq!(batch.blend().mode(), BlendMode::Additive);
        assert_eq!(batch.texture(), Some("spark.png"));
        assert!(batch.is_empty());
    }
}
