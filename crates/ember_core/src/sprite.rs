//! Render records handed to the render adapter.

use bytemuck::{Pod, Zeroable};

use crate::math::{Color4, Vec3};

/// One renderable point sprite: position, size and color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointSprite {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Z position
    pub z: f32,
    /// Sprite size, never negative
    pub size: f32,
    /// Sprite color (unclamped)
    pub color: Color4,
}

impl PointSprite {
    /// Size of a record in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a record. Negative sizes are clamped to zero.
    #[inline]
    #[must_use]
    pub fn new(position: Vec3, size: f32, color: Color4) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            size: size.max(0.0),
            color,
        }
    }

    /// Position as a vector
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_size() {
        // 4 floats + 4 color channels
        assert_eq!(PointSprite::SIZE, 32);
    }

    #[test]
    fn test_negative_size_clamped() {
        let sprite = PointSprite::new(Vec3::new(1.0, 2.0, 3.0), -4.0, Color4::WHITE);
        assert_eq!(sprite.size, 0.0);
        assert_eq!(sprite.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_cast_to_bytes() {
        let sprites = [PointSprite::default(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&sprites);
        assert_eq!(bytes.len(), 3 * PointSprite::SIZE);
    }
}
