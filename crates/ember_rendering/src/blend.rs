//! Blend state decoding.
//!
//! Emitter documents carry blend factors as raw GL enum values. They are
//! decoded here for adapters that want a typed factor, but never rejected:
//! anything unknown survives as [`BlendFactor::Raw`].
//!
//! Common pairs:
//! ```text
//! additive:       SRC_ALPHA + ONE
//! alpha blend:    SRC_ALPHA + ONE_MINUS_SRC_ALPHA
//! premultiplied:  ONE       + ONE_MINUS_SRC_ALPHA
//! ```

use ember_core::BlendFunc;

const GL_ZERO: u32 = 0;
const GL_ONE: u32 = 1;
const GL_SRC_COLOR: u32 = 0x0300;
const GL_ONE_MINUS_SRC_COLOR: u32 = 0x0301;
const GL_SRC_ALPHA: u32 = 0x0302;
const GL_ONE_MINUS_SRC_ALPHA: u32 = 0x0303;
const GL_DST_ALPHA: u32 = 0x0304;
const GL_ONE_MINUS_DST_ALPHA: u32 = 0x0305;
const GL_DST_COLOR: u32 = 0x0306;
const GL_ONE_MINUS_DST_COLOR: u32 = 0x0307;

/// Blend factor (mirrors GL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// 0
    Zero,
    /// 1
    One,
    /// src.rgb
    SrcColor,
    /// 1 - src.rgb
    OneMinusSrcColor,
    /// src.a
    SrcAlpha,
    /// 1 - src.a
    OneMinusSrcAlpha,
    /// dst.a
    DstAlpha,
    /// 1 - dst.a
    OneMinusDstAlpha,
    /// dst.rgb
    DstColor,
    /// 1 - dst.rgb
    OneMinusDstColor,
    /// Unrecognized enum value, passed through as-is.
    Raw(u32),
}

impl BlendFactor {
    /// Decodes a GL enum value.
    #[must_use]
    pub const fn from_gl(value: u32) -> Self {
        match value {
            GL_ZERO => Self::Zero,
            GL_ONE => Self::One,
            GL_SRC_COLOR => Self::SrcColor,
            GL_ONE_MINUS_SRC_COLOR => Self::OneMinusSrcColor,
            GL_SRC_ALPHA => Self::SrcAlpha,
            GL_ONE_MINUS_SRC_ALPHA => Self::OneMinusSrcAlpha,
            GL_DST_ALPHA => Self::DstAlpha,
            GL_ONE_MINUS_DST_ALPHA => Self::OneMinusDstAlpha,
            GL_DST_COLOR => Self::DstColor,
            GL_ONE_MINUS_DST_COLOR => Self::OneMinusDstColor,
            other => Self::Raw(other),
        }
    }

    /// The GL enum value this factor came from.
    #[must_use]
    pub const fn to_gl(self) -> u32 {
        match self {
            Self::Zero => GL_ZERO,
            Self::One => GL_ONE,
            Self::SrcColor => GL_SRC_COLOR,
            Self::OneMinusSrcColor => GL_ONE_MINUS_SRC_COLOR,
            Self::SrcAlpha => GL_SRC_ALPHA,
            Self::OneMinusSrcAlpha => GL_ONE_MINUS_SRC_ALPHA,
            Self::DstAlpha => GL_DST_ALPHA,
            Self::OneMinusDstAlpha => GL_ONE_MINUS_DST_ALPHA,
            Self::DstColor => GL_DST_COLOR,
            Self::OneMinusDstColor => GL_ONE_MINUS_DST_COLOR,
            Self::Raw(value) => value,
        }
    }
}

/// Coarse classification of a blend pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Destination factor ONE - glow, no sorting needed
    Additive,
    /// `SRC_ALPHA + ONE_MINUS_SRC_ALPHA`
    AlphaBlend,
    /// `ONE + ONE_MINUS_SRC_ALPHA`
    Premultiplied,
    /// Anything else
    Custom,
}

/// Decoded source/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendState {
    /// Source factor
    pub source: BlendFactor,
    /// Destination factor
    pub destination: BlendFactor,
}

impl BlendState {
    /// Classifies the pair.
    #[must_use]
    pub const fn mode(&self) -> BlendMode {
        match (self.source, self.destination) {
            (_, BlendFactor::One) => BlendMode::Additive,
            (BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha) => BlendMode::AlphaBlend,
            (BlendFactor::One, BlendFactor::OneMinusSrcAlpha) => BlendMode::Premultiplied,
            _ => BlendMode::Custom,
        }
    }

    /// Raw values, as stored in the emitter config.
    #[must_use]
    pub const fn to_blend_func(&self) -> BlendFunc {
        BlendFunc {
            source: self.source.to_gl(),
            destination: self.destination.to_gl(),
        }
    }
}

impl From<BlendFunc> for BlendState {
    fn from(func: BlendFunc) -> Self {
        Self {
            source: BlendFactor::from_gl(func.source),
            destination: BlendFactor::from_gl(func.destination),
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        BlendFunc::default().into()
    }
}
