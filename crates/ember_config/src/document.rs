//! # Emitter Document
//!
//! On-disk shape of an emitter, in particle-designer vocabulary.
//!
//! ```toml
//! emitter_type = 0
//! max_particles = 500
//! particle_lifespan = 1.5
//! duration = -1.0
//!
//! [source_position]
//! x = 160.0
//! y = 240.0
//!
//! [start_color]
//! red = 1.0
//! green = 0.5
//! blue = 0.1
//! alpha = 1.0
//!
//! [blend]
//! source = 770
//! destination = 1
//!
//! [texture]
//! name = "spark.png"
//! ```
//!
//! Every field is optional. Missing fields take the values of
//! [`EmitterConfig::default`].

use ember_core::{BlendFunc, Color4, EmitterConfig, EmitterKind, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// `{ x, y, z }` table.
///
/// Components left out of a table keep the value of the field they
/// override, so `[gravity] y = -10` leaves x and z at their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorDoc {
    /// X component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Y component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Z component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl VectorDoc {
    /// Fills missing components from `base`.
    #[must_use]
    pub fn or(self, base: Vec3) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(base.x),
            self.y.unwrap_or(base.y),
            self.z.unwrap_or(base.z),
        )
    }
}

impl From<Vec3> for VectorDoc {
    fn from(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }
}

/// `{ red, green, blue, alpha }` table. Channels are nominally `0..=1`.
///
/// Missing channels keep the value of the color they override.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorDoc {
    /// Red channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<f32>,
    /// Green channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<f32>,
    /// Blue channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<f32>,
    /// Alpha channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

impl ColorDoc {
    /// Fills missing channels from `base`.
    #[must_use]
    pub fn or(self, base: Color4) -> Color4 {
        Color4::new(
            self.red.unwrap_or(base.r),
            self.green.unwrap_or(base.g),
            self.blue.unwrap_or(base.b),
            self.alpha.unwrap_or(base.a),
        )
    }
}

impl From<Color4> for ColorDoc {
    fn from(c: Color4) -> Self {
        Self {
            red: Some(c.r),
            green: Some(c.g),
            blue: Some(c.b),
            alpha: Some(c.a),
        }
    }
}

/// `{ source, destination }` GL blend enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendDoc {
    /// Source factor.
    pub source: u32,
    /// Destination factor.
    pub destination: u32,
}

impl Default for BlendDoc {
    fn default() -> Self {
        BlendFunc::default().into()
    }
}

impl From<BlendFunc> for BlendDoc {
    fn from(b: BlendFunc) -> Self {
        Self {
            source: b.source,
            destination: b.destination,
        }
    }
}

/// `{ name, data }` texture table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureDoc {
    /// Texture handle, resolved by the render adapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Inline encoded image. Not supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Complete emitter document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterDocument {
    /// 0 = gravity, 1 = radial.
    pub emitter_type: i64,
    /// Pool capacity.
    pub max_particles: usize,
    /// Emission duration in seconds, `-1` for forever.
    pub duration: f32,
    /// Initial speed.
    pub speed: f32,
    /// Speed variance.
    pub speed_variance: f32,
    /// Emission angle in degrees.
    pub angle: f32,
    /// Emission angle variance in degrees.
    pub angle_variance: f32,
    /// Lifespan in seconds.
    pub particle_lifespan: f32,
    /// Lifespan variance in seconds.
    pub particle_lifespan_variance: f32,
    /// Gravity-mode radial acceleration.
    pub radial_acceleration: f32,
    /// Carried, not sampled.
    pub radial_accel_variance: f32,
    /// Gravity-mode tangential acceleration.
    pub tangential_acceleration: f32,
    /// Carried, not sampled.
    pub tangential_accel_variance: f32,
    /// Birth size.
    pub start_particle_size: f32,
    /// Birth size variance.
    pub start_particle_size_variance: f32,
    /// Death size.
    pub finish_particle_size: f32,
    /// Death size variance.
    pub finish_particle_size_variance: f32,
    /// Radial-mode starting radius.
    pub max_radius: f32,
    /// Radial-mode starting radius variance.
    pub max_radius_variance: f32,
    /// Carried, unused by either motion model.
    pub radius_speed: f32,
    /// Radial-mode death radius.
    pub min_radius: f32,
    /// Radial-mode orbit speed in degrees per second.
    pub rotate_per_second: f32,
    /// Orbit speed variance.
    pub rotate_per_second_variance: f32,
    /// Spawn origin.
    pub source_position: VectorDoc,
    /// Spawn jitter.
    pub source_position_variance: VectorDoc,
    /// Gravity-mode constant acceleration.
    pub gravity: VectorDoc,
    /// Birth color.
    pub start_color: ColorDoc,
    /// Birth color variance.
    pub start_color_variance: ColorDoc,
    /// Death color.
    pub finish_color: ColorDoc,
    /// Death color variance.
    pub finish_color_variance: ColorDoc,
    /// Blend enums.
    pub blend: BlendDoc,
    /// Texture reference.
    pub texture: TextureDoc,
}

impl Default for EmitterDocument {
    fn default() -> Self {
        Self::from(&EmitterConfig::default())
    }
}

impl From<&EmitterConfig> for EmitterDocument {
    fn from(c: &EmitterConfig) -> Self {
        Self {
            emitter_type: c.kind.to_raw(),
            max_particles: c.max_particles,
            duration: c.duration,
            speed: c.speed,
            speed_variance: c.speed_variance,
            angle: c.angle,
            angle_variance: c.angle_variance,
            particle_lifespan: c.particle_lifespan,
            particle_lifespan_variance: c.particle_lifespan_variance,
            radial_acceleration: c.radial_acceleration,
            radial_accel_variance: c.radial_accel_variance,
            tangential_acceleration: c.tangential_acceleration,
            tangential_accel_variance: c.tangential_accel_variance,
            start_particle_size: c.start_particle_size,
            start_particle_size_variance: c.start_particle_size_variance,
            finish_particle_size: c.finish_particle_size,
            finish_particle_size_variance: c.finish_particle_size_variance,
            max_radius: c.max_radius,
            max_radius_variance: c.max_radius_variance,
            radius_speed: c.radius_speed,
            min_radius: c.min_radius,
            rotate_per_second: c.rotate_per_second,
            rotate_per_second_variance: c.rotate_per_second_variance,
            source_position: c.source_position.into(),
            source_position_variance: c.source_position_variance.into(),
            gravity: c.gravity.into(),
            start_color: c.start_color.into(),
            start_color_variance: c.start_color_variance.into(),
            finish_color: c.finish_color.into(),
            finish_color_variance: c.finish_color_variance.into(),
            blend: c.blend.into(),
            texture: TextureDoc {
                name: c.texture.clone(),
                data: None,
            },
        }
    }
}

impl EmitterDocument {
    /// Validates the document and builds the engine config.
    ///
    /// Partial `{x, y, z}` and color tables are filled from
    /// [`EmitterConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn into_config(self) -> ConfigResult<EmitterConfig> {
        let kind = EmitterKind::from_raw(self.emitter_type).ok_or_else(|| {
            invalid(
                "emitter_type",
                format!("expected 0 (gravity) or 1 (radial), got {}", self.emitter_type),
            )
        })?;
        if self.texture.data.is_some() {
            return Err(invalid(
                "texture.data",
                "inline texture data is not supported, use texture.name",
            ));
        }

        let base = EmitterConfig::default();
        let config = EmitterConfig {
            kind,
            source_position: self.source_position.or(base.source_position),
            source_position_variance: self
                .source_position_variance
                .or(base.source_position_variance),
            speed: self.speed,
            speed_variance: self.speed_variance,
            angle: self.angle,
            angle_variance: self.angle_variance,
            particle_lifespan: self.particle_lifespan,
            particle_lifespan_variance: self.particle_lifespan_variance,
            gravity: self.gravity.or(base.gravity),
            radial_acceleration: self.radial_acceleration,
            radial_accel_variance: self.radial_accel_variance,
            tangential_acceleration: self.tangential_acceleration,
            tangential_accel_variance: self.tangential_accel_variance,
            start_color: self.start_color.or(base.start_color),
            start_color_variance: self.start_color_variance.or(base.start_color_variance),
            finish_color: self.finish_color.or(base.finish_color),
            finish_color_variance: self.finish_color_variance.or(base.finish_color_variance),
            start_particle_size: self.start_particle_size,
            start_particle_size_variance: self.start_particle_size_variance,
            finish_particle_size: self.finish_particle_size,
            finish_particle_size_variance: self.finish_particle_size_variance,
            max_particles: self.max_particles,
            duration: self.duration,
            max_radius: self.max_radius,
            max_radius_variance: self.max_radius_variance,
            radius_speed: self.radius_speed,
            min_radius: self.min_radius,
            rotate_per_second: self.rotate_per_second,
            rotate_per_second_variance: self.rotate_per_second_variance,
            blend: BlendFunc {
                source: self.blend.source,
                destination: self.blend.destination,
            },
            texture: self.texture.name,
        };

        validate(&config)?;
        Ok(config)
    }
}

/// Checks everything the engine assumes but does not check itself.
fn validate(config: &EmitterConfig) -> ConfigResult<()> {
    if config.max_particles == 0 {
        return Err(invalid("max_particles", "must be greater than zero"));
    }

    for (field, value) in scalars(config) {
        if !value.is_finite() {
            return Err(invalid(field, format!("must be finite, got {value}")));
        }
    }

    if config.particle_lifespan <= 0.0 {
        return Err(invalid(
            "particle_lifespan",
            format!("must be positive, got {}", config.particle_lifespan),
        ));
    }
    if config.duration < 0.0 && config.has_finite_duration() {
        return Err(invalid(
            "duration",
            format!("must be -1 or non-negative, got {}", config.duration),
        ));
    }

    Ok(())
}

/// Every float field with its document name.
fn scalars(c: &EmitterConfig) -> [(&'static str, f32); 46] {
    [
        ("duration", c.duration),
        ("speed", c.speed),
        ("speed_variance", c.speed_variance),
        ("angle", c.angle),
        ("angle_variance", c.angle_variance),
        ("particle_lifespan", c.particle_lifespan),
        ("particle_lifespan_variance", c.particle_lifespan_variance),
        ("radial_acceleration", c.radial_acceleration),
        ("radial_accel_variance", c.radial_accel_variance),
        ("tangential_acceleration", c.tangential_acceleration),
        ("tangential_accel_variance", c.tangential_accel_variance),
        ("start_particle_size", c.start_particle_size),
        ("start_particle_size_variance", c.start_particle_size_variance),
        ("finish_particle_size", c.finish_particle_size),
        ("finish_particle_size_variance", c.finish_particle_size_variance),
        ("max_radius", c.max_radius),
        ("max_radius_variance", c.max_radius_variance),
        ("radius_speed", c.radius_speed),
        ("min_radius", c.min_radius),
        ("rotate_per_second", c.rotate_per_second),
        ("rotate_per_second_variance", c.rotate_per_second_variance),
        ("source_position.x", c.source_position.x),
        ("source_position.y", c.source_position.y),
        ("source_position.z", c.source_position.z),
        ("source_position_variance.x", c.source_position_variance.x),
        ("source_position_variance.y", c.source_position_variance.y),
        ("source_position_variance.z", c.source_position_variance.z),
        ("gravity.x", c.gravity.x),
        ("gravity.y", c.gravity.y),
        ("gravity.z", c.gravity.z),
        ("start_color.red", c.start_color.r),
        ("start_color.green", c.start_color.g),
        ("start_color.blue", c.start_color.b),
        ("start_color.alpha", c.start_color.a),
        ("start_color_variance.red", c.start_color_variance.r),
        ("start_color_variance.green", c.start_color_variance.g),
        ("start_color_variance.blue", c.start_color_variance.b),
        ("start_color_variance.alpha", c.start_color_variance.a),
        ("finish_color.red", c.finish_color.r),
        ("finish_color.green", c.finish_color.g),
        ("finish_color.blue", c.finish_color.b),
        ("finish_color.alpha", c.finish_color.a),
        ("finish_color_variance.red", c.finish_color_variance.r),
        ("finish_color_variance.green", c.finish_color_variance.g),
        ("finish_color_variance.blue", c.finish_color_variance.b),
        ("finish_color_variance.alpha", c.finish_color_variance.a),
    ]
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
