//! # EMBER Config
//!
//! Loads emitter documents from TOML and turns them into
//! [`ember_core::EmitterConfig`].
//!
//! The engine trusts its config. Everything it would choke on
//! (zero lifespan, NaN speeds, unknown emitter types) is rejected here.
//!
//! ```rust,ignore
//! let config = ember_config::load_from_path("assets/fountain.toml")?;
//! emitter.configure(config)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod error;

use std::path::Path;

use ember_core::EmitterConfig;
use tracing::{debug, warn};

pub use document::{BlendDoc, ColorDoc, EmitterDocument, TextureDoc, VectorDoc};
pub use error::{ConfigError, ConfigResult};

/// Parses and validates an emitter document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::Invalid`] for values the engine cannot run with.
pub fn load_from_str(text: &str) -> ConfigResult<EmitterConfig> {
    let document: EmitterDocument = toml::from_str(text)?;
    match document.into_config() {
        Ok(config) => {
            debug!(
                kind = ?config.kind,
                max_particles = config.max_particles,
                lifespan = config.particle_lifespan,
                "emitter document loaded"
            );
            Ok(config)
        }
        Err(err) => {
            warn!(error = %err, "emitter document rejected");
            Err(err)
        }
    }
}

/// Reads, parses and validates an emitter document from disk.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
/// the same errors as [`load_from_str`].
pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<EmitterConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&text)
}

/// Writes a config back out as a document.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if TOML encoding fails.
pub fn to_toml_string(config: &EmitterConfig) -> ConfigResult<String> {
    Ok(toml::to_string(&EmitterDocument::from(config))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::{Color4, EmitterKind, Vec3};

    const FIRE: &str = r#"
        emitter_type = 0
        max_particles = 500
        duration = -1.0
        speed = 60.0
        speed_variance = 20.0
        angle = 90.0
        angle_variance = 10.0
        particle_lifespan = 1.5
        particle_lifespan_variance = 0.25
        start_particle_size = 32.0
        finish_particle_size = 8.0

        [source_position]
        x = 160.0
        y = 40.0

        [gravity]
        y = 30.0

        [start_color]
        red = 1.0
        green = 0.5
        blue = 0.1
        alpha = 1.0

        [finish_color]
        red = 0.4

        [blend]
        source = 770
        destination = 1

        [texture]
        name = "fire.png"
    "#;

    fn rejected_field(text: &str) -> &'static str {
        match load_from_str(text) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_load_full_document() {
        let config = load_from_str(FIRE).expect("valid document");

        assert_eq!(config.kind, EmitterKind::Gravity);
        assert_eq!(config.max_particles, 500);
        assert!(!config.has_finite_duration());
        assert_eq!(config.source_position, Vec3::new(160.0, 40.0, 0.0));
        assert_eq!(config.gravity, Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(config.start_color, Color4::new(1.0, 0.5, 0.1, 1.0));
        // Only red is given; the rest comes from the default finish color.
        assert_eq!(config.finish_color, Color4::new(0.4, 1.0, 1.0, 0.0));
        assert_eq!(config.blend.source, 770);
        assert_eq!(config.blend.destination, 1);
        assert_eq!(config.texture.as_deref(), Some("fire.png"));
    }

    #[test]
    fn test_empty_document_matches_defaults() {
        let config = load_from_str("").expect("defaults are valid");
        assert_eq!(config, EmitterConfig::default());
    }

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config = load_from_str(
            "[start_color]\nred = 0.5\n\n[source_position]\nz = 3.0\n\n[finish_color_variance]\nblue = 0.2",
        )
        .expect("valid document");

        assert_eq!(config.start_color, Color4::new(0.5, 1.0, 1.0, 1.0));
        assert_eq!(config.source_position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(config.finish_color_variance, Color4::new(0.0, 0.0, 0.2, 0.0));
        assert_eq!(config.finish_color, EmitterConfig::default().finish_color);
    }

    #[test]
    fn test_radial_type() {
        let config = load_from_str("emitter_type = 1\nmin_radius = 4.0").expect("valid");
        assert_eq!(config.kind, EmitterKind::Radial);
        assert!((config.min_radius - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unknown_emitter_type_rejected() {
        assert_eq!(rejected_field("emitter_type = 2"), "emitter_type");
        match load_from_str("emitter_type = -1") {
            Err(ConfigError::Invalid { reason, .. }) => {
                assert_eq!(reason, "expected 0 (gravity) or 1 (radial), got -1");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(rejected_field("max_particles = 0"), "max_particles");
    }

    #[test]
    fn test_non_positive_lifespan_rejected() {
        assert_eq!(rejected_field("particle_lifespan = 0.0"), "particle_lifespan");
        assert_eq!(rejected_field("particle_lifespan = -1.0"), "particle_lifespan");
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert_eq!(rejected_field("speed = nan"), "speed");
        assert_eq!(rejected_field("[gravity]\ny = inf"), "gravity.y");
        assert_eq!(
            rejected_field("[start_color_variance]\nalpha = -inf"),
            "start_color_variance.alpha"
        );
    }

    #[test]
    fn test_negative_duration_other_than_forever_rejected() {
        assert_eq!(rejected_field("duration = -0.5"), "duration");
        assert!(load_from_str("duration = 0.0").is_ok());
        assert!(load_from_str("duration = 3.5").is_ok());
    }

    #[test]
    fn test_inline_texture_data_rejected() {
        assert_eq!(
            rejected_field("[texture]\ndata = \"H4sIAAAAAAAA\""),
            "texture.data"
        );
    }

    #[test]
    fn test_negative_capacity_is_parse_error() {
        assert!(matches!(
            load_from_str("max_particles = -5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ember_config_missing_emitter.toml");
        let err = load_from_path(&path).expect_err("file does not exist");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!(
            "ember_config_fire_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, FIRE).expect("temp dir writable");

        let config = load_from_path(&path).expect("valid document");
        assert_eq!(config.max_particles, 500);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_written_document_loads_back() {
        let original = load_from_str(FIRE).expect("valid document");
        let text = to_toml_string(&original).expect("serializable");
        let reloaded = load_from_str(&text).expect("written document is valid");
        assert_eq!(reloaded, original);
    }
}
