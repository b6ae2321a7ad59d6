//! Render and camera settings.
//!
//! Both structs deserialize with per-field defaults, so a config file only
//! needs the values it changes:
//!
//! ```json
//! {
//!   "render": { "width": 400, "samples_per_pixel": 50 },
//!   "camera": { "look_from": [-2.0, 2.0, 1.0], "vfov": 20.0 }
//! }
//! ```

use crate::error::{RenderError, RenderResult};
use rtw_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `max_depth`; each bounce is one level of recursion.
pub const MAX_DEPTH_LIMIT: u32 = 1000;

/// Image and integrator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Jittered samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of bounces before a path is cut off as black
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 10,
            max_depth: 20,
        }
    }
}

impl RenderConfig {
    /// Check the settings the integrator relies on.
    ///
    /// Sample coordinates are divided by `dimension - 1`, so both dimensions
    /// must be at least 2.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(RenderError::DepthTooLarge {
                max_depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Where the camera sits and what it sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    /// Eye position
    pub look_from: Point3,
    /// Point the camera looks at
    pub look_at: Point3,
    /// Up hint; only needs to be non-parallel to the view direction
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Viewport width over height
    pub aspect_ratio: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            look_from: Point3::new(-2.0, 2.0, 1.0),
            look_at: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

/// Combined config file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub render: RenderConfig,
    pub camera: CameraPose,
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.render.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (800, 450));
        assert!((config.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_degenerate_settings() {
        let too_narrow = RenderConfig {
            width: 1,
            ..Default::default()
        };
        assert!(matches!(
            too_narrow.validate(),
            Err(RenderError::InvalidDimensions { width: 1, height: 450 })
        ));

        let no_samples = RenderConfig {
            samples_per_pixel: 0,
            ..Default::default()
        };
        assert!(matches!(no_samples.validate(), Err(RenderError::ZeroSamples)));

        let too_deep = RenderConfig {
            max_depth: MAX_DEPTH_LIMIT + 1,
            ..Default::default()
        };
        assert!(matches!(
            too_deep.validate(),
            Err(RenderError::DepthTooLarge { max_depth: 1001, limit: 1000 })
        ));

        let at_limit = RenderConfig {
            max_depth: MAX_DEPTH_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SceneConfig::from_json_str(
            r#"{ "render": { "width": 64, "height": 32 }, "camera": { "vfov": 20.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.render.width, 64);
        assert_eq!(config.render.height, 32);
        assert_eq!(config.render.samples_per_pixel, 10);
        assert_eq!(config.camera.vfov, 20.0);
        assert_eq!(config.camera.look_from, Point3::new(-2.0, 2.0, 1.0));
    }

    #[test]
    fn test_json_vectors_are_arrays() {
        let config =
            SceneConfig::from_json_str(r#"{ "camera": { "look_at": [1.0, 2.0, 3.0] } }"#).unwrap();
        assert_eq!(config.camera.look_at, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(matches!(
            SceneConfig::from_json_str("{ not json"),
            Err(RenderError::Parse(_))
        ));
        assert!(matches!(
            SceneConfig::from_json_str(r#"{ "render": { "height": 0 } }"#),
            Err(RenderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            SceneConfig::from_json_str(r#"{ "render": { "max_depth": 4294967295 } }"#),
            Err(RenderError::DepthTooLarge { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = SceneConfig::from_json_file("/nonexistent/rtw/config.json");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SceneConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
    }
}
