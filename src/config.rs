//! Render configuration loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! fill_ratio = 0.9
//! light_direction = [0.0, 0.0, 1.0]
//! rasterizer = "barycentric_depth"   # or "scanline_pair"
//! background = [0, 0, 0]
//! wireframe = false
//! wireframe_color = [255, 255, 255]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::light::DirectionalLight;
use crate::render::RasterizerType;
use crate::transform::DEFAULT_FILL_RATIO;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Fraction of the viewport height the mesh spans.
    pub fill_ratio: f32,
    /// Direction toward the light. Normalized when the renderer resets.
    pub light_direction: [f32; 3],
    pub rasterizer: RasterizerType,
    /// Clear color, RGB.
    pub background: [u8; 3],
    /// Stroke the edges of every visible triangle after filling.
    pub wireframe: bool,
    pub wireframe_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        let toward_viewer = DirectionalLight::TOWARD_VIEWER.direction();
        Self {
            fill_ratio: DEFAULT_FILL_RATIO,
            light_direction: [toward_viewer.x, toward_viewer.y, toward_viewer.z],
            rasterizer: RasterizerType::default(),
            background: [0, 0, 0],
            wireframe: false,
            wireframe_color: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded render config from {}: {config:?}", path.as_ref().display());
        Ok(config)
    }

    pub fn light(&self) -> DirectionalLight {
        DirectionalLight::new(self.light_direction.into())
    }
}
