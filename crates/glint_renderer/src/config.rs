//! Render configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bounce limit. It only guarantees termination (two facing mirrors
/// would otherwise bounce forever) and has no physical meaning.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("samples per pixel must be positive")]
    NoSamples,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth; 0 renders every hit black
    pub max_depth: u32,
    /// Seed for the render's random stream
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            samples_per_pixel: 100,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        Ok(())
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// A fresh generator seeded from `seed`.
    pub fn seeded_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
