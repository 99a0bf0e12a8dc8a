//! Raster preview configuration.
//!
//! Loaded from a YAML file when `--config` (or `BARBCTL_CONFIG`) is given;
//! every field falls back to its default when absent.
//!
//! ```yaml
//! size: 128
//! scale: 1.25
//! stroke_width: 1.5
//! color: "#1a1a1aff"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const MAX_SIZE: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Width and height of the square output image, in pixels.
    pub size: u32,
    /// Pixels per glyph unit.
    pub scale: f32,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// `#rrggbb` or `#rrggbbaa`.
    pub color: String,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            size: 128,
            scale: 1.25,
            stroke_width: 1.5,
            color: "#000000ff".to_string(),
        }
    }
}

impl RasterConfig {
    /// Load and validate a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: RasterConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        debug!(path = %path.display(), ?config, "Loaded raster config");
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(format!("size must be between 1 and {}, got {}", MAX_SIZE, self.size));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!("scale must be positive, got {}", self.scale));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            ));
        }
        self.rgba()?;
        Ok(())
    }

    /// Parse `color` into RGBA components.
    pub fn rgba(&self) -> Result<[u8; 4], String> {
        let hex = self
            .color
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("color must start with '#': {}", self.color))?;

        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("color must be #rrggbb or #rrggbbaa: {}", self.color));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| format!("invalid color {}: {}", self.color, e))
        };
        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok([channel(0)?, channel(1)?, channel(2)?, alpha])
    }
}
