//! Drawing-surface configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FretError, Result};

pub const DEFAULT_WIDTH: f64 = 1200.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;
/// Display scale applied by the surface; geometry is computed unscaled.
pub const DEFAULT_ZOOM: f64 = 0.8;

/// Size of the logical drawing surface and its display zoom.
///
/// Missing JSON fields take their defaults, so `{"width": 900}` is a
/// valid options object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardOptions {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl Default for FretboardOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl FretboardOptions {
    /// Defaults with the given size. Non-positive values (0.0 from FFI)
    /// keep the default for that dimension.
    pub fn with_size(width: f64, height: f64) -> Self {
        let mut opts = Self::default();
        if width > 0.0 {
            opts.width = width;
        }
        if height > 0.0 {
            opts.height = height;
        }
        opts
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| FretError::InvalidOptions(format!("{e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height), ("zoom", self.zoom)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FretError::InvalidOptions(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
