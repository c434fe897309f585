//! Simulation tuning
//!
//! Every constant the bounce depends on, with the landing page's values as
//! defaults. Hosts may ship a JSON file overriding any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Vertical world units per second per unit of direction
    pub speed_scale: f32,

    // === Ball ===
    /// Falling-leg breakpoint (top of the launcher)
    pub min_y: f32,
    /// Rising-leg breakpoint (bottom of the letters)
    pub max_y: f32,
    pub ball_radius: f32,
    /// Slope multiplier after a letter hit, in [0, 1)
    pub slope_softener: f32,

    // === Launcher ===
    /// Full length of the launcher along X
    pub launcher_height: f32,
    pub launcher_y: f32,

    // === Letters ===
    pub letter_y: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            speed_scale: SPEED_SCALE,

            min_y: BALL_MIN_Y,
            max_y: BALL_MAX_Y,
            ball_radius: BALL_RADIUS,
            slope_softener: SLOPE_SOFTENER,

            launcher_height: LAUNCHER_HEIGHT,
            launcher_y: LAUNCHER_Y,

            letter_y: LETTER_Y,
        }
    }
}

impl SimConfig {
    /// Half of the launcher's length along X
    #[inline]
    pub fn launcher_half_height(&self) -> f32 {
        self.launcher_height / 2.0
    }

    /// Max horizontal distance between ball and launcher centers for a catch
    #[inline]
    pub fn catch_tolerance(&self) -> f32 {
        self.launcher_half_height() + self.ball_radius
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed_scale", self.speed_scale),
            ("min_y", self.min_y),
            ("max_y", self.max_y),
            ("ball_radius", self.ball_radius),
            ("slope_softener", self.slope_softener),
            ("launcher_height", self.launcher_height),
            ("launcher_y", self.launcher_y),
            ("letter_y", self.letter_y),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidParameter { name, value });
        }

        if self.speed_scale <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "speed_scale",
                value: self.speed_scale,
            });
        }
        if self.min_y >= self.max_y {
            return Err(SimError::InvalidBreakpoints {
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        if self.ball_radius < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "ball_radius",
                value: self.ball_radius,
            });
        }
        if !(0.0..1.0).contains(&self.slope_softener) {
            return Err(SimError::InvalidParameter {
                name: "slope_softener",
                value: self.slope_softener,
            });
        }
        if self.launcher_height < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "launcher_height",
                value: self.launcher_height,
            });
        }
        if self.catch_tolerance() <= 0.0 {
            return Err(SimError::NonPositiveTolerance(self.catch_tolerance()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing fields fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }
}
