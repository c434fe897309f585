//! Error types for the simulation

use thiserror::Error;

/// Errors raised while building a simulation or feeding it a step
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Letter layout is empty")]
    EmptyLayout,

    #[error("Letter {index} has non-positive width {width}")]
    NonPositiveExtent { index: usize, width: f32 },

    #[error("Letter {index} has invalid trailing space {space}")]
    NegativeSpacing { index: usize, space: f32 },

    #[error("Launcher tolerance must be positive, got {0}")]
    NonPositiveTolerance(f32),

    #[error("Breakpoints out of order: min_y {min_y} must be below max_y {max_y}")]
    InvalidBreakpoints { min_y: f32, max_y: f32 },

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Time delta must be finite and non-negative, got {0}")]
    InvalidTimeDelta(f32),

    #[error("Launcher position must be finite, got {0}")]
    InvalidLauncherPosition(f32),
}

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::ConfigParse(err.to_string())
    }
}
