//! Letter Drop - the ball-through-letters landing page animation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball legs, letter hits, launcher catches)
//! - `config`: Tunable constants, loadable from JSON
//! - `input`: Pointer-to-launcher mapping used by hosts
//! - `error`: Configuration and step-input errors

pub mod config;
pub mod error;
pub mod input;
pub mod sim;

pub use config::SimConfig;
pub use error::{Result, SimError};

/// Defaults taken from the landing page
pub mod consts {
    /// Vertical speed unit: one world unit per frame at 60 fps
    pub const SPEED_SCALE: f32 = 60.0;

    /// Ball rests here on the launcher (falling-leg breakpoint)
    pub const BALL_MIN_Y: f32 = 96.0;
    /// Ball meets the letters here (rising-leg breakpoint)
    pub const BALL_MAX_Y: f32 = 190.0;
    pub const BALL_RADIUS: f32 = 5.0;
    /// Slope multiplier applied on every successful letter hit
    pub const SLOPE_SOFTENER: f32 = 0.2;

    /// Launcher (cylinder lying on its side) length along X
    pub const LAUNCHER_HEIGHT: f32 = 20.0;
    pub const LAUNCHER_Y: f32 = 90.0;
    /// Launcher X at the viewport edges
    pub const LAUNCHER_RANGE: f32 = 90.0;

    /// Baseline of the letter row (layout only)
    pub const LETTER_Y: f32 = 200.0;
}
