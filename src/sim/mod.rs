//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One transition per host step, driven only by the step inputs
//! - Stable letter order (by layout id)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use autopilot::aim_launcher;
pub use collision::{ball_overlaps_letter, launcher_catches, rebound_slope};
pub use layout::{LetterSpec, default_word, layout_letters};
pub use state::{Ball, Direction, GameEvent, Launcher, Letter, SimState};
pub use tick::step;
