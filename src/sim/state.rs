//! Simulation state and core types
//!
//! Everything a host needs to snapshot and resume a run lives in `SimState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{LetterSpec, layout_letters};
use crate::config::SimConfig;
use crate::error::{Result, SimError};

/// Vertical travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the letters (+1)
    Rising,
    /// Toward the launcher (-1)
    Falling,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Rising => 1.0,
            Direction::Falling => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Rising => Direction::Falling,
            Direction::Falling => Direction::Rising,
        }
    }
}

/// Something that happened during a step, for hosts to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Letters removed on a rising reach (layout ids, in layout order)
    LettersHit { ids: Vec<u32> },
    /// Ball caught by the launcher; `slope` is the next ascent's slope
    Caught { slope: f32 },
    /// Ball missed at the end of a leg; the game is now lost
    Missed { leg: Direction },
    /// The last letter was removed
    Cleared,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub direction: Direction,
    /// Horizontal travel per unit of vertical travel
    pub slope: f32,
    pub radius: f32,
}

impl Ball {
    /// Resting on the launcher, about to rise straight up
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            direction: Direction::Rising,
            slope: 0.0,
            radius,
        }
    }

    /// Move by a signed vertical delta, dragging X along the slope
    #[inline]
    pub fn advance(&mut self, delta_y: f32) {
        self.pos.y += delta_y;
        self.pos.x += self.direction.sign() * delta_y * self.slope;
    }
}

/// A destructible letter target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    /// Position in the original layout
    pub id: u32,
    pub glyph: char,
    /// Center of the glyph box (y is the baseline, layout only)
    pub pos: Vec2,
    pub half_width: f32,
    pub space_right: f32,
}

impl Letter {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half_width
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half_width
    }
}

/// The catcher at the bottom; X follows the pointer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launcher {
    pub pos: Vec2,
    pub half_height: f32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub(crate) config: SimConfig,
    pub(crate) ball: Ball,
    /// Surviving letters, in layout order
    pub(crate) letters: Vec<Letter>,
    pub(crate) launcher: Launcher,
    pub(crate) lost: bool,
    /// Steps taken, including no-op steps
    pub(crate) steps: u64,
}

impl SimState {
    /// Lay out `specs` and build the initial state
    pub fn new(specs: &[LetterSpec], launcher_x: f32, config: SimConfig) -> Result<Self> {
        config.validate()?;
        let letters = layout_letters(specs, config.letter_y)?;
        Self::from_letters(letters, launcher_x, config)
    }

    /// Build the initial state from already placed letters
    pub fn from_letters(letters: Vec<Letter>, launcher_x: f32, config: SimConfig) -> Result<Self> {
        config.validate()?;
        if letters.is_empty() {
            return Err(SimError::EmptyLayout);
        }
        check_letters(&letters)?;
        if !launcher_x.is_finite() {
            return Err(SimError::InvalidLauncherPosition(launcher_x));
        }

        let ball = Ball::new(Vec2::new(launcher_x, config.min_y), config.ball_radius);
        let launcher = Launcher {
            pos: Vec2::new(launcher_x, config.launcher_y),
            half_height: config.launcher_half_height(),
        };

        log::debug!(
            "Simulation ready: {} letters, launcher at x={}",
            letters.len(),
            launcher_x
        );

        Ok(Self {
            config,
            ball,
            letters,
            launcher,
            lost: false,
            steps: 0,
        })
    }

    /// Restore a snapshot, rejecting anything `new` would have refused
    pub fn from_json(json: &str) -> Result<Self> {
        let state: SimState = serde_json::from_str(json)?;
        state.config.validate()?;
        check_letters(&state.letters)?;

        let ball = &state.ball;
        let finite = [
            ("ball x", ball.pos.x),
            ("ball y", ball.pos.y),
            ("ball slope", ball.slope),
            ("ball radius", ball.radius),
        ];
        if let Some(&(name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidParameter { name, value });
        }
        if !state.launcher.pos.x.is_finite() {
            return Err(SimError::InvalidLauncherPosition(state.launcher.pos.x));
        }
        if ball.radius + state.launcher.half_height <= 0.0 {
            return Err(SimError::NonPositiveTolerance(
                ball.radius + state.launcher.half_height,
            ));
        }
        Ok(state)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball.pos
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball.radius
    }

    pub fn direction(&self) -> Direction {
        self.ball.direction
    }

    pub fn slope(&self) -> f32 {
        self.ball.slope
    }

    /// Surviving letters in layout order
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Breakpoint ending the ball's current leg
    pub fn breakpoint(&self) -> f32 {
        match self.ball.direction {
            Direction::Rising => self.config.max_y,
            Direction::Falling => self.config.min_y,
        }
    }
}

/// Letters need a finite center and a positive width to be hittable
fn check_letters(letters: &[Letter]) -> Result<()> {
    for (index, letter) in letters.iter().enumerate() {
        if !letter.half_width.is_finite() || letter.half_width <= 0.0 {
            return Err(SimError::NonPositiveExtent {
                index,
                width: letter.half_width * 2.0,
            });
        }
        if !letter.pos.x.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "letter center",
                value: letter.pos.x,
            });
        }
    }
    Ok(())
}
