//! Per-frame simulation step
//!
//! The ball moves linearly between two breakpoints. A step either stays
//! inside the current leg or lands exactly on its breakpoint, where the hit
//! (letters) or catch (launcher) test decides what happens next. Any part of
//! the frame's travel beyond the breakpoint is dropped.

use super::collision::{ball_overlaps_letter, launcher_catches, rebound_slope};
use super::state::{Direction, GameEvent, Letter, SimState};
use crate::error::{Result, SimError};

/// Advance the simulation by `dt` seconds with the launcher at `launcher_x`.
///
/// A zero `dt` changes nothing. Once the game is lost the ball keeps moving
/// along its last heading and no further events are produced.
pub fn step(state: &mut SimState, dt: f32, launcher_x: f32) -> Result<Vec<GameEvent>> {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Rejected step with time delta {}", dt);
        return Err(SimError::InvalidTimeDelta(dt));
    }
    if !launcher_x.is_finite() {
        log::warn!("Rejected step with launcher x {}", launcher_x);
        return Err(SimError::InvalidLauncherPosition(launcher_x));
    }

    state.steps += 1;
    state.launcher.pos.x = launcher_x;

    let mut events = Vec::new();
    if dt == 0.0 {
        return Ok(events);
    }

    let sign = state.ball.direction.sign();
    let raw_delta = sign * dt * state.config.speed_scale;

    if state.lost {
        state.ball.advance(raw_delta);
        return Ok(events);
    }

    let breakpoint = state.breakpoint();
    let dist = breakpoint - state.ball.pos.y;

    if sign * raw_delta < sign * dist {
        state.ball.advance(raw_delta);
        return Ok(events);
    }

    match state.ball.direction {
        Direction::Rising => reach_letters(state, breakpoint, dist, &mut events),
        Direction::Falling => reach_launcher(state, breakpoint, dist, raw_delta, &mut events),
    }

    Ok(events)
}

/// Land on a breakpoint exactly
fn snap_to(state: &mut SimState, breakpoint: f32, dist: f32) {
    state.ball.advance(dist);
    state.ball.pos.y = breakpoint;
}

fn reach_letters(state: &mut SimState, breakpoint: f32, dist: f32, events: &mut Vec<GameEvent>) {
    snap_to(state, breakpoint, dist);

    let ball_x = state.ball.pos.x;
    let radius = state.ball.radius;
    let (hit, surviving): (Vec<Letter>, Vec<Letter>) = std::mem::take(&mut state.letters)
        .into_iter()
        .partition(|letter| ball_overlaps_letter(ball_x, radius, letter));
    state.letters = surviving;

    if hit.is_empty() {
        state.lost = true;
        log::info!("Ball missed the letters at x={:.2}", ball_x);
        events.push(GameEvent::Missed {
            leg: Direction::Rising,
        });
        return;
    }

    state.ball.direction = Direction::Falling;
    state.ball.slope *= state.config.slope_softener;

    let ids: Vec<u32> = hit.iter().map(|l| l.id).collect();
    log::debug!(
        "Hit letters {:?} at x={:.2}, {} left",
        ids,
        ball_x,
        state.letters.len()
    );
    events.push(GameEvent::LettersHit { ids });

    if state.letters.is_empty() {
        log::info!("All letters cleared");
        events.push(GameEvent::Cleared);
    }
}

fn reach_launcher(
    state: &mut SimState,
    breakpoint: f32,
    dist: f32,
    raw_delta: f32,
    events: &mut Vec<GameEvent>,
) {
    let ball_x = state.ball.pos.x;
    let launcher_x = state.launcher.pos.x;
    let tolerance = state.config.catch_tolerance();

    if launcher_catches(ball_x, launcher_x, tolerance) {
        snap_to(state, breakpoint, dist);
        let slope = rebound_slope(state.ball.pos.x, launcher_x, tolerance);
        state.ball.direction = Direction::Rising;
        state.ball.slope = slope;
        log::debug!(
            "Caught at x={:.2}, landed at x={:.2}, new slope {:.3}",
            ball_x,
            state.ball.pos.x,
            slope
        );
        events.push(GameEvent::Caught { slope });
    } else {
        // The ball drops past the launcher
        state.ball.advance(raw_delta);
        state.lost = true;
        log::info!(
            "Ball missed the launcher at x={:.2} (launcher at {:.2})",
            ball_x,
            launcher_x
        );
        events.push(GameEvent::Missed {
            leg: Direction::Falling,
        });
    }
}
