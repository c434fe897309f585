//! Demo autopilot
//!
//! Plays the game by moving the launcher, for attract mode and the headless
//! demo. Letters are taken left to right: the first straight shot clears
//! whatever sits above the launcher, then the sweep restarts at the far left
//! and walks right, so every target stays within one leg's reach.

use super::state::{Direction, SimState};

/// Fraction of the full catch tolerance the autopilot aims with
const MAX_AIM: f32 = 0.95;

/// Launcher X that sends the ball toward the next letter.
///
/// Only the falling leg matters; otherwise the launcher stays where it is.
pub fn aim_launcher(state: &SimState) -> f32 {
    let launcher_x = state.launcher().pos.x;
    if state.is_lost() || state.direction() == Direction::Rising {
        return launcher_x;
    }

    let config = state.config();
    let ball = state.ball();
    let tolerance = config.catch_tolerance();

    // The catch test uses where the ball is now; the rebound slope uses
    // where it lands, `drift` further along.
    let drift = ball.slope * (ball.pos.y - config.min_y);
    let landing_x = ball.pos.x + drift;

    let Some(target) = state
        .letters()
        .iter()
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
    else {
        // Nothing left to hit; just catch it
        return ball.pos.x;
    };

    // Slopes reachable while keeping the launcher within tolerance of the ball
    let center = drift / tolerance;
    let leg = config.max_y - config.min_y;
    let slope = ((target.pos.x - landing_x) / leg).clamp(center - MAX_AIM, center + MAX_AIM);
    landing_x - slope * tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::layout::{LetterSpec, default_word};
    use crate::sim::state::GameEvent;
    use crate::sim::tick::step;

    fn run_autopilot(mut state: SimState, max_steps: usize) -> (SimState, Vec<GameEvent>) {
        let mut all_events = Vec::new();
        for _ in 0..max_steps {
            if state.is_lost() {
                break;
            }
            let launcher_x = aim_launcher(&state);
            all_events.extend(step(&mut state, 1.0 / 60.0, launcher_x).unwrap());
        }
        (state, all_events)
    }

    #[test]
    fn test_holds_still_while_rising() {
        let specs = [LetterSpec::new('A', 10.0, 0.0)];
        let state = SimState::new(&specs, 7.0, SimConfig::default()).unwrap();
        assert_eq!(aim_launcher(&state), 7.0);
    }

    #[test]
    fn test_catches_drifting_ball_in_one_frame() {
        // Drifts 18.8 right over a single frame; the launcher must still be
        // within tolerance of where the ball starts that frame
        let specs = [LetterSpec::new('A', 10.0, 0.0)];
        let mut state = SimState::new(&specs, 0.0, SimConfig::default()).unwrap();
        state.ball.pos.y = state.config.max_y;
        state.ball.direction = Direction::Falling;
        state.ball.slope = 0.2;

        let launcher_x = aim_launcher(&state);
        assert!((launcher_x - state.ball.pos.x).abs() <= state.config.catch_tolerance());

        let events = step(&mut state, 10.0, launcher_x).unwrap();
        assert!(!state.is_lost());
        assert!(matches!(events.as_slice(), [GameEvent::Caught { .. }]));
    }

    #[test]
    fn test_clears_small_row() {
        let specs: Vec<_> = "HELLO"
            .chars()
            .map(|c| LetterSpec::new(c, 10.0, 2.0))
            .collect();
        let state = SimState::new(&specs, 0.0, SimConfig::default()).unwrap();

        let (state, events) = run_autopilot(state, 10_000);

        assert!(state.letters().is_empty());
        assert!(events.contains(&GameEvent::Cleared));
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::LettersHit { .. }))
            .count();
        assert_eq!(hits, 5);
        // Nothing left to hit ends the run on the next rise
        assert!(state.is_lost());
    }

    #[test]
    fn test_clears_page_word() {
        let state = SimState::new(&default_word(|_| 13.0), 0.0, SimConfig::default()).unwrap();

        let (state, events) = run_autopilot(state, 20_000);

        assert!(state.letters().is_empty());
        assert!(events.contains(&GameEvent::Cleared));
        assert!(
            !events.contains(&GameEvent::Missed {
                leg: Direction::Falling
            })
        );
    }
}
