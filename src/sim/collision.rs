//! Collision tests at the two breakpoints
//!
//! Both tests are one-dimensional: the ball only meets letters and the
//! launcher at fixed heights, so only horizontal overlap matters.

use super::state::Letter;

/// Check whether a ball centered at `ball_x` overlaps a letter's extent.
///
/// The letter's box is widened by the ball radius on both sides; touching
/// the edge counts as a hit.
#[inline]
pub fn ball_overlaps_letter(ball_x: f32, ball_radius: f32, letter: &Letter) -> bool {
    ball_x >= letter.left() - ball_radius && ball_x <= letter.right() + ball_radius
}

/// Check whether the launcher catches a ball centered at `ball_x`.
///
/// The test runs where the ball is when the frame starts, before it lands on
/// the breakpoint.
#[inline]
pub fn launcher_catches(ball_x: f32, launcher_x: f32, tolerance: f32) -> bool {
    (ball_x - launcher_x).abs() <= tolerance
}

/// Rebound slope after a catch: the landing offset from the launcher center
/// over `tolerance`. An off-center catch sends the ball up at an angle.
///
/// Not clamped; a ball drifting during its last frame can land beyond the
/// tolerance and rebound steeper than 1.
#[inline]
pub fn rebound_slope(landing_x: f32, launcher_x: f32, tolerance: f32) -> f32 {
    (landing_x - launcher_x) / tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn letter(center_x: f32, half_width: f32) -> Letter {
        Letter {
            id: 0,
            glyph: 'X',
            pos: Vec2::new(center_x, 200.0),
            half_width,
            space_right: 0.0,
        }
    }

    #[test]
    fn test_overlap_inside() {
        assert!(ball_overlaps_letter(0.0, 1.0, &letter(0.0, 5.0)));
        assert!(ball_overlaps_letter(4.9, 1.0, &letter(0.0, 5.0)));
    }

    #[test]
    fn test_overlap_edge_includes_radius() {
        assert!(ball_overlaps_letter(6.0, 1.0, &letter(0.0, 5.0)));
        assert!(ball_overlaps_letter(-6.0, 1.0, &letter(0.0, 5.0)));
        assert!(!ball_overlaps_letter(6.01, 1.0, &letter(0.0, 5.0)));
    }

    #[test]
    fn test_overlap_far_away() {
        assert!(!ball_overlaps_letter(0.0, 1.0, &letter(50.0, 5.0)));
    }

    #[test]
    fn test_catch_within_tolerance() {
        assert!(launcher_catches(0.0, 0.0, 4.0));
        assert!(launcher_catches(-4.0, 0.0, 4.0));
        assert!(launcher_catches(12.0, 10.0, 4.0));
    }

    #[test]
    fn test_catch_miss() {
        assert!(!launcher_catches(4.5, 0.0, 4.0));
        assert!(!launcher_catches(-20.0, -10.0, 4.0));
    }

    #[test]
    fn test_rebound_slope() {
        assert_eq!(rebound_slope(0.0, 0.0, 4.0), 0.0);
        assert_eq!(rebound_slope(2.0, 0.0, 4.0), 0.5);
        assert_eq!(rebound_slope(8.0, 10.0, 4.0), -0.5);
        assert_eq!(rebound_slope(6.0, 0.0, 4.0), 1.5);
    }
}
