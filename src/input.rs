//! Pointer-to-launcher mapping
//!
//! The host owns pointer capture; this is only the arithmetic turning a
//! client X coordinate into the launcher center the simulation reads.

/// Map a pointer's client X to a launcher center X.
///
/// The viewport center maps to 0 and the edges to `±range`. Pointers outside
/// the viewport are clamped to the edges. Returns `None` for a degenerate
/// viewport so the host can keep the previous launcher position.
pub fn pointer_to_launcher_x(client_x: f32, viewport_width: f32, range: f32) -> Option<f32> {
    if !client_x.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }
    let half = viewport_width / 2.0;
    let factor = ((client_x - half) / half).clamp(-1.0, 1.0);
    Some(factor * range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LAUNCHER_RANGE;

    #[test]
    fn test_center_maps_to_zero() {
        assert_eq!(pointer_to_launcher_x(400.0, 800.0, LAUNCHER_RANGE), Some(0.0));
    }

    #[test]
    fn test_edges_map_to_range() {
        assert_eq!(pointer_to_launcher_x(0.0, 800.0, LAUNCHER_RANGE), Some(-90.0));
        assert_eq!(pointer_to_launcher_x(800.0, 800.0, LAUNCHER_RANGE), Some(90.0));
        assert_eq!(pointer_to_launcher_x(600.0, 800.0, LAUNCHER_RANGE), Some(45.0));
    }

    #[test]
    fn test_outside_viewport_clamps() {
        assert_eq!(pointer_to_launcher_x(-50.0, 800.0, LAUNCHER_RANGE), Some(-90.0));
    }

    #[test]
    fn test_degenerate_viewport() {
        assert_eq!(pointer_to_launcher_x(10.0, 0.0, LAUNCHER_RANGE), None);
        assert_eq!(pointer_to_launcher_x(f32::NAN, 800.0, LAUNCHER_RANGE), None);
    }
}
