//! Pulse/obstacle proximity detection
//!
//! The wavefront "reaches" an obstacle when the distance from the pulse
//! center to the obstacle's center is less than the pulse radius plus half
//! the obstacle's width. Half-width is used as the obstacle's proximity
//! radius regardless of its height, so tall obstacles are detected later
//! than their top or bottom edge is actually touched.

use super::state::{Obstacle, Pulse};

/// Whether `pulse` has reached `obstacle`
///
/// Total over well-formed state. An inactive pulse (radius 0) still
/// reports a hit when its center sits within half a width of the
/// obstacle's center; callers only test active pulses.
#[inline]
pub fn detect(pulse: &Pulse, obstacle: &Obstacle) -> bool {
    let distance = pulse.center.distance(obstacle.center());
    distance < pulse.radius + obstacle.width() / 2.0
}

/// Mark every obstacle the pulse has reached; returns indices newly detected
///
/// Detection is sticky: obstacles already flagged are left alone.
pub fn sweep(pulse: &Pulse, obstacles: &mut [Obstacle]) -> Vec<usize> {
    let mut newly_detected = Vec::new();
    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        if !obstacle.detected && detect(pulse, obstacle) {
            obstacle.detected = true;
            newly_detected.push(index);
        }
    }
    newly_detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pulse_at(x: f32, y: f32, radius: f32) -> Pulse {
        Pulse {
            center: Vec2::new(x, y),
            radius,
            active: true,
            generation: 1,
        }
    }

    #[test]
    fn test_detect_within_reach() {
        // Center (510, 190), distance 100 from (410, 190)
        let obstacle = Obstacle::new(500.0, 180.0, 20.0, 20.0);
        assert!(detect(&pulse_at(410.0, 190.0, 91.0), &obstacle));
        assert!(!detect(&pulse_at(410.0, 190.0, 89.0), &obstacle));
    }

    #[test]
    fn test_detect_is_strict() {
        // radius + half width == distance exactly: not yet detected
        let obstacle = Obstacle::new(500.0, 180.0, 20.0, 20.0);
        assert!(!detect(&pulse_at(410.0, 190.0, 90.0), &obstacle));
    }

    #[test]
    fn test_detect_uses_half_width_only() {
        // Tall thin obstacle directly below the pulse: vertical extent is ignored
        let obstacle = Obstacle::new(95.0, 100.0, 10.0, 200.0);
        // Center (100, 200), distance 100
        let pulse = pulse_at(100.0, 100.0, 96.0);
        assert!(detect(&pulse, &obstacle));
        let pulse = pulse_at(100.0, 100.0, 94.0);
        assert!(!detect(&pulse, &obstacle));

        // Same geometry rotated: wide obstacle reaches further
        let wide = Obstacle::new(0.0, 195.0, 200.0, 10.0);
        assert!(!detect(&pulse_at(100.0, 0.0, 0.0), &wide));
        assert!(detect(&pulse_at(100.0, 100.0, 1.0), &wide));
    }

    #[test]
    fn test_sweep_marks_and_reports_new_detections() {
        let mut obstacles = vec![
            Obstacle::new(100.0, 100.0, 20.0, 20.0),
            Obstacle::new(600.0, 100.0, 20.0, 20.0),
            Obstacle::new(100.0, 140.0, 20.0, 20.0),
        ];
        obstacles[2].detected = true;

        let pulse = pulse_at(110.0, 130.0, 50.0);
        let hits = sweep(&pulse, &mut obstacles);
        assert_eq!(hits, vec![0]);
        assert!(obstacles[0].detected);
        assert!(!obstacles[1].detected);
        assert!(obstacles[2].detected);

        // Second sweep reports nothing new
        assert!(sweep(&pulse, &mut obstacles).is_empty());
    }
}
