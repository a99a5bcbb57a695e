//! Candidate-position motion integration
//!
//! Translates input intent into a proposed next position. The result
//! is only a candidate; the collision resolver decides whether it is
//! committed.

use crate::foundation::math::{Vec3, UP};
use crate::input::MoveIntent;

/// Facing directions closer to vertical than this have no usable
/// horizontal projection.
const HORIZONTAL_EPSILON: f32 = 1e-6;

/// Compute the candidate next position for the player.
///
/// The facing direction is projected onto the horizontal plane (Y
/// zeroed, renormalized) so looking up or down never changes walking
/// speed. The side direction is `up x horizontal_facing`, matching a
/// strafe-left-positive convention. Opposing intent flags cancel via
/// summation rather than mutual exclusion.
///
/// If `facing` is vertical (or zero) the horizontal projection is
/// undefined; the stable fallback is zero displacement, never NaN.
///
/// `delta_time` is expected to be pre-clamped by the caller; a frame
/// spike here translates directly into displacement.
pub fn compute_candidate(
    position: Vec3,
    facing: Vec3,
    intent: &MoveIntent,
    speed: f32,
    delta_time: f32,
) -> Vec3 {
    let horizontal = Vec3::new(facing.x, 0.0, facing.z);
    if horizontal.norm_squared() < HORIZONTAL_EPSILON {
        return position;
    }
    let forward = horizontal.normalize();
    let side = UP.cross(&forward).normalize();

    let step = speed * delta_time;
    let mut displacement = Vec3::zeros();
    if intent.forward {
        displacement += forward * step;
    }
    if intent.backward {
        displacement -= forward * step;
    }
    if intent.left {
        displacement += side * step;
    }
    if intent.right {
        displacement -= side * step;
    }

    position + displacement
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_stopped() -> MoveIntent {
        MoveIntent::default()
    }

    #[test]
    fn test_no_intent_no_displacement() {
        let pos = Vec3::new(1.0, 1.2, -2.0);
        let next = compute_candidate(pos, Vec3::new(0.0, 0.0, 1.0), &all_stopped(), 5.0, 0.016);
        assert_eq!(next, pos);
    }

    #[test]
    fn test_forward_full_second_covers_speed_units() {
        let intent = MoveIntent { forward: true, ..Default::default() };
        let pos = Vec3::zeros();
        let next = compute_candidate(pos, Vec3::new(0.0, 0.0, 1.0), &intent, 5.0, 1.0);
        assert_relative_eq!((next - pos).norm(), 5.0, epsilon = 1e-5);
        assert_relative_eq!(next.z, 5.0, epsilon = 1e-5);
        assert_relative_eq!(next.y, 0.0);
    }

    #[test]
    fn test_forward_ignores_vertical_look_component() {
        let intent = MoveIntent { forward: true, ..Default::default() };
        // Looking steeply downward while walking forward
        let facing = Vec3::new(0.0, -0.9, 0.3);
        let next = compute_candidate(Vec3::zeros(), facing, &intent, 5.0, 1.0);
        assert_relative_eq!(next.y, 0.0);
        assert_relative_eq!((next - Vec3::zeros()).norm(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_opposing_pairs_cancel() {
        let both_axes = MoveIntent { forward: true, backward: true, left: true, right: true };
        let pos = Vec3::new(3.0, 1.2, 4.0);
        let next = compute_candidate(pos, Vec3::new(0.6, 0.0, 0.8), &both_axes, 5.0, 0.25);
        assert_relative_eq!((next - pos).norm(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_strafe_is_perpendicular_to_facing() {
        let intent = MoveIntent { left: true, ..Default::default() };
        let facing = Vec3::new(0.0, 0.0, 1.0);
        let next = compute_candidate(Vec3::zeros(), facing, &intent, 2.0, 1.0);
        assert_relative_eq!(next.dot(&facing), 0.0, epsilon = 1e-6);
        assert_relative_eq!(next.norm(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_facing_falls_back_to_zero_displacement() {
        let intent = MoveIntent { forward: true, left: true, ..Default::default() };
        let pos = Vec3::new(1.0, 1.0, 1.0);
        let next = compute_candidate(pos, Vec3::new(0.0, 1.0, 0.0), &intent, 5.0, 1.0);
        assert_eq!(next, pos);
        assert!(next.x.is_finite() && next.y.is_finite() && next.z.is_finite());
    }
}
