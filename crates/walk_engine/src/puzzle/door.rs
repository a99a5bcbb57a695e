//! Door-opening animation
//!
//! A solved puzzle arms a [`DoorSlide`], which then moves its door a
//! fraction of the remaining distance each tick (exponential
//! approach) and writes the door's new box back into the obstacle
//! registry so the very next collision test sees it.

use crate::foundation::math::{lerp_vec3, Vec3};
use crate::scene::{Aabb, ObstacleHandle, ObstacleRegistry, SceneError};

/// Fraction of the remaining distance covered per tick
const SLIDE_FACTOR: f32 = 0.05;

/// Distance at which the door snaps to its target and stops
const SNAP_DISTANCE: f32 = 0.01;

/// Animation state of a sliding door
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Not yet armed
    Idle,
    /// Moving toward the target position
    Animating,
    /// Snapped to the target; further advances are no-ops
    Done,
}

/// Sliding-door sub-state machine: `Idle -> Animating -> Done`
#[derive(Debug)]
pub struct DoorSlide {
    handle: ObstacleHandle,
    size: Vec3,
    position: Vec3,
    target: Vec3,
    state: SlideState,
}

impl DoorSlide {
    /// Wire a door slide to a registered door.
    ///
    /// `start_box` is the door's box at wiring time (its center and
    /// size seed the animation); `target_center` is where the door
    /// ends up once open.
    pub fn new(handle: ObstacleHandle, start_box: Aabb, target_center: Vec3) -> Self {
        Self {
            handle,
            size: start_box.extents() * 2.0,
            position: start_box.center(),
            target: target_center,
            state: SlideState::Idle,
        }
    }

    /// Current animation state
    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Current door center position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Arm the animation. Only an idle door starts moving; a finished
    /// one stays put.
    pub fn start(&mut self) {
        if self.state == SlideState::Idle {
            self.state = SlideState::Animating;
        }
    }

    /// Advance the animation by one tick.
    ///
    /// Moves the door by [`SLIDE_FACTOR`] of the remaining distance,
    /// snaps within [`SNAP_DISTANCE`], and updates the registry entry
    /// through the stored handle. A stale handle is logged as a
    /// warning and permanently disables the animation.
    pub fn advance(&mut self, registry: &mut ObstacleRegistry) {
        if self.state != SlideState::Animating {
            return;
        }

        self.position = lerp_vec3(self.position, self.target, SLIDE_FACTOR);
        if (self.position - self.target).norm() < SNAP_DISTANCE {
            self.position = self.target;
            self.state = SlideState::Done;
            log::info!("door reached its target position");
        }

        let new_box = Aabb::from_center_size(self.position, self.size);
        match registry.update_box(self.handle, new_box) {
            Ok(()) => {}
            Err(SceneError::MissingObject(handle)) => {
                log::warn!("door handle {handle:?} no longer resolves; disabling door animation");
                self.state = SlideState::Done;
            }
            Err(err) => {
                log::warn!("door box update rejected: {err}");
                self.state = SlideState::Done;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Obstacle;
    use approx::assert_relative_eq;

    fn door_box() -> Aabb {
        Aabb::from_center_size(Vec3::new(-6.740, 1.0, 4.178), Vec3::new(1.0, 4.0, 0.1))
    }

    fn setup() -> (ObstacleRegistry, DoorSlide) {
        let mut registry = ObstacleRegistry::new();
        let handle = registry.register(Obstacle::door("door_2", door_box())).unwrap();
        let target = Vec3::new(-7.740, 1.0, 4.178);
        let slide = DoorSlide::new(handle, door_box(), target);
        (registry, slide)
    }

    #[test]
    fn test_idle_door_does_not_move() {
        let (mut registry, mut slide) = setup();
        let before = *registry.boxes().next().unwrap();
        slide.advance(&mut registry);
        assert_eq!(*registry.boxes().next().unwrap(), before);
        assert_eq!(slide.state(), SlideState::Idle);
    }

    #[test]
    fn test_converges_and_snaps_within_tolerance() {
        let (mut registry, mut slide) = setup();
        let target = Vec3::new(-7.740, 1.0, 4.178);
        slide.start();
        // 1.0 units at 5% per tick: well under 200 ticks to the
        // 0.01 snap distance
        for _ in 0..200 {
            slide.advance(&mut registry);
        }
        assert_eq!(slide.state(), SlideState::Done);
        assert_relative_eq!(slide.position(), target, epsilon = 1e-6);
        let boxed = registry.boxes().next().unwrap();
        assert_relative_eq!(boxed.center(), target, epsilon = 1e-5);
    }

    #[test]
    fn test_done_door_is_idempotent() {
        let (mut registry, mut slide) = setup();
        slide.start();
        for _ in 0..200 {
            slide.advance(&mut registry);
        }
        let settled = *registry.boxes().next().unwrap();
        slide.advance(&mut registry);
        slide.advance(&mut registry);
        assert_eq!(*registry.boxes().next().unwrap(), settled);
        assert_eq!(slide.state(), SlideState::Done);
    }

    #[test]
    fn test_first_tick_covers_five_percent() {
        let (mut registry, mut slide) = setup();
        slide.start();
        slide.advance(&mut registry);
        // 1.0 unit gap, so the first step is 0.05 along -X
        assert_relative_eq!(slide.position().x, -6.790, epsilon = 1e-5);
    }

    #[test]
    fn test_stale_handle_warns_and_disables() {
        let mut other = ObstacleRegistry::new();
        let foreign = other.register(Obstacle::door("door", door_box())).unwrap();
        let mut registry = ObstacleRegistry::new();
        let mut slide = DoorSlide::new(foreign, door_box(), Vec3::new(0.0, 1.0, 4.178));
        slide.start();
        slide.advance(&mut registry);
        assert_eq!(slide.state(), SlideState::Done);
    }

    #[test]
    fn test_start_after_done_does_not_rearm() {
        let (mut registry, mut slide) = setup();
        slide.start();
        for _ in 0..200 {
            slide.advance(&mut registry);
        }
        slide.start();
        assert_eq!(slide.state(), SlideState::Done);
    }
}
