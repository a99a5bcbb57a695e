//! Puzzle-room trigger
//!
//! The second puzzle setup: a designated region of the scene that,
//! once the player's volume enters it, solves (one-way) and slides
//! its door open. Shares the door machinery with the color puzzle.

use crate::puzzle::door::DoorSlide;
use crate::scene::{Aabb, ObstacleRegistry};

/// Region trigger that opens a door when the player steps inside
#[derive(Debug)]
pub struct RoomTrigger {
    region: Aabb,
    solved: bool,
    door: DoorSlide,
}

impl RoomTrigger {
    /// Create a trigger for a region of the scene
    pub fn new(region: Aabb, door: DoorSlide) -> Self {
        Self { region, solved: false, door }
    }

    /// Whether the trigger has fired
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The trigger region
    pub fn region(&self) -> Aabb {
        self.region
    }

    /// The trigger's door animation (for inspection)
    pub fn door(&self) -> &DoorSlide {
        &self.door
    }

    /// Test the player volume against the trigger region.
    ///
    /// Returns `true` exactly once, on the tick the player first
    /// enters; the transition arms the door and never resets.
    pub fn check_entry(&mut self, player_volume: &Aabb) -> bool {
        if self.solved {
            return false;
        }
        if self.region.intersects(player_volume) {
            self.solved = true;
            self.door.start();
            log::info!("puzzle room entered, opening door");
            return true;
        }
        false
    }

    /// Advance the door animation by one tick
    pub fn advance(&mut self, registry: &mut ObstacleRegistry) {
        self.door.advance(registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::physics::player_volume;
    use crate::puzzle::door::SlideState;
    use crate::scene::Obstacle;

    fn setup() -> (ObstacleRegistry, RoomTrigger) {
        let mut registry = ObstacleRegistry::new();
        let door_box = Aabb::from_center_size(Vec3::new(-3.641, 1.0, 10.861), Vec3::new(0.1, 4.0, 1.0));
        let handle = registry.register(Obstacle::door("door_3", door_box)).unwrap();
        let slide = DoorSlide::new(handle, door_box, Vec3::new(-3.641, 1.0, 12.0));
        let region = Aabb::from_center_size(Vec3::new(10.0, 1.0, -4.0), Vec3::new(4.0, 3.0, 4.0));
        (registry, RoomTrigger::new(region, slide))
    }

    #[test]
    fn test_outside_region_does_not_fire() {
        let (_registry, mut trigger) = setup();
        let volume = player_volume(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.25, 0.9, 0.25));
        assert!(!trigger.check_entry(&volume));
        assert!(!trigger.is_solved());
    }

    #[test]
    fn test_entry_fires_exactly_once() {
        let (_registry, mut trigger) = setup();
        let inside = player_volume(Vec3::new(10.0, 1.0, -4.0), Vec3::new(0.25, 0.9, 0.25));
        assert!(trigger.check_entry(&inside));
        assert!(trigger.is_solved());
        assert!(!trigger.check_entry(&inside));
        assert_eq!(trigger.door().state(), SlideState::Animating);
    }

    #[test]
    fn test_leaving_the_region_does_not_reset() {
        let (_registry, mut trigger) = setup();
        let inside = player_volume(Vec3::new(10.0, 1.0, -4.0), Vec3::new(0.25, 0.9, 0.25));
        let outside = player_volume(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.25, 0.9, 0.25));
        trigger.check_entry(&inside);
        trigger.check_entry(&outside);
        assert!(trigger.is_solved());
    }
}
