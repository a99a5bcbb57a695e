//! House scene layout
//!
//! Wall and door placement for the house model, in the model's own
//! units. Collision boxes are the axis-aligned bounds of the (possibly
//! yaw-rotated) visual geometry, so a rotated wall swaps its X/Z
//! footprint.

use walk_engine::prelude::*;
use walk_engine::scene::SceneError;

/// A placed box of static geometry
pub struct BoxSpec {
    /// Diagnostic name
    pub name: &'static str,
    /// Center position
    pub position: Vec3,
    /// Rotation about the vertical axis, degrees
    pub yaw_degrees: f32,
    /// Full size before rotation (width, height, depth)
    pub size: Vec3,
}

impl BoxSpec {
    fn aabb(&self) -> Aabb {
        Aabb::from_rotated_box(self.position, self.yaw_degrees.to_radians(), self.size)
    }
}

/// The two long hallway walls
pub fn walls() -> Vec<BoxSpec> {
    vec![
        BoxSpec {
            name: "wall_1",
            position: Vec3::new(3.630, 1.001, 4.223),
            yaw_degrees: 90.0,
            size: Vec3::new(16.714, 2.0, 1.0),
        },
        BoxSpec {
            name: "wall_2",
            position: Vec3::new(-10.808, 1.001, 4.223),
            yaw_degrees: 90.0,
            size: Vec3::new(16.714, 2.0, 1.0),
        },
    ]
}

/// A door: a placed plane plus the position it slides to when opened
pub struct DoorSpec {
    /// The door's placed geometry
    pub geometry: BoxSpec,
    /// Center position of the fully open door
    pub open_position: Vec3,
}

/// The three doorway planes.
///
/// Doors are thin planes (1 x 2 scaled to double height); their
/// boxes are flat on the axis the plane faces. Each opens by sliding
/// one door-width along its own plane.
pub fn doors() -> Vec<DoorSpec> {
    vec![
        DoorSpec {
            geometry: BoxSpec {
                name: "door_1",
                position: Vec3::new(0.0, 1.0, 4.178),
                yaw_degrees: 0.0,
                size: Vec3::new(1.0, 4.0, 0.0),
            },
            open_position: Vec3::new(1.0, 1.0, 4.178),
        },
        DoorSpec {
            geometry: BoxSpec {
                name: "door_2",
                position: Vec3::new(-6.740, 1.0, 4.178),
                yaw_degrees: 0.0,
                size: Vec3::new(1.0, 4.0, 0.0),
            },
            open_position: Vec3::new(-7.740, 1.0, 4.178),
        },
        DoorSpec {
            geometry: BoxSpec {
                name: "door_3",
                position: Vec3::new(-3.641, 1.0, 10.861),
                yaw_degrees: 90.0,
                size: Vec3::new(1.0, 4.0, 0.0),
            },
            open_position: Vec3::new(-3.641, 1.0, 11.861),
        },
    ]
}

/// Region of the puzzle room, around the color display plinths
pub fn puzzle_room_region() -> Aabb {
    Aabb::from_center_size(Vec3::new(11.0, 1.0, -4.0), Vec3::new(5.0, 3.0, 4.0))
}

/// Handles to the doors, in the order [`doors`] lists them
pub struct LevelHandles {
    /// The entry door
    pub door_1: ObstacleHandle,
    /// The color puzzle's door
    pub door_2: ObstacleHandle,
    /// The puzzle room's door
    pub door_3: ObstacleHandle,
}

/// Register every wall and door, returning the door handles puzzles
/// wire to
pub fn register_level(registry: &mut ObstacleRegistry) -> Result<LevelHandles, SceneError> {
    for wall in walls() {
        registry.register(Obstacle::wall(wall.name, wall.aabb()))?;
    }

    let mut handles = Vec::with_capacity(3);
    for door in doors() {
        let handle = registry.register(Obstacle::door(door.geometry.name, door.geometry.aabb()))?;
        handles.push(handle);
    }

    Ok(LevelHandles {
        door_1: handles[0],
        door_2: handles[1],
        door_3: handles[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_register_level_adds_all_obstacles() {
        let mut registry = ObstacleRegistry::new();
        register_level(&mut registry).unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.boxes_of(ObstacleKind::Wall).count(), 2);
        assert_eq!(registry.boxes_of(ObstacleKind::Door).count(), 3);
    }

    #[test]
    fn test_rotated_wall_runs_along_z() {
        let mut registry = ObstacleRegistry::new();
        let handles = register_level(&mut registry).unwrap();
        // Wall boxes precede door boxes in registration order
        let wall = registry.boxes_of(ObstacleKind::Wall).next().unwrap();
        assert_relative_eq!(wall.extents().z, 8.357, epsilon = 1e-4);
        assert_relative_eq!(wall.extents().x, 0.5, epsilon = 1e-4);
        // Doors resolve through their handles
        assert!(registry.aabb(handles.door_2).is_some());
    }

    #[test]
    fn test_rotated_door_is_flat_along_x() {
        let mut registry = ObstacleRegistry::new();
        let handles = register_level(&mut registry).unwrap();
        let door_3 = registry.aabb(handles.door_3).unwrap();
        assert_relative_eq!(door_3.extents().x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(door_3.extents().z, 0.5, epsilon = 1e-5);
        assert_relative_eq!(door_3.extents().y, 2.0);
    }
}
