//! Static scene representation for collision
//!
//! The [`ObstacleRegistry`] owns the authoritative list of collidable
//! volumes (walls and doors). Registration hands back an
//! [`ObstacleHandle`] that door-animation code uses to update its box
//! later; there is no name-based lookup and no removal operation.

use crate::foundation::math::Vec3;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Stable handle to a registered obstacle
    pub struct ObstacleHandle;
}

/// Scene-level errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// A box whose min corner exceeds its max corner on some axis.
    /// This is an authoring mistake and fails fast rather than being
    /// silently clamped.
    #[error("invalid geometry: min {min:?} exceeds max {max:?}")]
    InvalidGeometry {
        /// Offending min corner
        min: [f32; 3],
        /// Offending max corner
        max: [f32; 3],
    },

    /// An obstacle handle that no longer resolves to a registry entry
    #[error("obstacle not found for handle {0:?}")]
    MissingObject(ObstacleHandle),
}

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points.
    ///
    /// Fails with [`SceneError::InvalidGeometry`] if `min > max` on
    /// any axis.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, SceneError> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(SceneError::InvalidGeometry {
                min: [min.x, min.y, min.z],
                max: [max.x, max.y, max.z],
            });
        }
        Ok(Self { min, max })
    }

    /// Create an AABB centered at a point with the given full size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half.abs(),
            max: center + half.abs(),
        }
    }

    /// Axis-aligned bound of a box rotated about the vertical axis.
    ///
    /// Visual geometry may be yaw-rotated, but collision boxes stay
    /// axis-aligned: the stored box is the rotated mesh's world-space
    /// bound, so a long thin wall rotated 90 degrees swaps its X/Z
    /// footprint.
    pub fn from_rotated_box(center: Vec3, yaw_radians: f32, size: Vec3) -> Self {
        let (sin, cos) = yaw_radians.sin_cos();
        let (hx, hz) = (size.x * 0.5, size.z * 0.5);
        let extent_x = hx * cos.abs() + hz * sin.abs();
        let extent_z = hx * sin.abs() + hz * cos.abs();
        let extents = Vec3::new(extent_x, size.y * 0.5, extent_z);
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB.
    ///
    /// Standard slab test with inclusive comparisons: boxes that
    /// touch on a shared boundary count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

/// Classification of a registered obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Static geometry that never changes
    Wall,
    /// Interactive geometry whose box may be replaced while a puzzle
    /// animates it
    Door,
}

/// A named collidable volume
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Human-readable name, used only for diagnostics
    pub name: String,
    /// Wall or door
    pub kind: ObstacleKind,
    /// Current world-space bound
    pub aabb: Aabb,
}

impl Obstacle {
    /// Create a wall obstacle
    pub fn wall(name: impl Into<String>, aabb: Aabb) -> Self {
        Self { name: name.into(), kind: ObstacleKind::Wall, aabb }
    }

    /// Create a door obstacle
    pub fn door(name: impl Into<String>, aabb: Aabb) -> Self {
        Self { name: name.into(), kind: ObstacleKind::Door, aabb }
    }
}

/// Owner of all collidable volumes in the scene
#[derive(Default)]
pub struct ObstacleRegistry {
    obstacles: SlotMap<ObstacleHandle, Obstacle>,
    // Registration order, so box queries are deterministic
    order: Vec<ObstacleHandle>,
}

impl ObstacleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle and return its handle.
    ///
    /// The handle is the only way to update the obstacle later; door
    /// puzzles receive it at wiring time instead of re-finding the
    /// door by name.
    pub fn register(&mut self, obstacle: Obstacle) -> Result<ObstacleHandle, SceneError> {
        // Corners are public and may have been mutated since construction
        let Aabb { min, max } = obstacle.aabb;
        Aabb::new(min, max)?;

        log::debug!(
            "registering {:?} obstacle '{}' ({:?} .. {:?})",
            obstacle.kind, obstacle.name, min, max
        );
        let handle = self.obstacles.insert(obstacle);
        self.order.push(handle);
        Ok(handle)
    }

    /// Replace the box of a previously registered obstacle
    pub fn update_box(&mut self, handle: ObstacleHandle, aabb: Aabb) -> Result<(), SceneError> {
        let Aabb { min, max } = aabb;
        Aabb::new(min, max)?;
        let obstacle = self
            .obstacles
            .get_mut(handle)
            .ok_or(SceneError::MissingObject(handle))?;
        obstacle.aabb = aabb;
        Ok(())
    }

    /// Look up an obstacle by handle
    pub fn get(&self, handle: ObstacleHandle) -> Option<&Obstacle> {
        self.obstacles.get(handle)
    }

    /// Current box of an obstacle, if the handle is still valid
    pub fn aabb(&self, handle: ObstacleHandle) -> Option<Aabb> {
        self.obstacles.get(handle).map(|o| o.aabb)
    }

    /// All obstacle boxes in registration order
    pub fn boxes(&self) -> impl Iterator<Item = &Aabb> + '_ {
        self.order.iter().filter_map(|h| self.obstacles.get(*h)).map(|o| &o.aabb)
    }

    /// Boxes of obstacles with the given kind, in registration order
    pub fn boxes_of(&self, kind: ObstacleKind) -> impl Iterator<Item = &Aabb> + '_ {
        self.order
            .iter()
            .filter_map(move |h| self.obstacles.get(*h))
            .filter(move |o| o.kind == kind)
            .map(|o| &o.aabb)
    }

    /// Number of registered obstacles
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn aabb(min: (f32, f32, f32), max: (f32, f32, f32)) -> Aabb {
        Aabb::new(Vec3::new(min.0, min.1, min.2), Vec3::new(max.0, max.1, max.2)).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_corners() {
        let result = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0));
        assert!(matches!(result, Err(SceneError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_from_center_size_is_symmetric() {
        let b = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.8, 0.5));
        assert_relative_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(b.extents(), Vec3::new(0.25, 0.9, 0.25));
    }

    #[test]
    fn test_from_rotated_box_quarter_turn_swaps_footprint() {
        let b = Aabb::from_rotated_box(
            Vec3::zeros(),
            90.0_f32.to_radians(),
            Vec3::new(16.714, 2.0, 1.0),
        );
        // Long axis now lies along Z
        assert_relative_eq!(b.extents().x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(b.extents().y, 1.0);
        assert_relative_eq!(b.extents().z, 8.357, epsilon = 1e-5);
    }

    #[test]
    fn test_intersects_overlap_and_near_miss() {
        let a = aabb((0.0, 0.0, 0.0), (1.0, 1.0, 1.0));
        let overlapping = aabb((0.5, 0.5, 0.5), (2.0, 2.0, 2.0));
        let separated = aabb((1.001, 0.0, 0.0), (2.0, 1.0, 1.0));
        assert!(a.intersects(&overlapping));
        assert!(!a.intersects(&separated));
    }

    #[test]
    fn test_intersects_touching_boundary_counts() {
        let a = aabb((0.0, 0.0, 0.0), (1.0, 1.0, 1.0));
        let touching = aabb((1.0, 0.0, 0.0), (2.0, 1.0, 1.0));
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
    }

    #[test]
    fn test_register_returns_usable_handle() {
        let mut registry = ObstacleRegistry::new();
        let handle = registry
            .register(Obstacle::door("door_2", aabb((0.0, 0.0, 0.0), (1.0, 2.0, 1.0))))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(handle).unwrap().name, "door_2");
    }

    #[test]
    fn test_update_box_changes_collision_list() {
        let mut registry = ObstacleRegistry::new();
        let handle = registry
            .register(Obstacle::door("door", aabb((0.0, 0.0, 0.0), (1.0, 2.0, 1.0))))
            .unwrap();
        let moved = aabb((5.0, 0.0, 0.0), (6.0, 2.0, 1.0));
        registry.update_box(handle, moved).unwrap();
        assert_eq!(registry.aabb(handle).unwrap(), moved);
        assert_eq!(registry.boxes().count(), 1);
        assert_eq!(*registry.boxes().next().unwrap(), moved);
    }

    #[test]
    fn test_boxes_of_filters_by_kind() {
        let mut registry = ObstacleRegistry::new();
        registry
            .register(Obstacle::wall("wall_1", aabb((0.0, 0.0, 0.0), (1.0, 1.0, 1.0))))
            .unwrap();
        registry
            .register(Obstacle::door("door_1", aabb((2.0, 0.0, 0.0), (3.0, 2.0, 1.0))))
            .unwrap();
        assert_eq!(registry.boxes_of(ObstacleKind::Wall).count(), 1);
        assert_eq!(registry.boxes_of(ObstacleKind::Door).count(), 1);
        assert_eq!(registry.boxes().count(), 2);
    }

    #[test]
    fn test_update_with_stale_handle_is_an_error() {
        let mut a = ObstacleRegistry::new();
        let mut b = ObstacleRegistry::new();
        let foreign = a
            .register(Obstacle::door("door", aabb((0.0, 0.0, 0.0), (1.0, 1.0, 1.0))))
            .unwrap();
        let result = b.update_box(foreign, aabb((0.0, 0.0, 0.0), (1.0, 1.0, 1.0)));
        assert!(matches!(result, Err(SceneError::MissingObject(_))));
    }
}
