//! Collision resolution against the static obstacle set
//!
//! A candidate position either passes against every obstacle box or
//! is discarded wholly; there is no axis-separated resolution and no
//! sliding along walls. That is deliberate scene behavior, not a
//! missing feature.

use crate::foundation::math::Vec3;
use crate::scene::Aabb;

/// Build the player's collision volume centered at a position.
///
/// The volume is recreated each tick from the candidate point and the
/// fixed half-extents; it is never persisted.
pub fn player_volume(center: Vec3, half_extents: Vec3) -> Aabb {
    Aabb {
        min: center - half_extents,
        max: center + half_extents,
    }
}

/// Test whether a candidate position is blocked by any obstacle.
///
/// Pure any-intersects predicate, O(n) in obstacle count and
/// short-circuiting on the first hit. Comparisons are inclusive, so
/// a volume exactly touching an obstacle face counts as blocked.
pub fn is_blocked<'a, I>(candidate: Vec3, half_extents: Vec3, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Aabb>,
{
    let volume = player_volume(candidate, half_extents);
    obstacles.into_iter().any(|aabb| volume.intersects(aabb))
}
