//! Player motion and collision resolution
//!
//! Motion integration and collision testing are pure functions over
//! the obstacle registry's boxes: the frame driver computes a
//! candidate position, tests it, and commits or discards it wholly.

pub mod collision;
pub mod motion;

pub use collision::{is_blocked, player_volume};
pub use motion::compute_candidate;
