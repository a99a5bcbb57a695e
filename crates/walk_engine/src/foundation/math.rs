//! Math utilities and types
//!
//! Provides the fundamental math types used across the simulation.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// World up axis (+Y)
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Math utility functions
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees.to_radians()
    }

    /// Linear interpolation between two values
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Interpolate `from` toward `to` by fraction `t` of the remaining distance
pub fn lerp_vec3(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from + (to - from) * t
}
