//! First-person camera
//!
//! The camera's position is the authoritative player position: the
//! frame driver reads it to integrate motion and writes it back only
//! when the collision resolver accepts the candidate.

use crate::foundation::math::{utils, Vec3};

/// Pitch is clamped just short of straight up/down so the horizontal
/// facing projection stays well defined.
const MAX_PITCH_RADIANS: f32 = 1.55;

/// First-person perspective camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space (player eye position)
    pub position: Vec3,

    /// Heading around the vertical axis, in radians; 0 faces +Z
    pub yaw: f32,

    /// Elevation angle in radians, clamped to avoid vertical facing
    pub pitch: f32,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera at a position
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// World-space facing direction (unit length)
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Apply a pointer-lock style relative mouse movement.
    ///
    /// Positive `dx` turns right, positive `dy` looks down.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-MAX_PITCH_RADIANS, MAX_PITCH_RADIANS);
    }

    /// Recompute the projection aspect ratio after a viewport resize
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
