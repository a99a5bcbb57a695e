//! Rendering seam
//!
//! The engine does not render anything itself; it hands the camera
//! and the obstacle registry to a [`Renderer`] implementation each
//! tick. A renderer failure is unrecoverable and stops the loop.

mod camera;

pub use camera::Camera;

use crate::scene::ObstacleRegistry;
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rendering backend failed in a way the loop cannot recover
    /// from
    #[error("render backend failure: {0}")]
    Backend(String),
}

/// Frame producer driven once per tick
pub trait Renderer {
    /// Render one frame from the camera's point of view
    fn render(&mut self, camera: &Camera, registry: &ObstacleRegistry) -> Result<(), RenderError>;

    /// React to a viewport resize
    fn resize(&mut self, width: u32, height: u32);
}

/// Renderer that produces no output.
///
/// Used for headless runs and tests; counts frames so callers can
/// observe that the loop actually ticked.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    /// Create a new null renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, _camera: &Camera, _registry: &ObstacleRegistry) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}
