//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::input::KeyCode;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to put a concrete scene on top of the engine:
/// register obstacles, wire puzzles, and advance per-scene state each
/// tick.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is initialized. Register
    /// obstacles and wire puzzle handles here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every tick after the player's position has been
    /// committed for the frame. Advance puzzle state machines here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Clamped time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called when an input or viewport event arrives. The default
    /// forwards to the engine's own handling.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop stops, before the engine tears down
    /// its own state.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene construction error
    #[error("Scene error: {0}")]
    Scene(#[from] crate::scene::SceneError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// Viewport was resized
    WindowResized {
        /// New viewport width
        width: u32,
        /// New viewport height
        height: u32,
    },

    /// Close requested; stops the loop at the end of the tick
    CloseRequested,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Relative mouse movement (pointer-lock style)
    MouseMoved {
        /// Horizontal delta
        dx: f32,
        /// Vertical delta
        dy: f32,
    },
}
