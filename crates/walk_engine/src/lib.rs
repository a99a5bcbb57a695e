//! # Walk Engine
//!
//! A small simulation core for first-person walkable scenes: obstacle
//! registration, candidate-position motion integration, axis-aligned
//! bounding-box collision resolution, and door-opening puzzle state
//! machines, all driven by a single cooperative frame loop.
//!
//! Rendering, windowing, and asset pipelines are seams: the engine
//! talks to a [`render::Renderer`] implementation and consumes input
//! as discrete [`application::AppEvent`]s, so it runs headless in
//! tests and tools.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use walk_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         // Register obstacles, wire puzzles
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         // Advance puzzle state
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, Box::new(NullRenderer::new()), &mut app)?;
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod puzzle;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, AppEvent, Application},
        config::{Config, EngineConfig},
        engine::{Engine, EngineError},
        foundation::{
            math::Vec3,
            time::Timer,
        },
        input::{KeyCode, MoveIntent},
        render::{Camera, NullRenderer, Renderer},
        scene::{Aabb, Obstacle, ObstacleHandle, ObstacleKind, ObstacleRegistry},
    };
}
