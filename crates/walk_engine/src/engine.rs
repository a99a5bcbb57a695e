//! Core engine implementation
//!
//! The engine is the explicit simulation context: it owns the
//! obstacle registry, camera, input state, timer, and renderer, and
//! drives the single cooperative tick loop. Nothing in the core lives
//! in globals; teardown is the end of [`Engine::run`].

use crate::{
    application::{AppEvent, Application},
    config::{EngineConfig, FrameConfig},
    foundation::{math::Vec3, time::Timer},
    input::InputManager,
    physics,
    render::{Camera, RenderError, Renderer},
    scene::ObstacleRegistry,
};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application callback failed
    #[error("Application error: {0}")]
    Application(String),

    /// Renderer failed; unrecoverable for the loop
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Eye height above the floor, in scene units
const EYE_HEIGHT: f32 = 1.2;

/// Default spawn position: just outside the house entrance
const SPAWN: Vec3 = Vec3::new(0.0, EYE_HEIGHT, -2.0);

/// Main engine struct
///
/// Owns all per-simulation state and runs one tick per frame:
/// sample input, integrate a candidate position, resolve collision,
/// commit or discard, advance application state, render.
pub struct Engine {
    /// Authoritative list of collidable volumes
    pub registry: ObstacleRegistry,

    /// First-person camera; its position is the player position
    pub camera: Camera,

    /// Input handling system
    pub input: InputManager,

    /// Frame timing
    timer: Timer,

    /// Frame producer
    renderer: Box<dyn Renderer>,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the loop keeps rescheduling itself
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, renderer: Box<dyn Renderer>) -> Self {
        log::info!("Initializing engine...");

        let camera = Camera::perspective(
            SPAWN,
            config.window.fov_degrees,
            config.window.width as f32 / config.window.height as f32,
            config.window.near,
            config.window.far,
        );
        let input = InputManager::new(config.bindings);

        Self {
            registry: ObstacleRegistry::new(),
            camera,
            input,
            timer: Timer::new(),
            renderer,
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        app: &mut T,
    ) -> Result<(), EngineError> {
        let frame = config.frame.clone();
        let mut engine = Self::new(config, renderer);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialization: {e}")))?;

        log::info!("Starting main loop...");
        let frame_budget = frame_budget(&frame);

        while engine.running {
            let frame_start = Instant::now();

            engine.timer.update();
            let delta_time = engine.timer.clamped_delta(frame.max_delta);

            engine.step(app, delta_time)?;

            // Cooperative reschedule: yield the rest of the frame
            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        app.cleanup(&mut engine);
        engine.input.reset();
        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// `delta_time` must already be clamped. Public so headless
    /// drivers and tests can tick without the pacing loop.
    pub fn step<T: Application>(
        &mut self,
        app: &mut T,
        delta_time: f32,
    ) -> Result<(), EngineError> {
        // Mouse look first so motion uses this tick's facing
        let (dx, dy) = self.input.take_mouse_delta();
        self.camera
            .apply_mouse_delta(dx, dy, self.config.player.mouse_sensitivity);

        let intent = self.input.intent();
        let candidate = physics::compute_candidate(
            self.camera.position,
            self.camera.forward(),
            &intent,
            self.config.player.speed,
            delta_time,
        );

        let half_extents = self.config.player.half_extents();
        if !physics::is_blocked(candidate, half_extents, self.registry.boxes()) {
            self.camera.set_position(candidate);
        }
        // A blocked candidate is discarded wholly: the position stays
        // exactly where it was for this tick

        app.update(self, delta_time)
            .map_err(|e| EngineError::Application(format!("update: {e}")))?;

        self.renderer.render(&self.camera, &self.registry)?;
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CloseRequested => {
                self.running = false;
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::MouseMoved { dx, dy } => {
                self.input.handle_mouse_move(dx, dy);
            }
            AppEvent::WindowResized { width, height } => {
                self.camera.set_aspect(width, height);
                self.renderer.resize(width, height);
            }
        }
    }

    /// Stop the loop at the end of the current tick
    pub fn request_exit(&mut self) {
        self.running = false;
    }

    /// Whether the loop will reschedule another tick
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current committed player position
    pub fn player_position(&self) -> Vec3 {
        self.camera.position
    }

    /// Player volume at the current committed position
    pub fn player_volume(&self) -> crate::scene::Aabb {
        physics::player_volume(self.camera.position, self.config.player.half_extents())
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn frame_budget(frame: &FrameConfig) -> Duration {
    if frame.target_fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f32(1.0 / frame.target_fps as f32)
    }
}
