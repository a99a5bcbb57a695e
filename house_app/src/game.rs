//! House application: obstacle wiring, puzzles, and controls

use crate::level;
use walk_engine::prelude::*;
use walk_engine::puzzle::{ColorMatchPuzzle, DoorSlide, Rgb, RoomTrigger};

/// Step applied to a color channel per key press
const COLOR_STEP: f32 = 0.05;

/// Frames between position log lines on the headless renderer
const POSITION_LOG_INTERVAL: u64 = 120;

/// The walkable house with its two puzzles
pub struct HouseApp {
    color_puzzle: Option<ColorMatchPuzzle>,
    room_trigger: Option<RoomTrigger>,
    max_frames: Option<u64>,
    frames: u64,
}

impl HouseApp {
    /// Create the application. `max_frames` bounds headless runs;
    /// `None` runs until a close request.
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            color_puzzle: None,
            room_trigger: None,
            max_frames,
            frames: 0,
        }
    }

    /// The color puzzle, once initialized
    pub fn color_puzzle(&self) -> Option<&ColorMatchPuzzle> {
        self.color_puzzle.as_ref()
    }

    /// The room trigger, once initialized
    pub fn room_trigger(&self) -> Option<&RoomTrigger> {
        self.room_trigger.as_ref()
    }

    fn adjust_color(&mut self, channel: fn(&mut Rgb) -> &mut f32) {
        if let Some(puzzle) = &mut self.color_puzzle {
            let mut color = puzzle.player_color();
            let value = channel(&mut color);
            *value += COLOR_STEP;
            if *value > 1.0 {
                *value = 0.0;
            }
            log::debug!(
                "player color now ({:.2}, {:.2}, {:.2})",
                color.r, color.g, color.b
            );
            puzzle.set_player_color(color);
        }
    }
}

impl Application for HouseApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let handles = level::register_level(&mut engine.registry)?;

        let doors = level::doors();

        // Color puzzle opens door 2
        let door_2 = &doors[1];
        let slide = DoorSlide::new(
            handles.door_2,
            engine.registry.aabb(handles.door_2).ok_or_else(|| {
                AppError::Custom("door_2 missing after registration".into())
            })?,
            door_2.open_position,
        );
        self.color_puzzle = Some(ColorMatchPuzzle::generate(&mut rand::thread_rng(), slide));

        // Walking into the puzzle room opens door 3
        let door_3 = &doors[2];
        let slide = DoorSlide::new(
            handles.door_3,
            engine.registry.aabb(handles.door_3).ok_or_else(|| {
                AppError::Custom("door_3 missing after registration".into())
            })?,
            door_3.open_position,
        );
        self.room_trigger = Some(RoomTrigger::new(level::puzzle_room_region(), slide));

        log::info!(
            "house ready: {} obstacles, spawn at {:?}",
            engine.registry.len(),
            engine.player_position()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if let Some(trigger) = &mut self.room_trigger {
            trigger.check_entry(&engine.player_volume());
            trigger.advance(&mut engine.registry);
        }
        if let Some(puzzle) = &mut self.color_puzzle {
            puzzle.advance(&mut engine.registry);
        }

        self.frames += 1;
        if self.frames % POSITION_LOG_INTERVAL == 0 {
            let p = engine.player_position();
            log::debug!("frame {}: player at ({:.2}, {:.2}, {:.2})", self.frames, p.x, p.y, p.z);
        }
        if let Some(limit) = self.max_frames {
            if self.frames >= limit {
                log::info!("frame limit {limit} reached, exiting");
                engine.request_exit();
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        if let AppEvent::KeyInput { key, pressed: true } = event {
            match key {
                KeyCode::Escape => {
                    engine.request_exit();
                    return Ok(());
                }
                KeyCode::R => self.adjust_color(|c| &mut c.r),
                KeyCode::G => self.adjust_color(|c| &mut c.g),
                KeyCode::B => self.adjust_color(|c| &mut c.b),
                _ => {}
            }
        }
        engine.handle_event(event);
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        if let Some(puzzle) = &self.color_puzzle {
            log::info!(
                "shutting down; color puzzle {}",
                if puzzle.is_solved() { "solved" } else { "unsolved" }
            );
        }
    }
}
