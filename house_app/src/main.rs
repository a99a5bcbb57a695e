//! Walkable puzzle-house demo
//!
//! Runs the house scene headlessly: obstacles and puzzles are fully
//! live, the renderer is a frame-counting stub. Pass a frame count as
//! the first argument to bound the run.

mod game;
mod level;

use game::HouseApp;
use walk_engine::assets;
use walk_engine::config::Config;
use walk_engine::prelude::*;

const CONFIG_PATH: &str = "house_app.toml";
const SCENE_PATH: &str = "resources/house.ron";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match EngineConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            log::info!("loaded configuration from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            log::info!("no usable {CONFIG_PATH} ({err}); using defaults");
            EngineConfig::default()
        }
    };

    // The visual model is optional: collision and puzzles work
    // without it
    match assets::load_scene(SCENE_PATH) {
        Ok(scene) => log::info!("scene model: {} nodes", scene.nodes.len()),
        Err(err) => log::error!("scene model unavailable ({err}); continuing without it"),
    }

    let max_frames = std::env::args().nth(1).and_then(|arg| arg.parse().ok());
    let mut app = HouseApp::new(max_frames);

    Engine::run(config, Box::new(NullRenderer::new()), &mut app)?;
    Ok(())
}
