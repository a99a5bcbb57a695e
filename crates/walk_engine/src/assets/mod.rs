//! Scene asset loading
//!
//! The visual scene arrives as a RON descriptor listing named meshes
//! with their transforms. Loading is fallible but never fatal to the
//! simulation: on failure the caller logs the error and keeps
//! running with collision and puzzles intact, just without visual
//! geometry.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The descriptor file could not be read
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// The descriptor file is not valid RON
    #[error("failed to parse scene file: {0}")]
    Parse(String),
}

/// Transform of a scene node: position, yaw about the vertical axis,
/// scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTransform {
    /// Position of the node's origin
    pub position: [f32; 3],
    /// Rotation about the vertical axis in degrees
    #[serde(default)]
    pub yaw_degrees: f32,
    /// Per-axis scale
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// A named visual node in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    /// Node name, unique within the descriptor
    pub name: String,
    /// Node transform
    pub transform: NodeTransform,
}

/// Visual scene description loaded from a RON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// All visual nodes in the scene
    pub nodes: Vec<SceneNode>,
}

impl SceneDescriptor {
    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// Load a scene descriptor from a RON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDescriptor, AssetError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene: SceneDescriptor =
        ron::from_str(&contents).map_err(|e| AssetError::Parse(e.to_string()))?;
    log::info!("loaded scene '{}' with {} nodes", path.display(), scene.nodes.len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor_with_defaults() {
        let text = r#"(
            nodes: [
                (name: "door_1", transform: (position: (0.0, 1.0, 4.178))),
                (name: "wall_1", transform: (
                    position: (3.630, 1.001, 4.223),
                    yaw_degrees: 90.0,
                    scale: (16.714, 2.0, 1.0),
                )),
            ],
        )"#;
        let scene: SceneDescriptor = ron::from_str(text).unwrap();
        assert_eq!(scene.nodes.len(), 2);
        let door = scene.node("door_1").unwrap();
        assert_eq!(door.transform.scale, [1.0, 1.0, 1.0]);
        assert_eq!(door.transform.yaw_degrees, 0.0);
        let wall = scene.node("wall_1").unwrap();
        assert_eq!(wall.transform.yaw_degrees, 90.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_scene("definitely/not/here.ron");
        assert!(matches!(result, Err(AssetError::Io(_))));
    }

    #[test]
    fn test_unknown_node_lookup_is_none() {
        let scene = SceneDescriptor::default();
        assert!(scene.node("door_2").is_none());
    }
}
