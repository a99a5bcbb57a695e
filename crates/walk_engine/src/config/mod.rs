//! Configuration system

use crate::input::KeyBindings;
use serde::{Deserialize, Serialize};

/// Configuration trait for types loadable from TOML or RON files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Viewport and projection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Player movement and volume settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Walking speed in units per second
    pub speed: f32,
    /// Full size of the player's collision volume (width, height,
    /// depth)
    pub volume_size: [f32; 3],
    /// Mouse look sensitivity in radians per count
    pub mouse_sensitivity: f32,
}

impl PlayerConfig {
    /// Half-extents of the player volume
    pub fn half_extents(&self) -> crate::foundation::math::Vec3 {
        crate::foundation::math::Vec3::new(
            self.volume_size[0] * 0.5,
            self.volume_size[1] * 0.5,
            self.volume_size[2] * 0.5,
        )
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            volume_size: [0.5, 1.8, 0.5],
            mouse_sensitivity: 0.003,
        }
    }
}

/// Frame pacing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Target frame rate for the cooperative loop
    pub target_fps: u32,
    /// Upper bound on the per-tick elapsed time, in seconds. A frame
    /// spike above this is clamped so the player cannot tunnel
    /// through a thin wall in one step.
    pub max_delta: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_delta: 0.1,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Viewport and projection
    pub window: WindowConfig,
    /// Player movement and volume
    pub player: PlayerConfig,
    /// Frame pacing
    pub frame: FrameConfig,
    /// Movement key bindings
    pub bindings: KeyBindings,
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_scene_units() {
        let config = EngineConfig::default();
        assert_relative_eq!(config.player.speed, 5.0);
        assert_eq!(config.player.volume_size, [0.5, 1.8, 0.5]);
        let half = config.player.half_extents();
        assert_relative_eq!(half.y, 0.9);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = EngineConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&text).unwrap();
        assert_relative_eq!(parsed.player.speed, config.player.speed);
        assert_eq!(parsed.window.width, config.window.width);
        assert_relative_eq!(parsed.frame.max_delta, config.frame.max_delta);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let config = EngineConfig::default();
        let result = config.save_to_file("engine.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
