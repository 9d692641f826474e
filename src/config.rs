//! Engine configuration
//!
//! Stored as RON next to the executable. Every field has a default so a
//! partial file (or no file at all) still produces a usable config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision::BoxShape;

/// Error type for config loading and saving
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Axis-aligned region in world units (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn to_box(self) -> BoxShape {
        BoxShape::new(self.x, self.y, self.w, self.h)
    }
}

/// Runtime tunables for the scene and the collision pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Region the per-frame quadtree covers (grown to fit stray colliders)
    pub world_bounds: Bounds,
    /// Entries a quadtree level holds before splitting
    pub quadtree_capacity: usize,
    /// Deepest level a quadtree may split to (capped at 8)
    pub quadtree_max_depth: u32,
    /// Seconds per simulation step for the frame driver
    pub fixed_timestep: f32,
    /// env_logger filter used by the demo binary
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_bounds: Bounds::new(0.0, 0.0, 1280.0, 720.0),
            quadtree_capacity: 4,
            quadtree_max_depth: 6,
            fixed_timestep: 1.0 / 60.0,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load from disk. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config = Self::from_ron(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty RON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = EngineConfig::from_ron("(quadtree_capacity: 8)").unwrap();
        assert_eq!(config.quadtree_capacity, 8);
        assert_eq!(config.quadtree_max_depth, 6);
        assert_eq!(config.world_bounds, Bounds::new(0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.ron");

        let mut config = EngineConfig::default();
        config.world_bounds = Bounds::new(-100.0, -100.0, 200.0, 200.0);
        config.log_filter = "tilly2d=trace".to_string();
        config.save(&path).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(
            EngineConfig::from_ron("(quadtree_capacity: \"lots\")"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
