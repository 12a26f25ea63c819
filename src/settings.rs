//! Game configuration
//!
//! Every value the match reads (field size, speeds, angle ranges, grid
//! shape) lives here instead of in engine globals. Loaded from JSON; any
//! missing key falls back to the default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::catalog::{BlockType, default_catalog};

/// Configuration loading/validation failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How paddle reflection treats off-center hits beyond the paddle edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionPolicy {
    /// Linear mapping with no limit (hits past the edge deflect further)
    #[default]
    Unclamped,
    /// Saturate at +/- `max_reflect_angle`
    Saturate,
}

/// Brick grid placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    /// Center of cell (0, 0)
    pub origin_x: f32,
    pub origin_y: f32,
    /// Distance between neighbouring cell centers
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub block_width: f32,
    pub block_height: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            origin_x: 164.0,
            origin_y: 100.0,
            spacing_x: 100.0,
            spacing_y: 30.0,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
        }
    }
}

/// Complete match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the launch-angle RNG
    pub seed: u64,

    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top edge of the paddle
    pub paddle_y: f32,
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub launch_height: f32,

    // === Angles (degrees) ===
    pub launch_half_angle: f32,
    pub reflect_angle_scale: f32,
    pub max_reflect_angle: f32,
    pub reflection: ReflectionPolicy,

    // === Blocks ===
    pub grid: GridLayout,
    pub catalog: Vec<BlockType>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            launch_height: LAUNCH_HEIGHT,

            launch_half_angle: LAUNCH_HALF_ANGLE,
            reflect_angle_scale: REFLECT_ANGLE_SCALE,
            max_reflect_angle: MAX_REFLECT_ANGLE,
            reflection: ReflectionPolicy::Unclamped,

            grid: GridLayout::default(),
            catalog: default_catalog(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Same config with a different RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values the match cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds field_width {}",
                self.paddle_width, self.field_width
            )));
        }
        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("launch_half_angle", self.launch_half_angle),
            ("max_reflect_angle", self.max_reflect_angle),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        for (i, block_type) in self.catalog.iter().enumerate() {
            if block_type.hp == 0 {
                return Err(ConfigError::Invalid(format!(
                    "block type {} has zero hit-points",
                    block_type.name
                )));
            }
            if self.catalog[..i].iter().any(|t| t.name == block_type.name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate block type name {}",
                    block_type.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "ball_speed": 450.0, "grid": { "rows": 2 } }"#)
            .expect("config should parse");
        assert_eq!(config.ball_speed, 450.0);
        assert_eq!(config.grid.rows, 2);
        assert_eq!(config.grid.cols, GRID_COLS);
        assert_eq!(config.catalog.len(), 11);
        assert_eq!(config.reflection, ReflectionPolicy::Unclamped);
    }

    #[test]
    fn test_reflection_policy_parses_snake_case() {
        let config = GameConfig::from_json(r#"{ "reflection": "saturate" }"#).unwrap();
        assert_eq!(config.reflection, ReflectionPolicy::Saturate);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_hp_block_type() {
        let json = r#"{ "catalog": [ { "name": "Air", "color": 0, "hp": 0 } ] }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_block_names() {
        let json = r#"{ "catalog": [
            { "name": "Dirt", "color": 0, "hp": 1 },
            { "name": "Dirt", "color": 1, "hp": 2 }
        ] }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_paddle_wider_than_field() {
        let config = GameConfig {
            paddle_width: 2000.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::from_file("/nonexistent/block-pop.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
