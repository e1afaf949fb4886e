//! Game configuration
//!
//! Every tunable constant of a session lives here. Configs are plain JSON so a
//! host can tweak the feel of the game without recompiling; missing fields fall
//! back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::PlayField;

/// Play-field dimensions and boundaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: u32,
    pub height: u32,
    /// Distance of the ground line above the bottom edge
    pub ground_margin: u32,
    /// Distance of the ceiling line below the top edge
    pub ceiling_margin: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_margin: GROUND_MARGIN,
            ceiling_margin: CEILING_MARGIN,
        }
    }
}

/// Extents of the bird's collision box measured from its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hitbox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for Hitbox {
    fn default() -> Self {
        Self {
            left: BIRD_HITBOX_LEFT,
            top: BIRD_HITBOX_TOP,
            right: BIRD_HITBOX_RIGHT,
            bottom: BIRD_HITBOX_BOTTOM,
        }
    }
}

impl Hitbox {
    fn is_valid(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Bird physics constants (units per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub gravity_speed: f32,
    pub jump_speed: f32,
    pub downward_acceleration: f32,
    pub hitbox: Hitbox,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            gravity_speed: GRAVITY_SPEED,
            jump_speed: JUMP_SPEED,
            downward_acceleration: DOWNWARD_ACCELERATION,
            hitbox: Hitbox::default(),
        }
    }
}

/// Pipe geometry and spawn cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    pub width: f32,
    /// Vertical size of the passable gap
    pub gap: u32,
    /// Horizontal translation per tick (negative = leftward)
    pub x_speed: f32,
    pub spawn_interval_ms: u32,
    pub min_offset_from_ceiling: u32,
    pub bottom_offset_from_ground: u32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            width: PIPE_WIDTH,
            gap: PIPE_GAP,
            x_speed: PIPE_X_SPEED,
            spawn_interval_ms: PIPE_SPAWN_INTERVAL_MS,
            min_offset_from_ceiling: PIPE_MIN_OFFSET_FROM_CEILING,
            bottom_offset_from_ground: PIPE_BOTTOM_OFFSET_FROM_GROUND,
        }
    }
}

impl PipeConfig {
    /// Inclusive range of the gap's top edge, or `None` when it is empty
    pub fn top_edge_range(&self, field_height: u32) -> Option<(u32, u32)> {
        let max = i64::from(field_height)
            - i64::from(self.bottom_offset_from_ground)
            - i64::from(self.gap);
        let min = i64::from(self.min_offset_from_ceiling);
        if max < min {
            return None;
        }
        Some((self.min_offset_from_ceiling, max as u32))
    }
}

/// Complete configuration of a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub bird: BirdConfig,
    pub pipes: PipeConfig,
    pub tick_period_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            bird: BirdConfig::default(),
            pipes: PipeConfig::default(),
            tick_period_ms: TICK_PERIOD_MS,
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
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every constraint a session relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.field;
        if field.width == 0 || field.height == 0 {
            return Err(ConfigError::EmptyField {
                width: field.width,
                height: field.height,
            });
        }

        let ground_y = i64::from(field.height) - i64::from(field.ground_margin);
        if field.ground_margin == 0 || i64::from(field.ceiling_margin) >= ground_y {
            return Err(ConfigError::CeilingBelowGround {
                ceiling_y: field.ceiling_margin,
                ground_y,
                height: field.height,
            });
        }

        let bird = &self.bird;
        if !bird.gravity_speed.is_finite() || bird.gravity_speed < 0.0 {
            return Err(ConfigError::InvalidGravitySpeed(bird.gravity_speed));
        }
        if !bird.jump_speed.is_finite() || bird.jump_speed >= 0.0 {
            return Err(ConfigError::InvalidJumpSpeed(bird.jump_speed));
        }
        if !bird.downward_acceleration.is_finite() || bird.downward_acceleration <= 0.0 {
            return Err(ConfigError::InvalidAcceleration(bird.downward_acceleration));
        }
        if !bird.hitbox.is_valid() {
            return Err(ConfigError::InvalidHitbox);
        }

        let pipes = &self.pipes;
        if !pipes.width.is_finite() || pipes.width <= 0.0 {
            return Err(ConfigError::InvalidPipeWidth(pipes.width));
        }
        if pipes.gap == 0 || pipes.gap >= field.height {
            return Err(ConfigError::GapTooLarge {
                gap: pipes.gap,
                height: field.height,
            });
        }
        if !pipes.x_speed.is_finite() || pipes.x_speed >= 0.0 {
            return Err(ConfigError::InvalidPipeSpeed(pipes.x_speed));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if pipes.spawn_interval_ms < self.tick_period_ms {
            return Err(ConfigError::SpawnIntervalTooShort {
                interval_ms: pipes.spawn_interval_ms,
                tick_ms: self.tick_period_ms,
            });
        }
        if pipes.top_edge_range(field.height).is_none() {
            return Err(ConfigError::EmptyGapRange {
                min: i64::from(pipes.min_offset_from_ceiling),
                max: i64::from(field.height)
                    - i64::from(pipes.bottom_offset_from_ground)
                    - i64::from(pipes.gap),
            });
        }

        Ok(())
    }

    /// Immutable field geometry for a session
    pub fn play_field(&self) -> PlayField {
        PlayField {
            width: self.field.width as f32,
            height: self.field.height as f32,
            ground_y: (self.field.height - self.field.ground_margin) as f32,
            ceiling_y: self.field.ceiling_margin as f32,
        }
    }
}
