//! Flappy Core - fixed-tick simulation for a side-scrolling avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, game state)
//! - `driver`: Tick sequencing and presentation mirroring
//! - `platform`: Interfaces to the rendering/input/timing host
//! - `config`: Data-driven game constants
//! - `score`: Current and best score for the process lifetime

pub mod config;
pub mod driver;
pub mod error;
pub mod platform;
pub mod score;
pub mod sim;

pub use config::GameConfig;
pub use driver::Driver;
pub use error::{ConfigError, InvariantViolation};
pub use score::Score;

/// Default game constants
pub mod consts {
    /// Fixed simulation tick period (~66 Hz)
    pub const TICK_PERIOD_MS: u32 = 15;

    /// Field dimensions
    pub const FIELD_WIDTH: u32 = 485;
    pub const FIELD_HEIGHT: u32 = 640;
    /// Ground sits this far above the bottom edge
    pub const GROUND_MARGIN: u32 = 31;
    /// Ceiling sits this far below the top edge
    pub const CEILING_MARGIN: u32 = 20;

    /// Base falling speed, also the speed restored on a ceiling bounce
    pub const GRAVITY_SPEED: f32 = 3.0;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_SPEED: f32 = -5.0;
    /// Added to the vertical velocity every tick
    pub const DOWNWARD_ACCELERATION: f32 = 0.25;

    /// Bird hitbox extents around its position
    pub const BIRD_HITBOX_LEFT: f32 = 18.0;
    pub const BIRD_HITBOX_TOP: f32 = 18.0;
    pub const BIRD_HITBOX_RIGHT: f32 = 22.0;
    pub const BIRD_HITBOX_BOTTOM: f32 = 20.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 85.0;
    pub const PIPE_GAP: u32 = 120;
    pub const PIPE_X_SPEED: f32 = -2.6;
    pub const PIPE_SPAWN_INTERVAL_MS: u32 = 2500;
    /// Minimum distance between the ceiling edge and the top of the gap
    pub const PIPE_MIN_OFFSET_FROM_CEILING: u32 = 90;
    /// Minimum distance between the bottom of the gap and the field bottom
    pub const PIPE_BOTTOM_OFFSET_FROM_GROUND: u32 = 90;
}
