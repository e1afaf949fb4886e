//! Error types
//!
//! Configuration problems are rejected when a session is built. Invariant
//! violations are detected during a tick and abort the session to the menu.

use thiserror::Error;

/// Why a [`GameConfig`](crate::GameConfig) was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    EmptyField { width: u32, height: u32 },

    #[error("ceiling ({ceiling_y}) must be above ground ({ground_y}) inside a field of height {height}")]
    CeilingBelowGround {
        ceiling_y: u32,
        ground_y: i64,
        height: u32,
    },

    #[error("pipe width must be positive and finite, got {0}")]
    InvalidPipeWidth(f32),

    #[error("pipe gap {gap} does not fit in a field of height {height}")]
    GapTooLarge { gap: u32, height: u32 },

    #[error("pipes must scroll left (negative finite speed), got {0}")]
    InvalidPipeSpeed(f32),

    #[error("tick period must be positive")]
    ZeroTickPeriod,

    #[error("spawn interval {interval_ms} ms is shorter than one tick ({tick_ms} ms)")]
    SpawnIntervalTooShort { interval_ms: u32, tick_ms: u32 },

    /// `min_offset_from_ceiling..=height - bottom_offset_from_ground - gap` is empty
    #[error("gap placement range is empty: min top edge {min}, max top edge {max}")]
    EmptyGapRange { min: i64, max: i64 },

    #[error("jump speed must be negative and finite, got {0}")]
    InvalidJumpSpeed(f32),

    #[error("downward acceleration must be positive and finite, got {0}")]
    InvalidAcceleration(f32),

    #[error("gravity speed must be finite and non-negative, got {0}")]
    InvalidGravitySpeed(f32),

    #[error("bird hitbox extents must be finite and non-negative")]
    InvalidHitbox,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A broken simulation invariant observed mid-session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("bird state is not finite (y = {y}, velocity = {velocity_y})")]
    NonFiniteBird { y: f32, velocity_y: f32 },

    #[error("pipe {id} gap is {actual}, expected {expected}")]
    GapMismatch { id: u32, expected: f32, actual: f32 },
}
