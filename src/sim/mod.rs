//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bird;
pub mod collision;
pub mod geometry;
pub mod pipes;
pub mod state;
pub mod tick;

pub use bird::{Bird, BirdPhysics};
pub use collision::{CollisionVerdict, bird_below_ground, bird_hits_pipe, evaluate};
pub use geometry::{PlayField, Rect};
pub use pipes::{PipeId, PipePair, PipeSpawner};
pub use state::{GameEvent, GamePhase, GameState, InputEvent};
pub use tick::tick;
