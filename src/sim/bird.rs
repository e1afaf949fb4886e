//! The player-controlled bird
//!
//! The bird never moves horizontally; the world scrolls past it. Each tick it
//! moves by its current vertical velocity and then gains the downward
//! acceleration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{PlayField, Rect};
use crate::config::{BirdConfig, Hitbox};

/// Vertical motion constants for a bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdPhysics {
    pub gravity_speed: f32,
    pub jump_speed: f32,
    pub downward_acceleration: f32,
}

impl From<&BirdConfig> for BirdPhysics {
    fn from(config: &BirdConfig) -> Self {
        Self {
            gravity_speed: config.gravity_speed,
            jump_speed: config.jump_speed,
            downward_acceleration: config.downward_acceleration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// x is fixed at spawn
    pub pos: Vec2,
    /// Positive = falling
    pub velocity_y: f32,
    pub hitbox: Hitbox,
    pub physics: BirdPhysics,
}

impl Bird {
    /// Spawn at the field centre, already falling at the base gravity speed
    pub fn spawn(field: &PlayField, config: &BirdConfig) -> Self {
        let physics = BirdPhysics::from(config);
        Self {
            pos: field.center(),
            velocity_y: physics.gravity_speed,
            hitbox: config.hitbox,
            physics,
        }
    }

    /// Advance one tick.
    ///
    /// Above the ceiling the velocity is first reset to the base gravity speed
    /// so stacked jumps cannot carry the bird out of the field.
    pub fn integrate(&mut self, ceiling_y: f32) {
        if self.pos.y < ceiling_y {
            self.velocity_y = self.physics.gravity_speed;
        }
        self.pos.y += self.velocity_y;
        self.velocity_y += self.physics.downward_acceleration;
    }

    /// Set the upward jump velocity. Repeated jumps do not stack.
    pub fn jump(&mut self) {
        self.velocity_y = self.physics.jump_speed;
    }

    /// Collision box around the current position
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.hitbox.left,
            self.pos.y - self.hitbox.top,
            self.pos.x + self.hitbox.right,
            self.pos.y + self.hitbox.bottom,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.velocity_y.is_finite()
    }
}
