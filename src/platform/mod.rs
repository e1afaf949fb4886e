//! Platform abstraction layer
//!
//! The simulation never draws, owns no window and never sleeps. Hosts plug in:
//! - a [`Scene`] that mirrors the bird and pipes as renderable entities
//! - a [`Clock`] that calls back into the driver after a delay
//! - a [`SessionObserver`] for score and menu updates
//!
//! Raw key/pointer events are filtered into logical inputs by [`input`].

pub mod input;

use std::time::Duration;

use glam::Vec2;

use crate::sim::Rect;

/// Opaque reference to an entity owned by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u64);

/// Rendering-side view of the world
pub trait Scene {
    /// Place the bird sprite centred on `at`
    fn spawn_bird(&mut self, at: Vec2) -> EntityHandle;
    /// Place a solid rectangle
    fn spawn_rect(&mut self, rect: Rect) -> EntityHandle;
    fn move_entity(&mut self, handle: EntityHandle, delta: Vec2);
    fn remove_entity(&mut self, handle: EntityHandle);
    /// Remove everything
    fn clear(&mut self);
}

/// The one timing primitive the driver needs
pub trait Clock {
    /// Request a single call to `Driver::on_tick` after `after` has elapsed
    fn schedule_next_tick(&mut self, after: Duration);
}

/// UI notifications. All methods default to doing nothing.
pub trait SessionObserver {
    fn on_session_started(&mut self) {}
    fn on_score_changed(&mut self, _current: u32, _best: u32) {}
    fn on_game_over(&mut self, _current: u32, _best: u32) {}
}

/// Scene that renders nothing but hands out unique handles
#[derive(Debug, Default)]
pub struct NullScene {
    next_handle: u64,
}

impl NullScene {
    fn allocate(&mut self) -> EntityHandle {
        self.next_handle += 1;
        EntityHandle(self.next_handle)
    }
}

impl Scene for NullScene {
    fn spawn_bird(&mut self, _at: Vec2) -> EntityHandle {
        self.allocate()
    }

    fn spawn_rect(&mut self, _rect: Rect) -> EntityHandle {
        self.allocate()
    }

    fn move_entity(&mut self, _handle: EntityHandle, _delta: Vec2) {}

    fn remove_entity(&mut self, _handle: EntityHandle) {}

    fn clear(&mut self) {}
}

/// Clock for headless hosts: remembers the pending request and lets the
/// caller decide when it fires
#[derive(Debug, Default)]
pub struct ManualClock {
    pending: Option<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending tick request, if any
    pub fn take_pending(&mut self) -> Option<Duration> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Clock for ManualClock {
    fn schedule_next_tick(&mut self, after: Duration) {
        self.pending = Some(after);
    }
}

/// Observer that ignores every notification
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Observer that writes notifications to the log
#[derive(Debug, Default)]
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn on_session_started(&mut self) {
        log::info!("New session, waiting for first jump");
    }

    fn on_score_changed(&mut self, current: u32, best: u32) {
        log::debug!("Score {} (best {})", current, best);
    }

    fn on_game_over(&mut self, current: u32, best: u32) {
        log::info!("Game over: score {}, best {}", current, best);
    }
}
