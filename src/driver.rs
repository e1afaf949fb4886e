//! Tick driver
//!
//! Owns the game state and sequences all per-tick work. Input is applied
//! immediately between ticks; ticks are requested from the host [`Clock`] one
//! at a time while the session is actively playing. After each step the
//! driver mirrors the simulation into the [`Scene`] by handle and forwards
//! notifications to the [`SessionObserver`].

use std::collections::BTreeMap;
use std::time::Duration;

use glam::Vec2;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::input::{RawInput, map_raw_input};
use crate::platform::{Clock, EntityHandle, Scene, SessionObserver};
use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, PipeId, tick};

/// Scene handles for one pipe pair
#[derive(Debug, Clone, Copy)]
struct PipeHandles {
    top: EntityHandle,
    bottom: EntityHandle,
}

pub struct Driver<S: Scene, C: Clock, O: SessionObserver> {
    state: GameState,
    scene: S,
    clock: C,
    observer: O,
    bird_handle: Option<EntityHandle>,
    pipe_handles: BTreeMap<PipeId, PipeHandles>,
    /// A tick has been requested and not yet delivered
    tick_pending: bool,
}

impl<S: Scene, C: Clock, O: SessionObserver> Driver<S, C, O> {
    pub fn new(
        config: GameConfig,
        seed: u64,
        scene: S,
        clock: C,
        observer: O,
    ) -> Result<Self, ConfigError> {
        let state = GameState::new(config, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self::from_state(state, scene, clock, observer))
    }

    pub fn from_state(state: GameState, scene: S, clock: C, observer: O) -> Self {
        Self {
            state,
            scene,
            clock,
            observer,
            bird_handle: None,
            pipe_handles: BTreeMap::new(),
            tick_pending: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.state.config.tick_period_ms))
    }

    /// Filter a raw host press and apply it
    pub fn handle_raw_input(&mut self, raw: &RawInput) {
        if let Some(input) = map_raw_input(raw, self.state.phase) {
            self.handle_input(input);
        }
    }

    /// Apply a logical input. Never runs physics.
    pub fn handle_input(&mut self, input: InputEvent) {
        let bird_y = self.state.bird.pos.y;
        self.state.apply_input(input);
        self.sync(bird_y, false);
        self.schedule_if_playing();
    }

    /// Run one tick. Called by the host when a scheduled tick fires.
    pub fn on_tick(&mut self) {
        self.tick_pending = false;
        if self.state.phase != GamePhase::Playing {
            return;
        }

        let bird_y = self.state.bird.pos.y;
        tick(&mut self.state);
        self.sync(bird_y, true);
        self.schedule_if_playing();
    }

    fn schedule_if_playing(&mut self) {
        if self.state.phase == GamePhase::Playing && !self.tick_pending {
            self.tick_pending = true;
            let after = self.tick_period();
            self.clock.schedule_next_tick(after);
        }
    }

    /// Mirror the latest state into the scene and dispatch notifications
    fn sync(&mut self, prev_bird_y: f32, ticked: bool) {
        let events = self.state.drain_events();
        if events.contains(&GameEvent::SessionStarted) {
            self.reset_scene();
        } else if ticked {
            self.move_entities(prev_bird_y);
        }

        for event in events {
            match event {
                GameEvent::SessionStarted => self.observer.on_session_started(),
                GameEvent::ScoreChanged { current, best } => {
                    self.observer.on_score_changed(current, best)
                }
                GameEvent::GameOver { current, best, .. } => {
                    self.observer.on_game_over(current, best)
                }
                GameEvent::SessionAborted { reason } => {
                    log::warn!("Returning to menu: {}", reason);
                    self.scene.clear();
                    self.bird_handle = None;
                    self.pipe_handles.clear();
                }
                GameEvent::PipeSpawned { id, mut top, mut bottom } => {
                    // Spawned before this tick's translation
                    let dx = Vec2::new(self.state.config.pipes.x_speed, 0.0);
                    top.translate(dx);
                    bottom.translate(dx);
                    let handles = PipeHandles {
                        top: self.scene.spawn_rect(top),
                        bottom: self.scene.spawn_rect(bottom),
                    };
                    self.pipe_handles.insert(id, handles);
                }
                GameEvent::PipeRemoved { id } => {
                    if let Some(handles) = self.pipe_handles.remove(&id) {
                        self.scene.remove_entity(handles.top);
                        self.scene.remove_entity(handles.bottom);
                    }
                }
            }
        }
    }

    fn reset_scene(&mut self) {
        self.scene.clear();
        self.pipe_handles.clear();
        self.bird_handle = Some(self.scene.spawn_bird(self.state.bird.pos));
    }

    /// Move pipes that existed before this tick and the bird
    fn move_entities(&mut self, prev_bird_y: f32) {
        let dx = Vec2::new(self.state.config.pipes.x_speed, 0.0);
        for handles in self.pipe_handles.values() {
            self.scene.move_entity(handles.top, dx);
            self.scene.move_entity(handles.bottom, dx);
        }
        if let Some(bird) = self.bird_handle {
            let dy = self.state.bird.pos.y - prev_bird_y;
            self.scene.move_entity(bird, Vec2::new(0.0, dy));
        }
    }
}
