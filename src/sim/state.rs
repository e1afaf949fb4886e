//! Game state and the session state machine
//!
//! Menu -> Ready -> Playing -> GameOver -> Ready -> ...
//!
//! `Ready` and `Playing` together form the playing state: in `Ready` the bird
//! waits at its spawn point until the first jump, which starts ticking.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::geometry::{PlayField, Rect};
use super::pipes::{PipeId, PipeSpawner};
use crate::config::GameConfig;
use crate::error::{ConfigError, InvariantViolation};
use crate::score::Score;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start menu, no session running
    Menu,
    /// Session started, bird waiting for the first jump
    Ready,
    /// Active play, the simulation ticks
    Playing,
    /// Session ended, frozen until restart
    GameOver,
}

impl GamePhase {
    /// True for both sub-states of a running session
    pub fn is_in_session(&self) -> bool {
        matches!(self, GamePhase::Ready | GamePhase::Playing)
    }
}

/// Logical input delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Leave the menu and start a session
    Start,
    Jump,
    /// Start a new session after game over
    Restart,
}

/// Notifications produced by the simulation, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    ScoreChanged { current: u32, best: u32 },
    GameOver { current: u32, best: u32, new_best: bool },
    /// An invariant broke and the session returned to the menu
    SessionAborted { reason: String },
    PipeSpawned { id: PipeId, top: Rect, bottom: Rect },
    PipeRemoved { id: PipeId },
}

/// One game: phase, bird, pipes and score
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub field: PlayField,
    pub phase: GamePhase,
    pub bird: Bird,
    pub spawner: PipeSpawner,
    pub score: Score,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game in the menu phase with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a game in the menu phase with an injected RNG
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected game config: {}", e);
            return Err(e);
        }
        let field = config.play_field();
        let spawner = PipeSpawner::new(&config, rng)?;
        let bird = Bird::spawn(&field, &config.bird);

        Ok(Self {
            config,
            field,
            phase: GamePhase::Menu,
            bird,
            spawner,
            score: Score::new(),
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Apply a player input. Inputs that do not fit the phase are ignored.
    pub fn apply_input(&mut self, input: InputEvent) {
        match (input, self.phase) {
            (InputEvent::Start, GamePhase::Menu) => self.start_session(),
            (InputEvent::Restart, GamePhase::GameOver) => self.start_session(),
            (InputEvent::Jump, GamePhase::Ready) => {
                self.bird.jump();
                self.phase = GamePhase::Playing;
            }
            (InputEvent::Jump, GamePhase::Playing) => self.bird.jump(),
            _ => {}
        }
    }

    /// Reset bird, pipes and current score and wait for the first jump
    fn start_session(&mut self) {
        self.bird = Bird::spawn(&self.field, &self.config.bird);
        self.spawner.clear();
        self.score.reset_current();
        self.time_ticks = 0;
        self.phase = GamePhase::Ready;
        self.events.push(GameEvent::SessionStarted);
        log::info!("Session started");
    }

    pub(crate) fn enter_game_over(&mut self) {
        let new_best = self.score.finish_session();
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: score {}, best {}",
            self.time_ticks,
            self.score.current,
            self.score.best
        );
        self.events.push(GameEvent::GameOver {
            current: self.score.current,
            best: self.score.best,
            new_best,
        });
    }

    /// Abandon the session after a broken invariant
    pub(crate) fn abort(&mut self, violation: InvariantViolation) {
        log::error!("Session aborted: {}", violation);
        self.spawner.clear();
        self.phase = GamePhase::Menu;
        self.events.push(GameEvent::SessionAborted {
            reason: violation.to_string(),
        });
    }

    pub(crate) fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.bird.is_finite() {
            return Err(InvariantViolation::NonFiniteBird {
                y: self.bird.pos.y,
                velocity_y: self.bird.velocity_y,
            });
        }
        self.spawner.check_invariants()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
