//! Pipe pairs and their spawner
//!
//! Spawning is driven by an elapsed-time accumulator in milliseconds: each tick
//! adds the tick period, and once a full interval has accumulated one pair is
//! spawned and the interval is subtracted, carrying the remainder forward.
//! This yields exactly one pair per interval no matter how the interval
//! divides into ticks.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{PlayField, Rect};
use crate::config::{GameConfig, PipeConfig};
use crate::error::{ConfigError, InvariantViolation};

/// Identifier of a pipe pair, assigned in spawn order
pub type PipeId = u32;

/// A top and bottom obstacle separated by a fixed gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub id: PipeId,
    /// Spans from the top edge of the field down to the gap
    pub top: Rect,
    /// Spans from the gap down to the bottom edge of the field
    pub bottom: Rect,
    /// Set once the bird has passed this pair
    pub scored: bool,
}

impl PipePair {
    pub fn x0(&self) -> f32 {
        self.top.x0
    }

    pub fn x1(&self) -> f32 {
        self.top.x1
    }

    pub fn gap(&self) -> f32 {
        self.bottom.y0 - self.top.y1
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self) -> f32 {
        (self.top.y1 + self.bottom.y0) / 2.0
    }

    /// Fully past the left edge of the field
    pub fn is_off_field(&self) -> bool {
        self.x1() < 0.0
    }

    fn translate(&mut self, dx: f32) {
        let delta = Vec2::new(dx, 0.0);
        self.top.translate(delta);
        self.bottom.translate(delta);
    }
}

/// Owns the live pipe pairs, oldest first
#[derive(Debug, Clone)]
pub struct PipeSpawner {
    config: PipeConfig,
    field: PlayField,
    tick_period_ms: u32,
    /// Inclusive range for the top edge of the gap
    top_edge_range: (u32, u32),
    /// Milliseconds accumulated toward the next spawn
    elapsed_ms: u32,
    rng: Pcg32,
    pipes: Vec<PipePair>,
    next_id: PipeId,
}

impl PipeSpawner {
    /// Build a spawner with an injected random source.
    ///
    /// Fails if the gap placement range is empty, so spawning itself can never
    /// produce a malformed pair.
    pub fn new(config: &GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;
        let pipes = &config.pipes;
        let top_edge_range = pipes
            .top_edge_range(config.field.height)
            .ok_or(ConfigError::EmptyGapRange {
                min: i64::from(pipes.min_offset_from_ceiling),
                max: i64::from(config.field.height)
                    - i64::from(pipes.bottom_offset_from_ground)
                    - i64::from(pipes.gap),
            })?;

        Ok(Self {
            config: pipes.clone(),
            field: config.play_field(),
            tick_period_ms: config.tick_period_ms,
            top_edge_range,
            elapsed_ms: 0,
            rng,
            pipes: Vec::new(),
            next_id: 1,
        })
    }

    /// Live pairs, oldest first
    pub fn pipes(&self) -> &[PipePair] {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut [PipePair] {
        &mut self.pipes
    }

    /// Number of pairs spawned since construction
    pub fn spawned_total(&self) -> u32 {
        self.next_id - 1
    }

    /// Milliseconds accumulated toward the next spawn
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn gap(&self) -> f32 {
        self.config.gap as f32
    }

    /// Advance the spawn clock by one tick, spawning a pair if an interval
    /// has elapsed
    pub fn tick(&mut self) -> Option<PipeId> {
        self.elapsed_ms += self.tick_period_ms;
        if self.elapsed_ms < self.config.spawn_interval_ms {
            return None;
        }
        self.elapsed_ms -= self.config.spawn_interval_ms;
        Some(self.spawn())
    }

    /// Spawn a pair at the right edge with a random gap placement
    pub fn spawn(&mut self) -> PipeId {
        let (min, max) = self.top_edge_range;
        let top_edge = self.rng.random_range(min..=max);
        self.spawn_with_top_edge(top_edge as f32)
    }

    /// Spawn a pair at the right edge whose gap starts at `top_edge`
    pub fn spawn_with_top_edge(&mut self, top_edge: f32) -> PipeId {
        let id = self.next_id;
        self.next_id += 1;

        let x0 = self.field.width;
        let x1 = x0 + self.config.width;
        let bottom_edge = top_edge + self.config.gap as f32;

        self.pipes.push(PipePair {
            id,
            top: Rect::new(x0, 0.0, x1, top_edge),
            bottom: Rect::new(x0, bottom_edge, x1, self.field.height),
            scored: false,
        });
        log::debug!("Spawned pipe {} with gap at y={}", id, top_edge);
        id
    }

    /// Scroll every live pair left by the configured speed
    pub fn translate(&mut self) {
        let dx = self.config.x_speed;
        for pipe in &mut self.pipes {
            pipe.translate(dx);
        }
    }

    /// Drop pairs that have left the field; returns their ids
    pub fn cull(&mut self) -> Vec<PipeId> {
        let mut removed = Vec::new();
        self.pipes.retain(|p| {
            if p.is_off_field() {
                removed.push(p.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove every live pair and restart the spawn clock
    pub fn clear(&mut self) {
        self.pipes.clear();
        self.elapsed_ms = 0;
    }

    /// Check every live pair still has the configured gap
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let expected = self.gap();
        for pipe in &self.pipes {
            let actual = pipe.gap();
            if (actual - expected).abs() > 1e-3 {
                return Err(InvariantViolation::GapMismatch {
                    id: pipe.id,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn spawner(config: &GameConfig, seed: u64) -> PipeSpawner {
        PipeSpawner::new(config, Pcg32::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_gap_range() {
        let mut config = GameConfig::default();
        config.pipes.min_offset_from_ceiling = 500;
        let result = PipeSpawner::new(&config, Pcg32::seed_from_u64(1));
        assert!(matches!(result, Err(ConfigError::EmptyGapRange { .. })));
    }

    #[test]
    fn test_spawn_at_right_edge() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 7);
        let id = spawner.spawn_with_top_edge(200.0);
        let pipe = &spawner.pipes()[0];

        assert_eq!(pipe.id, id);
        assert_eq!(pipe.top, Rect::new(485.0, 0.0, 570.0, 200.0));
        assert_eq!(pipe.bottom, Rect::new(485.0, 320.0, 570.0, 640.0));
        assert_eq!(pipe.gap(), 120.0);
        assert!(!pipe.scored);
    }

    #[test]
    fn test_first_spawn_after_one_interval() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 1);
        // 2500 / 15 = 166.67, so the 167th tick crosses the interval
        for _ in 0..166 {
            assert_eq!(spawner.tick(), None);
        }
        assert_eq!(spawner.tick(), Some(1));
        // Remainder carried: 167 * 15 - 2500 = 5
        assert_eq!(spawner.elapsed_ms(), 5);
    }

    #[test]
    fn test_translate_moves_pair_together() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 1);
        spawner.spawn_with_top_edge(150.0);
        for _ in 0..10 {
            spawner.translate();
        }
        let pipe = &spawner.pipes()[0];
        assert_eq!(pipe.top.x0, pipe.bottom.x0);
        assert_eq!(pipe.top.x1, pipe.bottom.x1);
        assert!((pipe.x0() - (485.0 - 26.0)).abs() < 1e-3);
        assert_eq!(pipe.gap(), 120.0);
        assert_eq!(pipe.top.y1, 150.0);
    }

    #[test]
    fn test_cull_removes_only_off_field_pairs() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 1);
        let old = spawner.spawn_with_top_edge(100.0);
        spawner.pipes_mut()[0].top.x0 = -90.0;
        spawner.pipes_mut()[0].top.x1 = -5.0;
        let young = spawner.spawn_with_top_edge(100.0);

        assert_eq!(spawner.cull(), vec![old]);
        assert_eq!(spawner.pipes().len(), 1);
        assert_eq!(spawner.pipes()[0].id, young);
    }

    #[test]
    fn test_pair_at_left_edge_is_kept() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 1);
        spawner.spawn_with_top_edge(100.0);
        spawner.pipes_mut()[0].top.x1 = 0.0;
        assert!(spawner.cull().is_empty());
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let config = GameConfig::default();
        let mut a = spawner(&config, 42);
        let mut b = spawner(&config, 42);
        for _ in 0..20 {
            a.spawn();
            b.spawn();
        }
        assert_eq!(a.pipes(), b.pipes());
    }

    #[test]
    fn test_clear_resets_clock_but_not_ids() {
        let config = GameConfig::default();
        let mut spawner = spawner(&config, 3);
        for _ in 0..200 {
            spawner.tick();
        }
        spawner.clear();
        assert!(spawner.pipes().is_empty());
        assert_eq!(spawner.elapsed_ms(), 0);
        assert_eq!(spawner.spawn(), 2);
    }

    proptest! {
        #[test]
        fn prop_gap_invariant(seed in any::<u64>()) {
            let config = GameConfig::default();
            let mut spawner = spawner(&config, seed);
            for _ in 0..32 {
                spawner.spawn();
            }
            let max_top = (config.field.height
                - config.pipes.bottom_offset_from_ground
                - config.pipes.gap) as f32;
            for pipe in spawner.pipes() {
                prop_assert_eq!(pipe.bottom.y0 - pipe.top.y1, 120.0);
                prop_assert_eq!(pipe.top.y0, 0.0);
                prop_assert!(pipe.top.y1 >= config.pipes.min_offset_from_ceiling as f32);
                prop_assert!(pipe.top.y1 <= max_top);
            }
            prop_assert!(spawner.check_invariants().is_ok());
        }

        #[test]
        fn prop_spawn_cadence(ticks in 0u32..20_000, interval in 15u32..5000) {
            let mut config = GameConfig::default();
            config.pipes.spawn_interval_ms = interval;
            let mut spawner = spawner(&config, 9);
            for _ in 0..ticks {
                spawner.tick();
            }
            prop_assert_eq!(spawner.spawned_total(), ticks * config.tick_period_ms / interval);
        }
    }
}
