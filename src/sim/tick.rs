//! Fixed timestep simulation tick
//!
//! One tick: maybe spawn, translate pipes, cull, integrate the bird, then
//! evaluate collisions and scoring on the post-move state.

use super::collision::{self, CollisionVerdict};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one fixed tick. Does nothing unless actively playing.
pub fn tick(state: &mut GameState) -> CollisionVerdict {
    if state.phase != GamePhase::Playing {
        return CollisionVerdict::clear();
    }

    state.time_ticks += 1;

    let spawned = state
        .spawner
        .tick()
        .and_then(|_| state.spawner.pipes().last())
        .map(|pipe| GameEvent::PipeSpawned {
            id: pipe.id,
            top: pipe.top,
            bottom: pipe.bottom,
        });
    if let Some(event) = spawned {
        state.push_event(event);
    }

    state.spawner.translate();
    for id in state.spawner.cull() {
        state.push_event(GameEvent::PipeRemoved { id });
    }

    state.bird.integrate(state.field.ceiling_y);

    if let Err(violation) = state.check_invariants() {
        state.abort(violation);
        return CollisionVerdict::clear();
    }

    let verdict = collision::evaluate(&state.bird, state.spawner.pipes_mut(), &state.field);

    for _ in &verdict.scored {
        state.score.record_pass();
    }
    if !verdict.scored.is_empty() {
        let event = GameEvent::ScoreChanged {
            current: state.score.current,
            best: state.score.best,
        };
        state.push_event(event);
    }

    if verdict.collided {
        state.enter_game_over();
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::InputEvent;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(GameConfig::default(), seed).unwrap();
        state.apply_input(InputEvent::Start);
        state.apply_input(InputEvent::Jump);
        state.drain_events();
        state
    }

    #[test]
    fn test_ready_does_not_tick() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.apply_input(InputEvent::Start);
        let bird = state.bird.clone();
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.bird, bird);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.phase, GamePhase::Ready);
    }

    #[test]
    fn test_game_over_freezes() {
        let mut state = playing_state(1);
        state.enter_game_over();
        let y = state.bird.pos.y;
        tick(&mut state);
        assert_eq!(state.bird.pos.y, y);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_spawned_pipe_moves_same_tick() {
        let mut state = playing_state(5);
        // Keep the bird aloft long enough for the first spawn
        let mut spawned = None;
        for _ in 0..167 {
            if state.bird.velocity_y > 0.0 && state.bird.pos.y > 300.0 {
                state.apply_input(InputEvent::Jump);
            }
            tick(&mut state);
            for event in state.drain_events() {
                if let GameEvent::PipeSpawned { id, top, .. } = event {
                    spawned = Some((id, top));
                }
            }
        }
        let (id, top) = spawned.expect("pipe spawned on tick 167");
        assert_eq!(id, 1);
        // Reported at the spawn position, then translated once
        assert_eq!(top.x0, 485.0);
        let live = &state.spawner.pipes()[0];
        assert!((live.x0() - 482.4).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_bird_aborts_to_menu() {
        let mut state = playing_state(1);
        state.bird.velocity_y = f32::INFINITY;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(matches!(
            state.drain_events().last(),
            Some(GameEvent::SessionAborted { .. })
        ));
    }

    #[test]
    fn test_broken_gap_aborts_to_menu() {
        let mut state = playing_state(1);
        state.spawner.spawn_with_top_edge(200.0);
        state.spawner.pipes_mut()[0].bottom.y0 += 5.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state(99999);
        let mut b = playing_state(99999);
        for i in 0..600 {
            if i % 20 == 0 {
                a.apply_input(InputEvent::Jump);
                b.apply_input(InputEvent::Jump);
            }
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.bird, b.bird);
        assert_eq!(a.spawner.pipes(), b.spawner.pipes());
        assert_eq!(a.drain_events(), b.drain_events());
    }
}
