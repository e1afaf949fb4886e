//! Simple autopilot for demo sessions
//!
//! Only decides whether to press jump; the decision is fed back through the
//! normal input path.

use super::state::{GamePhase, GameState};

/// How far below the target height the bird may sink before jumping
const JUMP_MARGIN: f32 = 12.0;

/// Height the bird should hold: the centre of the next gap it has not yet
/// cleared, or the field centre if none is live
pub fn target_y(state: &GameState) -> f32 {
    let bird_left = state.bird.bounds().x0;
    state
        .spawner
        .pipes()
        .iter()
        .find(|p| p.x1() >= bird_left)
        .map(|p| p.gap_center())
        .unwrap_or_else(|| state.field.center().y)
}

/// Should a jump be issued before the next tick?
pub fn wants_jump(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Ready => true,
        GamePhase::Playing => {
            let bird = &state.bird;
            bird.velocity_y > 0.0 && bird.pos.y > target_y(state) + JUMP_MARGIN
        }
        GamePhase::Menu | GamePhase::GameOver => false,
    }
}
