//! Collision and pass-through detection
//!
//! Evaluated on the post-move state of a tick: pipes have already been
//! translated and the bird integrated. Touching the ceiling is not a
//! collision; the bird bounces off it during integration instead.

use super::bird::Bird;
use super::geometry::PlayField;
use super::pipes::{PipeId, PipePair};

/// Outcome of evaluating one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionVerdict {
    /// Bird overlapped a pipe or fell below the ground
    pub collided: bool,
    /// Pairs that were passed for the first time this tick
    pub scored: Vec<PipeId>,
}

impl CollisionVerdict {
    pub fn clear() -> Self {
        Self::default()
    }
}

/// True if the bird's box overlaps either half of the pair
pub fn bird_hits_pipe(bird: &Bird, pipe: &PipePair) -> bool {
    let bounds = bird.bounds();
    bounds.overlaps(&pipe.top) || bounds.overlaps(&pipe.bottom)
}

/// True once the bird's position is below the ground line
pub fn bird_below_ground(bird: &Bird, field: &PlayField) -> bool {
    bird.pos.y > field.ground_y
}

/// Evaluate the bird against every live pair and the ground.
///
/// A pair scores the first tick its left edge is behind the bird, unless the
/// bird is overlapping that same pair; the pair's `scored` flag is set so it
/// never scores again.
pub fn evaluate(bird: &Bird, pipes: &mut [PipePair], field: &PlayField) -> CollisionVerdict {
    let mut verdict = CollisionVerdict::clear();

    for pipe in pipes.iter_mut() {
        if bird_hits_pipe(bird, pipe) {
            verdict.collided = true;
            continue;
        }
        if !pipe.scored && pipe.x0() < bird.pos.x {
            pipe.scored = true;
            verdict.scored.push(pipe.id);
        }
    }

    if bird_below_ground(bird, field) {
        verdict.collided = true;
    }

    verdict
}
