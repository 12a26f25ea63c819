//! Host engine physics callbacks
//!
//! The host detects contacts and reports them as `GameEvent`s; this module
//! turns each one into a state change. Events arriving outside `InPlay` are
//! dropped.

use serde::{Deserialize, Serialize};

use super::grid::{BlockId, HitOutcome};
use super::physics::{Wall, reflect_off_wall};
use super::state::{MatchPhase, MatchState, Notice, RoundOutcome};

/// A contact or boundary crossing reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball touched a live block
    BlockHit(BlockId),
    /// Ball touched the paddle
    PaddleHit,
    /// Ball touched the left, right or top boundary
    WallHit(Wall),
    /// Ball crossed the bottom boundary
    BallLeftField,
}

/// Apply a single event. Returns true if it changed the match.
pub fn handle_event(state: &mut MatchState, event: GameEvent) -> bool {
    if state.phase != MatchPhase::InPlay {
        log::trace!("Ignoring {:?} in {:?}", event, state.phase);
        return false;
    }

    match event {
        GameEvent::BlockHit(id) => {
            let Some(outcome) = state.field.apply_hit(id) else {
                return false;
            };
            state.notify(Notice::BlockHit { id, outcome });
            if matches!(outcome, HitOutcome::Destroyed { .. }) && state.field.is_cleared() {
                state.finish(RoundOutcome::Won);
            }
        }

        GameEvent::PaddleHit => {
            let reflection = state.reflection();
            state.ball.vel = reflection.velocity(
                state.ball.pos.x,
                state.paddle.center_x(),
                state.paddle.width,
                state.ball.speed,
            );
            state.notify(Notice::Deflected {
                vel: state.ball.vel,
            });
        }

        GameEvent::WallHit(wall) => {
            let vel = reflect_off_wall(state.ball.vel, wall);
            if vel == state.ball.vel {
                return false;
            }
            state.ball.vel = vel;
            state.notify(Notice::Deflected { vel });
        }

        GameEvent::BallLeftField => {
            state.finish(RoundOutcome::Lost);
        }
    }

    true
}

/// Apply every event gathered during one physics step.
///
/// A block reported more than once in the same step takes a single hit.
/// Returns how many events changed the match.
pub fn handle_events(state: &mut MatchState, events: &[GameEvent]) -> usize {
    let mut hit_this_step: Vec<BlockId> = Vec::new();
    let mut applied = 0;

    for &event in events {
        if let GameEvent::BlockHit(id) = event {
            if hit_this_step.contains(&id) {
                log::trace!("Duplicate hit on {:?} in one step", id);
                continue;
            }
            hit_this_step.push(id);
        }
        if handle_event(state, event) {
            applied += 1;
        }
    }

    applied
}
