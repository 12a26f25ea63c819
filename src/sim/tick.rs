//! Per-frame simulation tick
//!
//! Applies player input, moves the paddle and ball, and checks the win and
//! loss conditions the core can see on its own.

use super::paddle::{Direction, PaddleCommand};
use super::state::{MatchPhase, MatchState, RoundOutcome};

/// Input sampled by the host for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Launch request (click/tap/space)
    pub launch: bool,
    /// Pointer moved to this x since the last tick
    pub pointer_move: Option<f32>,
    /// Pointer is held down at this x
    pub pointer_held: Option<f32>,
    /// Keyboard left (arrow or A)
    pub left: bool,
    /// Keyboard right (arrow or D)
    pub right: bool,
}

/// Pick the paddle command for this tick.
///
/// Sources are evaluated in a fixed order and the last active one wins:
/// 1. pointer move (follow the pointer)
/// 2. pointer held (push toward the pointer's half of the field)
/// 3. keyboard (left takes precedence over right)
pub fn resolve_paddle_command(input: &TickInput, field_width: f32) -> PaddleCommand {
    let mut command = PaddleCommand::Hold;

    if let Some(x) = input.pointer_move {
        command = PaddleCommand::Follow(x);
    }

    if let Some(x) = input.pointer_held {
        let direction = if x < field_width / 2.0 {
            Direction::Left
        } else {
            Direction::Right
        };
        command = PaddleCommand::Push(direction);
    }

    if input.left {
        command = PaddleCommand::Push(Direction::Left);
    } else if input.right {
        command = PaddleCommand::Push(Direction::Right);
    }

    command
}

/// Advance the match by `dt` seconds
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    if matches!(state.phase, MatchPhase::RoundOver(_)) {
        return;
    }

    state.time_ticks += 1;

    let command = resolve_paddle_command(input, state.config.field_width);
    state
        .paddle
        .apply(command, state.config.field_width, state.config.paddle_speed, dt);

    match state.phase {
        MatchPhase::Idle => {
            // Ball rides the paddle until launch
            state.ball.rest_on(&state.paddle, state.config.launch_height);

            if input.launch {
                state.launch_ball();
            }
        }

        MatchPhase::InPlay => {
            state.ball.pos += state.ball.vel * dt;

            // Fully below the field: the host may not report it in time
            if state.ball.pos.y - state.ball.radius > state.config.field_height {
                state.finish(RoundOutcome::Lost);
                return;
            }

            if state.field.is_cleared() {
                state.finish(RoundOutcome::Won);
            }
        }

        MatchPhase::RoundOver(_) => {}
    }
}
