//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must stay engine-agnostic:
//! - Contacts arrive as explicit `GameEvent`s
//! - Seeded RNG only
//! - Stable iteration order (by block id)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod events;
pub mod grid;
pub mod paddle;
pub mod physics;
pub mod state;
pub mod tick;

pub use catalog::{BlockType, default_catalog};
pub use events::{GameEvent, handle_event, handle_events};
pub use grid::{Block, BlockId, BrickField, HitOutcome, Wallet, layout_grid};
pub use paddle::{Direction, Paddle, PaddleCommand};
pub use physics::{Reflection, Wall, launch_velocity, reflect_off_paddle, reflect_off_wall};
pub use state::{Ball, MatchPhase, MatchState, Notice, RoundOutcome, Snapshot};
pub use tick::{TickInput, resolve_paddle_command, tick};
