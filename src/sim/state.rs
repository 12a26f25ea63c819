//! Match state and core simulation types
//!
//! Everything one round needs lives in `MatchState`. The host engine reads
//! it back through `snapshot()` for rendering and body sync.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{BlockId, BrickField, HitOutcome, layout_grid};
use super::paddle::Paddle;
use super::physics::{Reflection, launch_velocity};
use crate::settings::GameConfig;

/// How a round ended (or that it hasn't)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Ongoing,
    Won,
    Lost,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball resting on the paddle, waiting for launch input
    Idle,
    /// Ball moving
    InPlay,
    /// Round finished; nothing reacts until a new match is created
    RoundOver(RoundOutcome),
}

/// Something the host may want to react to (sound, particles, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Notice {
    /// Ball left the paddle at round start
    Launched { vel: Vec2 },
    /// A block took a hit
    BlockHit { id: BlockId, outcome: HitOutcome },
    /// Ball changed direction off the paddle or a wall
    Deflected { vel: Vec2 },
    /// Round ended
    RoundOver(RoundOutcome),
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Magnitude of every launch and paddle deflection
    pub speed: f32,
    /// False while resting on the paddle
    pub in_play: bool,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
            in_play: false,
        }
    }

    /// Sit on top of the paddle, centered
    pub fn rest_on(&mut self, paddle: &Paddle, height: f32) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - height);
        self.vel = Vec2::ZERO;
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    pub phase: MatchPhase,
    pub field: BrickField,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    reflection: Reflection,
    /// Launch-angle source
    rng: Pcg32,
    notices: Vec<Notice>,
}

impl MatchState {
    /// Lay out the grid and rest the ball on a centered paddle
    pub fn new(config: GameConfig) -> Self {
        let field = layout_grid(
            config.grid.rows,
            config.grid.cols,
            &config.catalog,
            &config.grid,
        );
        let paddle = Paddle::centered(
            config.field_width,
            config.paddle_y,
            config.paddle_width,
            config.paddle_height,
        );
        let mut ball = Ball::new(config.ball_radius, config.ball_speed);
        ball.rest_on(&paddle, config.launch_height);

        log::info!(
            "New round: {} blocks, seed {}",
            field.len(),
            config.seed
        );

        Self {
            reflection: Reflection::from_config(&config),
            rng: Pcg32::seed_from_u64(config.seed),
            phase: MatchPhase::Idle,
            field,
            paddle,
            ball,
            time_ticks: 0,
            notices: Vec::new(),
            config,
        }
    }

    /// Won/lost once the round is over, otherwise ongoing
    pub fn outcome(&self) -> RoundOutcome {
        match self.phase {
            MatchPhase::RoundOver(outcome) => outcome,
            _ => RoundOutcome::Ongoing,
        }
    }

    pub fn reflection(&self) -> Reflection {
        self.reflection
    }

    /// Launch with an angle drawn from the seeded RNG.
    ///
    /// Returns false (and does nothing) unless the match is idle.
    pub fn launch_ball(&mut self) -> bool {
        if self.phase != MatchPhase::Idle {
            return false;
        }
        let half = self.config.launch_half_angle;
        let angle = self.rng.random_range(-half..=half);
        self.launch_ball_at(angle)
    }

    /// Launch at `angle` degrees off straight up
    pub fn launch_ball_at(&mut self, angle: f32) -> bool {
        if self.phase != MatchPhase::Idle {
            return false;
        }
        self.ball.rest_on(&self.paddle, self.config.launch_height);
        self.ball.vel = launch_velocity(angle, self.ball.speed);
        self.ball.in_play = true;
        self.phase = MatchPhase::InPlay;
        log::debug!("Ball launched at {:.1} degrees", angle);
        self.notices.push(Notice::Launched { vel: self.ball.vel });
        true
    }

    /// End the round (no-op if it already ended)
    pub(crate) fn finish(&mut self, outcome: RoundOutcome) {
        if matches!(self.phase, MatchPhase::RoundOver(_)) {
            return;
        }
        self.phase = MatchPhase::RoundOver(outcome);
        self.ball.in_play = false;
        log::info!(
            "Round over: {:?} with {} in wallet",
            outcome,
            self.field.wallet().balance()
        );
        self.notices.push(Notice::RoundOver(outcome));
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Take every notice raised since the last drain
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Render/body-sync view of the match
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            outcome: self.outcome(),
            wallet: self.field.wallet().balance(),
            blocks: self
                .field
                .iter()
                .map(|b| {
                    let block_type = self.field.block_type(b);
                    BlockView {
                        id: b.id,
                        row: b.row,
                        col: b.col,
                        pos: b.pos,
                        hp: b.hp,
                        total_hp: b.total_hp,
                        name: block_type.name.clone(),
                        color: block_type.color,
                    }
                })
                .collect(),
            paddle: PaddleView {
                x: self.paddle.x,
                y: self.paddle.y,
                width: self.paddle.width,
                height: self.paddle.height,
                vel: self.paddle.vel,
            },
            ball: BallView {
                pos: self.ball.pos,
                vel: self.ball.vel,
                radius: self.ball.radius,
                in_play: self.ball.in_play,
            },
        }
    }
}

/// A live block as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockView {
    pub id: BlockId,
    pub row: u32,
    pub col: u32,
    pub pos: Vec2,
    pub hp: u32,
    pub total_hp: u32,
    pub name: String,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vel: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub in_play: bool,
}

/// Everything the host engine needs to draw and sync one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: MatchPhase,
    pub outcome: RoundOutcome,
    pub wallet: u64,
    pub blocks: Vec<BlockView>,
    pub paddle: PaddleView,
    pub ball: BallView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle_from_vertical;

    #[test]
    fn test_new_match_is_idle_with_ball_on_paddle() {
        let state = MatchState::new(GameConfig::default());
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.outcome(), RoundOutcome::Ongoing);
        assert_eq!(state.field.len(), 40);
        assert!(!state.ball.in_play);
        assert_eq!(state.ball.pos, Vec2::new(512.0, 680.0));
    }

    #[test]
    fn test_launch_enters_play_at_speed() {
        let mut state = MatchState::new(GameConfig::default());
        assert!(state.launch_ball());
        assert_eq!(state.phase, MatchPhase::InPlay);
        assert_eq!(state.outcome(), RoundOutcome::Ongoing);
        assert!(!state.field.is_cleared());
        assert!(state.ball.in_play);
        assert!((state.ball.vel.length() - 300.0).abs() < 0.01);
        let angle = angle_from_vertical(state.ball.vel);
        assert!((-45.0..=45.0).contains(&angle));

        // Second launch is ignored
        let vel = state.ball.vel;
        assert!(!state.launch_ball());
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_launch_angle_is_seeded() {
        let angles = |seed: u64| -> Vec<f32> {
            (0..5)
                .map(|_| {
                    let mut state = MatchState::new(GameConfig::default().with_seed(seed));
                    state.launch_ball();
                    angle_from_vertical(state.ball.vel)
                })
                .collect()
        };
        assert_eq!(angles(7), angles(7));
    }

    #[test]
    fn test_explicit_launch_angle() {
        let mut state = MatchState::new(GameConfig::default());
        state.launch_ball_at(0.0);
        assert!(state.ball.vel.x.abs() < 0.001);
        assert!((state.ball.vel.y + 300.0).abs() < 0.001);
        assert_eq!(
            state.drain_notices(),
            vec![Notice::Launched { vel: state.ball.vel }]
        );
        assert!(state.drain_notices().is_empty());
    }

    #[test]
    fn test_finish_only_once() {
        let mut state = MatchState::new(GameConfig::default());
        state.launch_ball_at(0.0);
        state.finish(RoundOutcome::Lost);
        state.finish(RoundOutcome::Won);
        assert_eq!(state.outcome(), RoundOutcome::Lost);
        assert!(!state.launch_ball());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = MatchState::new(GameConfig::default());
        let snapshot = state.snapshot();
        assert_eq!(snapshot.blocks.len(), 40);
        assert_eq!(snapshot.blocks[0].name, "DirtBlock");
        let json = serde_json::to_string(&snapshot).expect("snapshot should serialize");
        assert!(json.contains("\"wallet\":0"));
        assert!(json.contains("\"Idle\""));
    }
}
