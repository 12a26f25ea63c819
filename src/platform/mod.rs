//! Host engine glue
//!
//! `Session` is what a host engine talks to: it buffers raw input and
//! physics callbacks between frames, runs the match on a fixed timestep and
//! keeps the scene flow in step with the round outcome.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::scene::{MenuBackdrop, Scene, SceneFlow};
use crate::settings::GameConfig;
use crate::sim::{Direction, GameEvent, MatchState, handle_events, tick, TickInput};

/// One player's run: menu, rounds and game over screens
pub struct Session {
    pub flow: SceneFlow,
    pub state: MatchState,
    pub backdrop: MenuBackdrop,
    config: GameConfig,
    input: TickInput,
    pending: Vec<GameEvent>,
    accumulator: f32,
    rounds: u64,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            flow: SceneFlow::new(),
            state: MatchState::new(config.clone()),
            backdrop: MenuBackdrop::new(config.seed),
            config,
            input: TickInput::default(),
            pending: Vec::new(),
            accumulator: 0.0,
            rounds: 1,
        }
    }

    pub fn scene(&self) -> Scene {
        self.flow.scene()
    }

    /// Rounds started so far (including the current one)
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.input.pointer_move = Some(x);
    }

    /// Press: leaves the menu, launches the ball, or starts the next round
    pub fn pointer_down(&mut self, x: f32) {
        match self.flow.scene() {
            Scene::MainMenu => {
                self.flow.pointer_down();
            }
            Scene::Game => {
                self.input.launch = true;
                self.input.pointer_held = Some(x);
            }
            Scene::GameOver(_) => {
                if self.flow.restart() {
                    self.new_round();
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_held = None;
    }

    pub fn key(&mut self, direction: Direction, down: bool) {
        match direction {
            Direction::Left => self.input.left = down,
            Direction::Right => self.input.right = down,
        }
    }

    /// Queue a physics callback for the next simulation step
    pub fn report(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Advance by a frame of `dt` seconds. Returns the number of steps run.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.flow.scene() != Scene::Game {
            self.pending.clear();
            return 0;
        }

        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = std::mem::take(&mut self.pending);
            handle_events(&mut self.state, &events);
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = false;
            self.input.pointer_move = None;
        }

        self.flow.observe(self.state.outcome());
        substeps
    }

    fn new_round(&mut self) {
        let seed = self.config.seed.wrapping_add(self.rounds);
        self.rounds += 1;
        self.state = MatchState::new(self.config.clone().with_seed(seed));
        self.input = TickInput::default();
        self.pending.clear();
        self.accumulator = 0.0;
    }
}
