//! JavaScript bindings for a browser host engine
//!
//! The JS side forwards pointer/keyboard input and physics callbacks, calls
//! `update` once per frame and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use super::Session;
use crate::scene::Scene;
use crate::settings::GameConfig;
use crate::sim::{BlockId, Direction, GameEvent, Wall};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Block Pop core loaded");
}

#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Build from a JSON config; an empty string uses the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed: f64) -> Result<WasmSession, JsError> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(Self {
            inner: Session::new(config.with_seed(seed as u64)),
        })
    }

    pub fn update(&mut self, dt: f32) -> u32 {
        self.inner.update(dt)
    }

    pub fn pointer_move(&mut self, x: f32) {
        self.inner.pointer_move(x);
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.inner.pointer_down(x);
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    /// `left` selects the key, `down` its state
    pub fn key(&mut self, left: bool, down: bool) {
        let direction = if left { Direction::Left } else { Direction::Right };
        self.inner.key(direction, down);
    }

    pub fn block_hit(&mut self, id: u32) {
        self.inner.report(GameEvent::BlockHit(BlockId(id)));
    }

    pub fn paddle_hit(&mut self) {
        self.inner.report(GameEvent::PaddleHit);
    }

    /// 0 = left, 1 = right, anything else = top
    pub fn wall_hit(&mut self, wall: u8) {
        let wall = match wall {
            0 => Wall::Left,
            1 => Wall::Right,
            _ => Wall::Top,
        };
        self.inner.report(GameEvent::WallHit(wall));
    }

    pub fn ball_left_field(&mut self) {
        self.inner.report(GameEvent::BallLeftField);
    }

    /// "MainMenu", "Game", "Won" or "Lost"
    pub fn scene(&self) -> String {
        match self.inner.scene() {
            Scene::MainMenu => "MainMenu".to_string(),
            Scene::Game => "Game".to_string(),
            Scene::GameOver(outcome) => format!("{:?}", outcome),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.state.snapshot()).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn backdrop_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.backdrop.bricks).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Brick `index` finished falling
    pub fn respawn_brick(&mut self, index: usize) {
        self.inner.backdrop.respawn(index);
    }

    /// Notices raised since the last call, as a JSON array
    pub fn drain_notices_json(&mut self) -> Result<String, JsError> {
        let notices = self.inner.state.drain_notices();
        serde_json::to_string(&notices).map_err(|e| JsError::new(&e.to_string()))
    }
}
