//! Scene flow and main menu backdrop
//!
//! MainMenu -> Game -> GameOver. The host engine owns the actual scenes;
//! this decides when to switch and hands it the menu's falling-brick
//! parameters.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::RoundOutcome;

/// Which scene the host should be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    MainMenu,
    Game,
    /// Holds the outcome of the round that just ended
    GameOver(RoundOutcome),
}

/// Scene state machine
#[derive(Debug, Clone)]
pub struct SceneFlow {
    scene: Scene,
}

impl Default for SceneFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneFlow {
    pub fn new() -> Self {
        Self {
            scene: Scene::MainMenu,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Pointer pressed. Only the menu reacts: it starts the game once.
    pub fn pointer_down(&mut self) -> bool {
        if self.scene != Scene::MainMenu {
            return false;
        }
        self.switch(Scene::Game)
    }

    /// Feed the running match's outcome; a finished round ends the game scene
    pub fn observe(&mut self, outcome: RoundOutcome) -> bool {
        if self.scene != Scene::Game || outcome == RoundOutcome::Ongoing {
            return false;
        }
        self.switch(Scene::GameOver(outcome))
    }

    /// Play again from the game over screen
    pub fn restart(&mut self) -> bool {
        if !matches!(self.scene, Scene::GameOver(_)) {
            return false;
        }
        self.switch(Scene::Game)
    }

    /// Back to the title from the game over screen
    pub fn to_menu(&mut self) -> bool {
        if !matches!(self.scene, Scene::GameOver(_)) {
            return false;
        }
        self.switch(Scene::MainMenu)
    }

    fn switch(&mut self, next: Scene) -> bool {
        log::info!("Scene {:?} -> {:?}", self.scene, next);
        self.scene = next;
        true
    }
}

/// Number of bricks falling behind the title
pub const MENU_BRICK_COUNT: usize = 50;
/// Bricks spawn at x in [0, MENU_WIDTH]
pub const MENU_WIDTH: i32 = 1024;
/// Bricks spawn just above the screen, y in [-100, -50]
pub const MENU_SPAWN_Y: (i32, i32) = (-100, -50);
/// Bricks fall until this y
pub const MENU_FALL_TO_Y: f32 = 800.0;
/// Fall duration range (ms)
pub const MENU_FALL_MS: (u32, u32) = (3000, 7000);
pub const MENU_BRICK_SIZE: (f32, f32) = (80.0, 20.0);
pub const MENU_BRICK_ALPHA: f32 = 0.5;

/// One decorative brick: where it starts and how long it takes to fall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingBrick {
    pub x: f32,
    pub y: f32,
    /// RGB
    pub color: u32,
    pub fall_ms: u32,
}

/// The falling bricks behind the main menu title
#[derive(Debug, Clone)]
pub struct MenuBackdrop {
    pub bricks: Vec<FallingBrick>,
    rng: Pcg32,
}

impl MenuBackdrop {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = (0..MENU_BRICK_COUNT)
            .map(|_| {
                let (x, y) = spawn_point(&mut rng);
                FallingBrick {
                    x,
                    y,
                    color: rng.random::<u32>() & 0xFF_FFFF,
                    fall_ms: rng.random_range(MENU_FALL_MS.0..=MENU_FALL_MS.1),
                }
            })
            .collect();
        Self { bricks, rng }
    }

    /// Brick `index` finished its fall: move it back above the screen
    pub fn respawn(&mut self, index: usize) -> Option<&FallingBrick> {
        let (x, y) = spawn_point(&mut self.rng);
        let brick = self.bricks.get_mut(index)?;
        brick.x = x;
        brick.y = y;
        Some(&*brick)
    }
}

fn spawn_point(rng: &mut Pcg32) -> (f32, f32) {
    let x = rng.random_range(0..=MENU_WIDTH) as f32;
    let y = rng.random_range(MENU_SPAWN_Y.0..=MENU_SPAWN_Y.1) as f32;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_spawn_area(brick: &FallingBrick) -> bool {
        (0.0..=MENU_WIDTH as f32).contains(&brick.x)
            && (MENU_SPAWN_Y.0 as f32..=MENU_SPAWN_Y.1 as f32).contains(&brick.y)
    }

    #[test]
    fn test_scene_flow() {
        let mut flow = SceneFlow::new();
        assert_eq!(flow.scene(), Scene::MainMenu);
        assert!(!flow.observe(RoundOutcome::Won));

        assert!(flow.pointer_down());
        assert_eq!(flow.scene(), Scene::Game);
        // Menu only listens once
        assert!(!flow.pointer_down());

        assert!(!flow.observe(RoundOutcome::Ongoing));
        assert!(flow.observe(RoundOutcome::Lost));
        assert_eq!(flow.scene(), Scene::GameOver(RoundOutcome::Lost));

        assert!(flow.restart());
        assert_eq!(flow.scene(), Scene::Game);
        assert!(!flow.restart());
        assert!(!flow.to_menu());

        flow.observe(RoundOutcome::Won);
        assert!(flow.to_menu());
        assert_eq!(flow.scene(), Scene::MainMenu);
    }

    #[test]
    fn test_backdrop_bounds() {
        let backdrop = MenuBackdrop::new(42);
        assert_eq!(backdrop.bricks.len(), MENU_BRICK_COUNT);
        for brick in &backdrop.bricks {
            assert!(in_spawn_area(brick));
            assert!((MENU_FALL_MS.0..=MENU_FALL_MS.1).contains(&brick.fall_ms));
            assert!(brick.color <= 0xFF_FFFF);
        }
    }

    #[test]
    fn test_backdrop_is_seeded() {
        let a = MenuBackdrop::new(7);
        let b = MenuBackdrop::new(7);
        let key = |m: &MenuBackdrop| -> Vec<(f32, f32, u32, u32)> {
            m.bricks.iter().map(|b| (b.x, b.y, b.color, b.fall_ms)).collect()
        };
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn test_respawn_keeps_color_and_speed() {
        let mut backdrop = MenuBackdrop::new(3);
        let before = backdrop.bricks[5].clone();
        let after = backdrop.respawn(5).cloned().expect("brick 5 exists");
        assert!(in_spawn_area(&after));
        assert_eq!(after.color, before.color);
        assert_eq!(after.fall_ms, before.fall_ms);
        assert!(backdrop.respawn(MENU_BRICK_COUNT).is_none());
    }
}
