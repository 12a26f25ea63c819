//! Block Pop - A brick-breaker game core
//!
//! Core modules:
//! - `sim`: Deterministic match logic (brick grid, wallet, paddle, ball)
//! - `scene`: Menu -> game -> game over flow and the menu backdrop
//! - `settings`: Data-driven game configuration
//! - `platform`: Host engine bindings (wasm32)

pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{MenuBackdrop, Scene, SceneFlow};
pub use settings::{ConfigError, GameConfig, ReflectionPolicy};

use glam::Vec2;

/// Game configuration defaults (1024x768 play field)
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Top edge of the paddle
    pub const PADDLE_Y: f32 = 690.0;
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 300.0;
    /// Gap between paddle top and ball center when resting or launching
    pub const LAUNCH_HEIGHT: f32 = 10.0;

    /// Launch angle is drawn from [-45, 45] degrees off straight up
    pub const LAUNCH_HALF_ANGLE: f32 = 45.0;
    /// Degrees of deflection per paddle width of contact offset
    pub const REFLECT_ANGLE_SCALE: f32 = 60.0;
    /// Saturation angle when reflection clamping is enabled
    pub const MAX_REFLECT_ANGLE: f32 = 60.0;

    /// Brick grid defaults
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 8;
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
}

/// Convert an angle in degrees to a velocity of the given magnitude.
///
/// Screen space is y-down, so -90 degrees points straight up.
#[inline]
pub fn velocity_from_angle(degrees: f32, speed: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(theta.cos() * speed, theta.sin() * speed)
}

/// Angle of a velocity in degrees, measured off straight up (positive = right)
#[inline]
pub fn angle_from_vertical(vel: Vec2) -> f32 {
    vel.x.atan2(-vel.y).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_angle_straight_up() {
        let v = velocity_from_angle(-90.0, 300.0);
        assert!(v.x.abs() < 0.001);
        assert!((v.y + 300.0).abs() < 0.001);
    }

    #[test]
    fn test_angle_from_vertical() {
        let v = velocity_from_angle(-60.0, 10.0);
        assert!((angle_from_vertical(v) - 30.0).abs() < 0.001);
        assert!(angle_from_vertical(Vec2::new(0.0, -1.0)).abs() < 0.001);
    }
}
