//! Ball velocity rules: launch, paddle deflection and wall bounces
//!
//! Contact detection belongs to the host engine. These functions only turn
//! a reported contact into the ball's new velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_REFLECT_ANGLE, REFLECT_ANGLE_SCALE};
use crate::settings::{GameConfig, ReflectionPolicy};
use crate::velocity_from_angle;

/// Play field boundary the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

impl Wall {
    /// Normal pointing back into the field (y-down)
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Left => Vec2::X,
            Wall::Right => Vec2::NEG_X,
            Wall::Top => Vec2::Y,
        }
    }
}

/// Paddle deflection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    /// Degrees of deflection per paddle width of offset
    pub scale: f32,
    /// Saturation angle (only used by `ReflectionPolicy::Saturate`)
    pub max_angle: f32,
    pub policy: ReflectionPolicy,
}

impl Default for Reflection {
    fn default() -> Self {
        Self {
            scale: REFLECT_ANGLE_SCALE,
            max_angle: MAX_REFLECT_ANGLE,
            policy: ReflectionPolicy::Unclamped,
        }
    }
}

impl Reflection {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scale: config.reflect_angle_scale,
            max_angle: config.max_reflect_angle,
            policy: config.reflection,
        }
    }

    /// Deflection angle in degrees off straight up (positive = right)
    pub fn angle(&self, ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
        let diff = ball_x - paddle_x;
        let angle = diff / paddle_width * self.scale;
        match self.policy {
            ReflectionPolicy::Unclamped => angle,
            ReflectionPolicy::Saturate => angle.clamp(-self.max_angle, self.max_angle),
        }
    }

    /// Outgoing ball velocity after touching the paddle.
    ///
    /// `ball_x` and `paddle_x` are centers. The result always has magnitude
    /// `speed`.
    pub fn velocity(&self, ball_x: f32, paddle_x: f32, paddle_width: f32, speed: f32) -> Vec2 {
        let angle = self.angle(ball_x, paddle_x, paddle_width);
        velocity_from_angle(angle - 90.0, speed)
    }
}

/// Paddle deflection with the stock, unclamped mapping
pub fn reflect_off_paddle(ball_x: f32, paddle_x: f32, paddle_width: f32, speed: f32) -> Vec2 {
    Reflection::default().velocity(ball_x, paddle_x, paddle_width, speed)
}

/// Launch velocity for an angle in degrees off straight up
pub fn launch_velocity(angle: f32, speed: f32) -> Vec2 {
    velocity_from_angle(angle - 90.0, speed)
}

/// Reflect a velocity about a surface normal
pub fn reflect_velocity(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Bounce off a wall. A ball already moving away from the wall is unchanged.
pub fn reflect_off_wall(vel: Vec2, wall: Wall) -> Vec2 {
    let normal = wall.normal();
    if vel.dot(normal) < 0.0 {
        reflect_velocity(vel, normal)
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle_from_vertical;

    #[test]
    fn test_center_hit_goes_straight_up() {
        let v = reflect_off_paddle(512.0, 512.0, 100.0, 300.0);
        assert!(v.x.abs() < 0.001);
        assert!((v.y + 300.0).abs() < 0.001);
    }

    #[test]
    fn test_half_width_offset_maps_linearly() {
        // diff / width * 60 = 50 / 100 * 60
        let v = reflect_off_paddle(50.0, 0.0, 100.0, 300.0);
        assert!((angle_from_vertical(v) - 30.0).abs() < 0.001);
        assert!((v.length() - 300.0).abs() < 0.01);
        assert!(v.y < 0.0);

        let left = reflect_off_paddle(-50.0, 0.0, 100.0, 300.0);
        assert!((angle_from_vertical(left) + 30.0).abs() < 0.001);
    }

    #[test]
    fn test_full_width_offset_reaches_scale() {
        let v = reflect_off_paddle(100.0, 0.0, 100.0, 300.0);
        assert!((angle_from_vertical(v) - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_unclamped_exceeds_max_angle() {
        let v = reflect_off_paddle(150.0, 0.0, 100.0, 300.0);
        assert!((angle_from_vertical(v) - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_saturate_policy_limits_angle() {
        let reflection = Reflection {
            policy: ReflectionPolicy::Saturate,
            ..Default::default()
        };
        assert_eq!(reflection.angle(150.0, 0.0, 100.0), 60.0);
        assert_eq!(reflection.angle(-500.0, 0.0, 100.0), -60.0);
        assert!((reflection.angle(50.0, 0.0, 100.0) - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_launch_velocity() {
        let v = launch_velocity(45.0, 300.0);
        assert!(v.x > 0.0 && v.y < 0.0);
        assert!((angle_from_vertical(v) - 45.0).abs() < 0.001);
        assert!((v.length() - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_wall_bounce() {
        let v = Vec2::new(-100.0, -50.0);
        assert_eq!(reflect_off_wall(v, Wall::Left), Vec2::new(100.0, -50.0));
        assert_eq!(reflect_off_wall(v, Wall::Top), Vec2::new(-100.0, 50.0));
        // Moving away from the right wall already
        assert_eq!(reflect_off_wall(v, Wall::Right), v);
    }
}
