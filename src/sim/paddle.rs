//! Player paddle and its movement commands

use serde::{Deserialize, Serialize};

/// Horizontal direction of paddle travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// What the paddle should do this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum PaddleCommand {
    /// No input: stop
    #[default]
    Hold,
    /// Move at paddle speed in a direction
    Push(Direction),
    /// Jump so the paddle is centered under a pointer x
    Follow(f32),
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, always within [0, field_width - width]
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity (pixels/s)
    pub vel: f32,
}

impl Paddle {
    /// Paddle centered horizontally in the field
    pub fn centered(field_width: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: (field_width - width) / 2.0,
            y,
            width,
            height,
            vel: 0.0,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Apply a movement command and advance by `dt` seconds.
    ///
    /// The resulting position is clamped to the field regardless of how far
    /// the command asked to go.
    pub fn apply(&mut self, command: PaddleCommand, field_width: f32, speed: f32, dt: f32) {
        let max_x = (field_width - self.width).max(0.0);
        match command {
            PaddleCommand::Hold => {
                self.vel = 0.0;
            }
            PaddleCommand::Push(direction) => {
                self.vel = direction.sign() * speed;
                self.x += self.vel * dt;
            }
            PaddleCommand::Follow(pointer_x) => {
                self.vel = 0.0;
                self.x = pointer_x - self.width / 2.0;
            }
        }
        // NaN pointer coordinates fall back to the left edge
        self.x = if self.x.is_nan() { 0.0 } else { self.x.clamp(0.0, max_x) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIELD: f32 = 1024.0;

    fn paddle() -> Paddle {
        Paddle::centered(FIELD, 690.0, 100.0, 20.0)
    }

    #[test]
    fn test_centered() {
        let p = paddle();
        assert_eq!(p.x, 462.0);
        assert_eq!(p.center_x(), 512.0);
    }

    #[test]
    fn test_push_moves_at_speed() {
        let mut p = paddle();
        p.apply(PaddleCommand::Push(Direction::Left), FIELD, 500.0, 0.1);
        assert_eq!(p.vel, -500.0);
        assert!((p.x - 412.0).abs() < 0.001);
    }

    #[test]
    fn test_hold_stops() {
        let mut p = paddle();
        p.apply(PaddleCommand::Push(Direction::Right), FIELD, 500.0, 0.1);
        p.apply(PaddleCommand::Hold, FIELD, 500.0, 0.1);
        assert_eq!(p.vel, 0.0);
        assert!((p.x - 512.0).abs() < 0.001);
    }

    #[test]
    fn test_follow_centers_under_pointer() {
        let mut p = paddle();
        p.apply(PaddleCommand::Follow(300.0), FIELD, 500.0, 0.1);
        assert_eq!(p.x, 250.0);
        assert_eq!(p.center_x(), 300.0);
    }

    #[test]
    fn test_follow_clamps_at_edges() {
        let mut p = paddle();
        p.apply(PaddleCommand::Follow(10.0), FIELD, 500.0, 0.1);
        assert_eq!(p.x, 0.0);
        p.apply(PaddleCommand::Follow(5000.0), FIELD, 500.0, 0.1);
        assert_eq!(p.x, FIELD - 100.0);
    }

    proptest! {
        #[test]
        fn prop_position_always_in_field(
            start in -2000.0f32..4000.0,
            pointer in -1.0e6f32..1.0e6,
            speed in 0.0f32..1.0e6,
            dt in 0.0f32..10.0,
            which in 0u8..4,
        ) {
            let mut p = paddle();
            p.x = start;
            let command = match which {
                0 => PaddleCommand::Hold,
                1 => PaddleCommand::Push(Direction::Left),
                2 => PaddleCommand::Push(Direction::Right),
                _ => PaddleCommand::Follow(pointer),
            };
            p.apply(command, FIELD, speed, dt);
            prop_assert!(p.x >= 0.0 && p.x <= FIELD - p.width);
        }
    }
}
