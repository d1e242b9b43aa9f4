//! Bird physics.
//!
//! The bird only moves vertically; pipes and ground scroll past it.

use crate::types::{BIRD_FRAMES, BIRD_START_Y, BIRD_X, FLAPPY_GRAVITY, FLAPPY_THRUST};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Degrees, positive is nose down.
    pub rotation: f32,
    pub frame: u8,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            speed: 0.0,
            rotation: 0.0,
            frame: 0,
        }
    }

    /// Back to the start position at rest. Rotation and frame are left to the
    /// next update.
    pub fn reset(&mut self) {
        self.y = BIRD_START_Y;
        self.speed = 0.0;
    }

    /// Upward impulse. Ignored once the bird is at or above the top edge.
    pub fn flap(&mut self) -> bool {
        if self.y <= 0.0 {
            return false;
        }
        self.speed = -FLAPPY_THRUST;
        true
    }

    /// Tilt follows speed: up to 25 degrees nose up, 90 nose down.
    pub fn set_rotation(&mut self) {
        self.rotation = if self.speed <= 0.0 {
            (25.0 * self.speed / FLAPPY_THRUST).max(-25.0)
        } else {
            (90.0 * self.speed / (FLAPPY_THRUST * 2.0)).min(90.0)
        };
    }

    /// Idle bob on the ready screen.
    pub fn hover(&mut self, frames: u32) {
        self.rotation = 0.0;
        if frames % 10 == 0 {
            self.y += (frames as f32).to_radians().sin();
            self.advance_frame();
        }
    }

    /// One step of flight under normal gravity.
    pub fn fly(&mut self, frames: u32) {
        if frames % 5 == 0 {
            self.advance_frame();
        }
        self.y += self.speed;
        self.set_rotation();
        self.speed += FLAPPY_GRAVITY;
    }

    /// One step of the death fall. Returns `true` once resting on the ground.
    pub fn fall(&mut self, ground_y: f32, radius: f32) -> bool {
        self.frame = 1;
        if self.y + radius < ground_y {
            self.y += self.speed;
            self.set_rotation();
            self.speed += FLAPPY_GRAVITY * 2.0;
            false
        } else {
            self.speed = 0.0;
            self.y = ground_y - radius;
            self.rotation = 90.0;
            true
        }
    }

    fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % BIRD_FRAMES;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flap_sets_upward_speed() {
        let mut bird = Bird::new();
        assert!(bird.flap());
        assert_eq!(bird.speed, -FLAPPY_THRUST);
    }

    #[test]
    fn flap_ignored_above_top_edge() {
        let mut bird = Bird::new();
        bird.y = 0.0;
        bird.speed = 1.0;
        assert!(!bird.flap());
        assert_eq!(bird.speed, 1.0);
    }

    #[test]
    fn rotation_is_clamped() {
        let mut bird = Bird::new();
        bird.speed = -FLAPPY_THRUST;
        bird.set_rotation();
        assert_eq!(bird.rotation, -25.0);

        bird.speed = 0.0;
        bird.set_rotation();
        assert_eq!(bird.rotation, 0.0);

        bird.speed = FLAPPY_THRUST;
        bird.set_rotation();
        assert_eq!(bird.rotation, 45.0);

        bird.speed = 100.0;
        bird.set_rotation();
        assert_eq!(bird.rotation, 90.0);
    }

    #[test]
    fn fly_applies_gravity_after_moving() {
        let mut bird = Bird::new();
        bird.fly(1);
        assert_eq!(bird.y, BIRD_START_Y);
        assert_eq!(bird.speed, FLAPPY_GRAVITY);
        bird.fly(2);
        assert_eq!(bird.y, BIRD_START_Y + FLAPPY_GRAVITY);
    }

    #[test]
    fn animation_wraps_after_four_frames() {
        let mut bird = Bird::new();
        for frames in [0, 5, 10, 15] {
            bird.fly(frames);
        }
        assert_eq!(bird.frame, 0);
        bird.fly(20);
        assert_eq!(bird.frame, 1);
    }

    #[test]
    fn hover_only_moves_every_tenth_step() {
        let mut bird = Bird::new();
        bird.hover(3);
        assert_eq!(bird.y, BIRD_START_Y);
        assert_eq!(bird.frame, 0);
        bird.hover(90);
        assert!((bird.y - (BIRD_START_Y + 1.0)).abs() < 1e-4);
        assert_eq!(bird.frame, 1);
    }

    #[test]
    fn fall_settles_on_ground() {
        let mut bird = Bird::new();
        bird.y = 280.0;
        bird.speed = 0.0;
        assert!(!bird.fall(302.0, 17.0));
        assert_eq!(bird.speed, FLAPPY_GRAVITY * 2.0);
        assert_eq!(bird.frame, 1);

        bird.y = 290.0;
        assert!(bird.fall(302.0, 17.0));
        assert_eq!(bird.y, 285.0);
        assert_eq!(bird.speed, 0.0);
        assert_eq!(bird.rotation, 90.0);
    }
}
