//! The player-controlled body
//!
//! Plain Euler integration with no terminal velocity. The visual tilt and the
//! wing animation are derived from velocity and elapsed time each frame.

use serde::{Deserialize, Serialize};

use super::geometry::{OrientedRect, Rect, rotated_corners};
use crate::consts::BODY_FRAME_COUNT;
use crate::lerp;
use crate::platform::{Screen, SpriteSizes};
use crate::tuning::Tuning;

/// Tilt and animation parameters copied from the tuning at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub rotation_factor: f32,
    pub min_rotation: f32,
    pub max_rotation: f32,
    pub rotation_smoothing: f32,
    pub animation_frame_time: f32,
}

impl From<&Tuning> for Motion {
    fn from(tuning: &Tuning) -> Self {
        Self {
            rotation_factor: tuning.rotation_factor,
            min_rotation: tuning.min_rotation,
            max_rotation: tuning.max_rotation,
            rotation_smoothing: tuning.rotation_smoothing,
            animation_frame_time: tuning.animation_frame_time,
        }
    }
}

/// Tilt the body is easing toward for a given velocity
#[inline]
pub fn target_rotation(velocity: f32, motion: &Motion) -> f32 {
    (velocity * motion.rotation_factor).clamp(motion.min_rotation, motion.max_rotation)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Left edge (fixed after spawn)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (pixels/s, positive = down)
    pub velocity: f32,
    /// Tilt in degrees, clockwise-positive
    pub rotation: f32,
    pub gravity: f32,
    /// Velocity set by a jump (negative)
    pub jump_impulse: f32,
    /// Current animation frame, cycles through `0..BODY_FRAME_COUNT`
    pub frame: usize,
    pub animation_timer: f32,
    pub score: u32,
    pub motion: Motion,
}

impl Body {
    /// Spawn centered vertically, a fifth of the way across the screen
    pub fn new(tuning: &Tuning, screen: &Screen, sprites: &SpriteSizes) -> Self {
        let width = sprites.body[0].x * tuning.world_scale;
        let height = sprites.body[0].y * tuning.world_scale;
        Self {
            x: screen.width * tuning.body_x_fraction - width / 2.0,
            y: screen.height / 2.0 - height / 2.0,
            width,
            height,
            velocity: 0.0,
            rotation: 0.0,
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse(screen.height),
            frame: 0,
            animation_timer: 0.0,
            score: 0,
            motion: Motion::from(tuning),
        }
    }

    /// Unrotated bounds
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Bounds rotated by the current tilt about the top-left corner
    pub fn oriented_rect(&self) -> OrientedRect {
        rotated_corners(self.rect(), self.rotation)
    }

    pub fn apply_jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.y += self.velocity * dt;
    }

    /// Ease the tilt toward the velocity-derived target
    pub fn derive_visual_rotation(&mut self) {
        let target = target_rotation(self.velocity, &self.motion);
        self.rotation = lerp(self.rotation, target, self.motion.rotation_smoothing);
    }

    /// Step the wing animation. The timer restarts from zero on every frame
    /// change, dropping any overshoot.
    pub fn advance_animation(&mut self, dt: f32) {
        self.animation_timer += dt;
        if self.animation_timer >= self.motion.animation_frame_time {
            self.frame = (self.frame + 1) % BODY_FRAME_COUNT;
            self.animation_timer = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body() -> Body {
        Body::new(&Tuning::default(), &Screen::default(), &SpriteSizes::default())
    }

    #[test]
    fn test_spawn_placement() {
        let body = body();
        assert_eq!(body.width, 153.0);
        assert_eq!(body.height, 108.0);
        assert_eq!(body.x, 1080.0 * 0.2 - 76.5);
        assert_eq!(body.y, 1200.0 - 54.0);
        assert_eq!(body.velocity, 0.0);
        assert_eq!(body.rotation, 0.0);
        assert_eq!(body.score, 0);
    }

    #[test]
    fn test_jump_impulse_is_resolution_scaled() {
        let mut body = body();
        body.apply_jump();
        assert!((body.velocity - (-350.0 * 2400.0 / 1080.0)).abs() < 1e-3);
    }

    #[test]
    fn test_integrate_one_step() {
        let mut body = body();
        body.gravity = 1000.0;
        body.y = 500.0;
        body.integrate(0.1);
        assert!((body.velocity - 100.0).abs() < 1e-4);
        assert!((body.y - 510.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_eases_toward_target() {
        let mut body = body();
        body.velocity = 2000.0; // target clamps to 45
        body.derive_visual_rotation();
        assert!((body.rotation - 4.5).abs() < 1e-4);
        body.derive_visual_rotation();
        assert!((body.rotation - (4.5 + (45.0 - 4.5) * 0.1)).abs() < 1e-4);

        body.velocity = -10_000.0; // target clamps to -25
        for _ in 0..500 {
            body.derive_visual_rotation();
        }
        assert!((body.rotation + 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_animation_timer_resets_instead_of_carrying() {
        let mut body = body();
        body.advance_animation(0.06);
        assert_eq!(body.frame, 0);
        body.advance_animation(0.06);
        assert_eq!(body.frame, 1);
        assert_eq!(body.animation_timer, 0.0);

        body.advance_animation(0.1);
        body.advance_animation(0.1);
        assert_eq!(body.frame, 0, "frame index wraps after the third frame");
    }

    #[test]
    fn test_oriented_rect_follows_tilt() {
        let mut body = body();
        let flat = body.oriented_rect();
        assert_eq!(flat, body.rect().corners());

        body.rotation = 45.0;
        let tilted = body.oriented_rect();
        assert_eq!(tilted.points[0], flat.points[0]);
        assert!(tilted.points[1].y > flat.points[1].y);
    }

    proptest! {
        #[test]
        fn prop_target_rotation_is_clamped(velocity in -1e30f32..1e30) {
            let motion = Motion::from(&Tuning::default());
            let target = target_rotation(velocity, &motion);
            prop_assert!((-25.0..=45.0).contains(&target));
        }

        #[test]
        fn prop_rotation_stays_in_range(velocities in proptest::collection::vec(-5000f32..5000.0, 1..200)) {
            let mut body = body();
            for v in velocities {
                body.velocity = v;
                body.derive_visual_rotation();
                prop_assert!(body.rotation >= -25.0 - 1e-3 && body.rotation <= 45.0 + 1e-3);
            }
        }
    }
}
