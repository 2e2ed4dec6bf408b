//! Flapper - simulation core for a side-scrolling gap-flying game
//!
//! Core modules:
//! - `sim`: Frame simulation (physics, obstacle ring, SAT collisions, game state)
//! - `platform`: Collaborator interfaces (screen, sprites, frame time, input)
//! - `tuning`: Data-driven game balance
//! - `error`: Construction-time configuration errors

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use platform::{Platform, Screen, ScriptedPlatform, SpriteSizes};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the host loop
    pub const TARGET_FPS: u32 = 60;
    /// Nominal frame time at the target rate
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;

    /// Number of obstacles kept alive in the ring
    pub const PIPE_COUNT: usize = 5;
    /// Number of body animation frames
    pub const BODY_FRAME_COUNT: usize = 3;

    /// Horizontal scroll speed (pixels/s)
    pub const GAME_SPEED: f32 = 350.0;
    /// Downward acceleration on the body (pixels/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Jump velocity at the reference screen height (negative = up)
    pub const BASE_JUMP_FORCE: f32 = -350.0;
    /// Screen height the jump force is tuned for
    pub const BASE_HEIGHT_RESOLUTION: f32 = 1080.0;
    /// Sprite upscale applied to every sprite dimension
    pub const WORLD_SCALE: f32 = 4.5;

    /// Vertical opening between top and bottom pipe
    pub const PIPE_GAP: i32 = 620;
    /// Closest possible spacing between consecutive pipes
    pub const MIN_PIPE_SPACING: i32 = 650;
    /// Widest possible spacing between consecutive pipes
    pub const MAX_PIPE_SPACING: i32 = 840;
    /// Anchor the first pipe's spacing is added to
    pub const FIRST_PIPE_ANCHOR: f32 = 100.0;
    /// Smallest gap-top offset
    pub const GAP_TOP_MIN: i32 = 150;
    /// Clearance kept between the lowest gap and the ground
    pub const GAP_FLOOR_MARGIN: i32 = 500;

    /// Degrees of tilt per unit of vertical velocity
    pub const ROTATION_FACTOR: f32 = 0.05;
    /// Steepest climb tilt (degrees)
    pub const MIN_ROTATION: f32 = -25.0;
    /// Steepest dive tilt (degrees)
    pub const MAX_ROTATION: f32 = 45.0;
    /// Fraction of the gap to the target tilt closed each frame
    pub const ROTATION_SMOOTHING: f32 = 0.1;
    /// Seconds each animation frame is held
    pub const ANIMATION_FRAME_TIME: f32 = 0.1;
    /// Body's horizontal center as a fraction of screen width
    pub const BODY_X_FRACTION: f32 = 0.2;
}

/// Linear interpolation from `a` toward `b` by fraction `f`
#[inline]
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a * (1.0 - f) + b * f
}
