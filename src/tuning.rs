//! Game balance values
//!
//! Every gameplay constant is carried here so a run can be re-tuned from a
//! JSON file without recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::platform::{Screen, SpriteSizes};

/// Gameplay tuning, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Horizontal scroll speed (pixels/s)
    pub game_speed: f32,
    /// Sprite upscale factor
    pub world_scale: f32,

    // === Body ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Jump velocity at `base_height_resolution` (negative = up)
    pub base_jump_force: f32,
    /// Screen height the jump force was tuned on
    pub base_height_resolution: f32,
    /// Body's horizontal center as a fraction of screen width
    pub body_x_fraction: f32,
    /// Tilt degrees per unit of velocity
    pub rotation_factor: f32,
    pub min_rotation: f32,
    pub max_rotation: f32,
    /// Per-frame smoothing toward the target tilt
    pub rotation_smoothing: f32,
    /// Seconds per animation frame
    pub animation_frame_time: f32,

    // === Pipes ===
    pub pipe_gap: i32,
    pub min_pipe_spacing: i32,
    pub max_pipe_spacing: i32,
    /// X the first pipe's spacing is measured from
    pub first_pipe_anchor: f32,
    /// Smallest gap-top offset
    pub gap_top_min: i32,
    /// Clearance between the lowest possible gap and the ground
    pub gap_floor_margin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            game_speed: GAME_SPEED,
            world_scale: WORLD_SCALE,

            gravity: GRAVITY,
            base_jump_force: BASE_JUMP_FORCE,
            base_height_resolution: BASE_HEIGHT_RESOLUTION,
            body_x_fraction: BODY_X_FRACTION,
            rotation_factor: ROTATION_FACTOR,
            min_rotation: MIN_ROTATION,
            max_rotation: MAX_ROTATION,
            rotation_smoothing: ROTATION_SMOOTHING,
            animation_frame_time: ANIMATION_FRAME_TIME,

            pipe_gap: PIPE_GAP,
            min_pipe_spacing: MIN_PIPE_SPACING,
            max_pipe_spacing: MAX_PIPE_SPACING,
            first_pipe_anchor: FIRST_PIPE_ANCHOR,
            gap_top_min: GAP_TOP_MIN,
            gap_floor_margin: GAP_FLOOR_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Fields not present keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for dumping the effective tuning)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Jump velocity scaled so the arc covers the same screen fraction at
    /// any resolution
    pub fn jump_impulse(&self, screen_height: f32) -> f32 {
        self.base_jump_force * (screen_height / self.base_height_resolution)
    }

    /// Top edge of the ground band
    pub fn ground_y(&self, screen: &Screen, sprites: &SpriteSizes) -> f32 {
        screen.height - sprites.ground.y * self.world_scale
    }

    /// Inclusive range gap tops are drawn from, for a given ground line
    pub fn gap_top_range(&self, ground_y: f32) -> (i32, i32) {
        let max = (ground_y - self.pipe_gap as f32 - self.gap_floor_margin as f32) as i32;
        (self.gap_top_min, max)
    }

    /// Reject setups that would make the game unplayable or make the spawn
    /// ranges empty
    pub fn validate(&self, screen: &Screen, sprites: &SpriteSizes) -> Result<(), ConfigError> {
        if !is_positive(screen.width) || !is_positive(screen.height) {
            return Err(ConfigError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }

        let finite = [
            ("gravity", self.gravity),
            ("base_jump_force", self.base_jump_force),
            ("body_x_fraction", self.body_x_fraction),
            ("rotation_factor", self.rotation_factor),
            ("min_rotation", self.min_rotation),
            ("max_rotation", self.max_rotation),
            ("first_pipe_anchor", self.first_pipe_anchor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("game_speed", self.game_speed),
            ("world_scale", self.world_scale),
            ("base_height_resolution", self.base_height_resolution),
            ("animation_frame_time", self.animation_frame_time),
        ];
        for (field, value) in positive {
            if !is_positive(value) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.gravity < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "gravity",
                value: self.gravity,
            });
        }

        if self.min_rotation > self.max_rotation {
            return Err(ConfigError::RotationRange {
                min: self.min_rotation,
                max: self.max_rotation,
            });
        }
        if !(0.0..=1.0).contains(&self.rotation_smoothing) {
            return Err(ConfigError::Smoothing {
                value: self.rotation_smoothing,
            });
        }

        if self.pipe_gap <= 0 {
            return Err(ConfigError::PipeDistance {
                field: "pipe_gap",
                value: self.pipe_gap,
            });
        }
        let margins = [
            ("gap_top_min", self.gap_top_min),
            ("gap_floor_margin", self.gap_floor_margin),
        ];
        for (field, value) in margins {
            if value < 0 {
                return Err(ConfigError::PipeDistance { field, value });
            }
        }

        if self.min_pipe_spacing > self.max_pipe_spacing {
            return Err(ConfigError::SpacingRange {
                min: self.min_pipe_spacing,
                max: self.max_pipe_spacing,
            });
        }

        let (min, max) = self.gap_top_range(self.ground_y(screen, sprites));
        if max < min {
            return Err(ConfigError::GapRange { min, max });
        }

        Ok(())
    }
}

/// Finite and strictly greater than zero
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
