//! Configuration errors
//!
//! The simulation itself never fails at runtime. The only failure path is a
//! degenerate setup detected when a game is created or reset.

use std::fmt;

/// A setup that cannot produce a playable game
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Screen width or height is zero or negative
    InvalidScreen { width: f32, height: f32 },
    /// A tuning value is NaN or infinite
    NotFinite { field: &'static str, value: f32 },
    /// A tuning value that must be positive is not
    NonPositive { field: &'static str, value: f32 },
    /// Tilt limits are inverted
    RotationRange { min: f32, max: f32 },
    /// Smoothing factor outside `[0, 1]`
    Smoothing { value: f32 },
    /// A pipe distance that is zero or negative where it must not be
    PipeDistance { field: &'static str, value: i32 },
    /// Spacing range is inverted
    SpacingRange { min: i32, max: i32 },
    /// Screen is too short for the gap-top random range to be non-empty
    GapRange { min: i32, max: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScreen { width, height } => {
                write!(f, "invalid screen size {}x{}", width, height)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "tuning value `{}` must be positive, got {}", field, value)
            }
            ConfigError::NotFinite { field, value } => {
                write!(f, "tuning value `{}` must be finite, got {}", field, value)
            }
            ConfigError::RotationRange { min, max } => {
                write!(f, "rotation limits are inverted: [{}, {}]", min, max)
            }
            ConfigError::Smoothing { value } => {
                write!(f, "rotation smoothing must lie in [0, 1], got {}", value)
            }
            ConfigError::PipeDistance { field, value } => {
                write!(f, "pipe distance `{}` is out of range: {}", field, value)
            }
            ConfigError::SpacingRange { min, max } => {
                write!(f, "pipe spacing range is empty: [{}, {}]", min, max)
            }
            ConfigError::GapRange { min, max } => write!(
                f,
                "screen too short for pipe gaps: gap-top range [{}, {}] is empty",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
