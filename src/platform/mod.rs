//! Platform abstraction layer
//!
//! The simulation consumes only a handful of facts from the host:
//! - Screen metrics (queried at game start and reset)
//! - Frame delta time (once per frame)
//! - A discrete tap (at most one per frame)
//! - Sprite sizes (to size the body and pipe collision boxes)

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BODY_FRAME_COUNT, FRAME_DT};

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Screen {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Screen {
    /// Portrait phone resolution
    fn default() -> Self {
        Self::new(1080.0, 2400.0)
    }
}

/// Source-pixel sizes of every sprite that has a collision footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    /// Body animation frames (down/mid/up flap)
    pub body: [Vec2; BODY_FRAME_COUNT],
    pub pipe_top: Vec2,
    pub pipe_bottom: Vec2,
    pub ground: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            body: [Vec2::new(34.0, 24.0); BODY_FRAME_COUNT],
            pipe_top: Vec2::new(52.0, 320.0),
            pipe_bottom: Vec2::new(52.0, 320.0),
            ground: Vec2::new(336.0, 112.0),
        }
    }
}

/// Host services the frame loop pulls from
pub trait Platform {
    /// Current screen size
    fn screen(&self) -> Screen;

    /// Seconds since the previous frame. Called once per frame, and marks
    /// the start of a new frame.
    fn frame_time(&mut self) -> f32;

    /// Whether a tap landed during the current frame. A tap is consumed by
    /// the first call.
    fn tap(&mut self) -> bool;
}

/// Headless platform with a fixed frame time and a scripted set of tap frames
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    screen: Screen,
    dt: f32,
    taps: BTreeSet<u64>,
    frames_started: u64,
}

impl ScriptedPlatform {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            dt: FRAME_DT,
            taps: BTreeSet::new(),
            frames_started: 0,
        }
    }

    /// Override the fixed frame time
    pub fn with_frame_time(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Schedule taps on the given (0-based) frame indices
    pub fn with_taps(mut self, frames: impl IntoIterator<Item = u64>) -> Self {
        self.taps.extend(frames);
        self
    }

    /// Number of frames started so far
    pub fn frames(&self) -> u64 {
        self.frames_started
    }
}

impl Platform for ScriptedPlatform {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn frame_time(&mut self) -> f32 {
        self.frames_started += 1;
        self.dt
    }

    fn tap(&mut self) -> bool {
        let Some(current) = self.frames_started.checked_sub(1) else {
            return false;
        };
        self.taps.remove(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_taps_fire_once_on_their_frame() {
        let mut platform = ScriptedPlatform::new(Screen::default()).with_taps([1, 3]);

        platform.frame_time(); // frame 0
        assert!(!platform.tap());

        platform.frame_time(); // frame 1
        assert!(platform.tap());
        assert!(!platform.tap(), "tap must be consumed");

        platform.frame_time(); // frame 2
        assert!(!platform.tap());

        platform.frame_time(); // frame 3
        assert!(platform.tap());
        assert_eq!(platform.frames(), 4);
    }

    #[test]
    fn test_no_tap_before_first_frame() {
        let mut platform = ScriptedPlatform::new(Screen::default()).with_taps([0]);
        assert!(!platform.tap());
        platform.frame_time();
        assert!(platform.tap());
    }

    #[test]
    fn test_fixed_frame_time() {
        let mut platform = ScriptedPlatform::new(Screen::default()).with_frame_time(0.02);
        assert_eq!(platform.frame_time(), 0.02);
        assert_eq!(platform.screen(), Screen::new(1080.0, 2400.0));
    }
}
