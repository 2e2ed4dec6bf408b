//! World clock driving the looping background
//!
//! Two screen-wide panels are laid side by side. Both slide left at world
//! speed; a panel that has fully left the screen is moved behind the other.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollClock {
    /// Left edge of each background panel
    pub offsets: [f32; 2],
    /// Panel width (the screen width)
    pub width: f32,
    /// World speed (pixels/s)
    pub speed: f32,
}

impl ScrollClock {
    pub fn new(width: f32, speed: f32) -> Self {
        Self {
            offsets: [0.0, width],
            width,
            speed,
        }
    }

    /// Slide both panels and wrap any that scrolled off. Returns the
    /// distance moved this frame.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let distance = self.speed * dt;
        for offset in &mut self.offsets {
            *offset -= distance;
        }
        for i in 0..2 {
            if self.offsets[i] <= -self.width {
                self.offsets[i] = self.offsets[(i + 1) % 2] + self.width;
            }
        }
        distance
    }
}
