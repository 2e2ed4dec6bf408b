//! Pipe obstacles and the fixed-size ring that recycles them
//!
//! The ring never grows or shrinks. When a pipe's trailing edge leaves the
//! screen it is respawned in place, one random spacing past the pipe that
//! precedes it in ring order, so the ring always holds pipes in a single
//! left-to-right chain.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::PIPE_COUNT;
use crate::platform::{Screen, SpriteSizes};
use crate::tuning::Tuning;

/// A top/bottom pipe pair around a vertical gap
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge of both pipes
    pub x: f32,
    /// Bottom edge of the top pipe
    pub gap_top: f32,
    /// Top edge of the bottom pipe (always `gap_top + gap`)
    pub gap_bottom: f32,
}

/// Sizes and random ranges shared by every pipe in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeLayout {
    pub top_width: f32,
    pub bottom_width: f32,
    /// Top edge of the ground; bottom pipes extend down to it
    pub ground_y: f32,
    pub gap: i32,
    pub min_spacing: i32,
    pub max_spacing: i32,
    pub gap_top_min: i32,
    pub gap_top_max: i32,
}

impl PipeLayout {
    pub fn new(tuning: &Tuning, screen: &Screen, sprites: &SpriteSizes) -> Self {
        let ground_y = tuning.ground_y(screen, sprites);
        let (gap_top_min, gap_top_max) = tuning.gap_top_range(ground_y);
        Self {
            top_width: sprites.pipe_top.x * tuning.world_scale,
            bottom_width: sprites.pipe_bottom.x * tuning.world_scale,
            ground_y,
            gap: tuning.pipe_gap,
            min_spacing: tuning.min_pipe_spacing,
            max_spacing: tuning.max_pipe_spacing,
            gap_top_min,
            gap_top_max,
        }
    }

    /// Spawn a pipe one random spacing to the right of `previous_x`
    ///
    /// The ranges must be non-empty; [`Tuning::validate`] guarantees that.
    pub fn spawn_after<R: Rng + ?Sized>(&self, previous_x: f32, rng: &mut R) -> Obstacle {
        let spacing = rng.random_range(self.min_spacing..=self.max_spacing);
        let gap_top = rng.random_range(self.gap_top_min..=self.gap_top_max);
        Obstacle {
            x: previous_x + spacing as f32,
            gap_top: gap_top as f32,
            gap_bottom: (gap_top + self.gap) as f32,
        }
    }

    /// Collision box of the top pipe
    pub fn top_rect(&self, obstacle: &Obstacle) -> Rect {
        Rect::new(obstacle.x, 0.0, self.top_width, obstacle.gap_top)
    }

    /// Collision box of the bottom pipe
    pub fn bottom_rect(&self, obstacle: &Obstacle) -> Rect {
        Rect::new(
            obstacle.x,
            obstacle.gap_bottom,
            self.bottom_width,
            self.ground_y - obstacle.gap_bottom,
        )
    }
}

/// Fixed-capacity ring of pipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRing {
    slots: [Obstacle; PIPE_COUNT],
    layout: PipeLayout,
}

impl ObstacleRing {
    /// Fill the ring with a chain of pipes starting one spacing past `anchor`
    pub fn new<R: Rng + ?Sized>(layout: PipeLayout, anchor: f32, rng: &mut R) -> Self {
        let mut slots = [Obstacle::default(); PIPE_COUNT];
        let mut previous_x = anchor;
        for slot in &mut slots {
            *slot = layout.spawn_after(previous_x, rng);
            previous_x = slot.x;
        }
        Self { slots, layout }
    }

    /// Build a ring from explicit pipes (scenario setup, replays)
    pub fn from_slots(layout: PipeLayout, slots: [Obstacle; PIPE_COUNT]) -> Self {
        Self { slots, layout }
    }

    /// Index of the pipe that precedes `index` in ring order
    #[inline]
    pub fn prev_index(index: usize) -> usize {
        (index + PIPE_COUNT - 1) % PIPE_COUNT
    }

    pub fn layout(&self) -> &PipeLayout {
        &self.layout
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter()
    }

    pub fn top_rect(&self, index: usize) -> Rect {
        self.layout.top_rect(&self.slots[index])
    }

    pub fn bottom_rect(&self, index: usize) -> Rect {
        self.layout.bottom_rect(&self.slots[index])
    }

    /// Scroll every pipe left and recycle the ones that left the screen
    ///
    /// Returns how many pipes were recycled; each one is a pipe the body got
    /// past. A pipe is recycled at most once per call.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, world_speed: f32, rng: &mut R) -> u32 {
        let shift = world_speed * dt;
        for obstacle in &mut self.slots {
            obstacle.x -= shift;
        }

        let mut passed = 0;
        for i in 0..PIPE_COUNT {
            if self.slots[i].x + self.layout.bottom_width < 0.0 {
                let anchor = self.slots[Self::prev_index(i)].x;
                self.slots[i] = self.layout.spawn_after(anchor, rng);
                passed += 1;
                debug!("Pipe {} recycled to x={:.1}", i, self.slots[i].x);
            }
        }
        passed
    }
}
