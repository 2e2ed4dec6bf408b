//! Body-versus-world collision queries
//!
//! Order matters for reporting: the ground is tested first, then each pipe
//! pair in ring order, top pipe before bottom pipe. The first hit wins.

use serde::{Deserialize, Serialize};

use super::geometry::{OrientedRect, Rect, sat_overlap};
use super::obstacle::ObstacleRing;
use crate::consts::PIPE_COUNT;

/// What the body ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionTarget {
    Ground,
    /// Top pipe of the obstacle at this ring index
    TopPipe(usize),
    /// Bottom pipe of the obstacle at this ring index
    BottomPipe(usize),
}

/// First world shape the body overlaps, if any
pub fn find_collision(
    body: &OrientedRect,
    ground: &Rect,
    obstacles: &ObstacleRing,
) -> Option<CollisionTarget> {
    if sat_overlap(body, &ground.corners()) {
        return Some(CollisionTarget::Ground);
    }

    for index in 0..PIPE_COUNT {
        if sat_overlap(body, &obstacles.top_rect(index).corners()) {
            return Some(CollisionTarget::TopPipe(index));
        }
        if sat_overlap(body, &obstacles.bottom_rect(index).corners()) {
            return Some(CollisionTarget::BottomPipe(index));
        }
    }

    None
}
