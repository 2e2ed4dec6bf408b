//! Simulation module
//!
//! All gameplay logic lives here. Every public operation is a single
//! synchronous step meant to be called from the host's frame loop:
//! - Variable timestep, one `tick` per frame
//! - Injected, seedable RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod geometry;
pub mod obstacle;
pub mod scroll;
pub mod state;
pub mod tick;

pub use body::{Body, Motion, target_rotation};
pub use collision::{CollisionTarget, find_collision};
pub use geometry::{OrientedRect, Rect, edge_normal, project_onto_axis, rotated_corners, sat_overlap};
pub use obstacle::{Obstacle, ObstacleRing, PipeLayout};
pub use scroll::ScrollClock;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
