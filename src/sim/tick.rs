//! Per-frame simulation step
//!
//! One call per rendered frame. Only the Playing phase moves anything; Start
//! and Over wait for a tap with the world frozen.

use log::info;

use super::autopilot;
use super::collision::find_collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A tap landed this frame
    pub tap: bool,
    /// Idle/demo mode - the autopilot supplies taps
    pub idle_mode: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let tap = input.tap || (input.idle_mode && autopilot::wants_tap(state));

    match state.phase {
        GamePhase::Start => {
            if tap {
                state.phase = GamePhase::Playing;
                state.emit(GameEvent::Started);
                info!("Run started");
            }
        }
        GamePhase::Playing => play_frame(state, tap, dt),
        GamePhase::Over => {
            if tap {
                state.reset();
            }
        }
    }
}

fn play_frame(state: &mut GameState, tap: bool, dt: f32) {
    // Collisions are judged on the pose the player saw last frame
    if let Some(target) = find_collision(&state.body.oriented_rect(), &state.ground, &state.obstacles)
    {
        state.phase = GamePhase::Over;
        state.emit(GameEvent::Collided { target });
        info!(
            "Game over: hit {:?} with score {} after {} ticks",
            target, state.body.score, state.time_ticks
        );
        return;
    }

    state.time_ticks += 1;

    let world_speed = state.scroll.speed;
    state.scroll.advance(dt);

    let passed = state.obstacles.tick(dt, world_speed, &mut state.rng);
    for _ in 0..passed {
        state.body.score += 1;
        let score = state.body.score;
        state.emit(GameEvent::ObstaclePassed { score });
    }

    if tap {
        state.body.apply_jump();
        state.emit(GameEvent::Jumped);
    }
    state.body.integrate(dt);
    state.body.advance_animation(dt);
    state.body.derive_visual_rotation();
}
