//! Idle/demo mode - the game plays itself
//!
//! Used by the headless runner and for attract-mode style demos. The policy is
//! deliberately simple: keep the body's bottom edge above an aim line just
//! over the next gap's lower lip, and only tap while falling.

use super::state::{GamePhase, GameState};

/// Whether the autopilot would tap this frame
pub fn wants_tap(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Start => true,
        GamePhase::Over => false,
        GamePhase::Playing => {
            let body = &state.body;
            let layout = state.obstacles.layout();

            // Next pipe whose trailing edge is still ahead of the body
            let aim = state
                .obstacles
                .iter()
                .filter(|o| o.x + layout.bottom_width > body.x)
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|o| o.gap_bottom)
                .unwrap_or(layout.ground_y)
                - body.height;

            body.velocity >= 0.0 && body.y + body.height > aim
        }
    }
}
