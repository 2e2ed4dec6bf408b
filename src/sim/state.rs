//! Game state and lifecycle
//!
//! `GameState` owns everything a run mutates: the body, the pipe ring, the
//! scroll clock and the random source. It is created once by the host loop and
//! passed by reference into [`super::tick`].

use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::CollisionTarget;
use super::geometry::Rect;
use super::obstacle::{ObstacleRing, PipeLayout};
use super::scroll::ScrollClock;
use crate::error::ConfigError;
use crate::platform::{Screen, SpriteSizes};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a tap to reset
    Over,
}

/// Notifications for the render/audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start -> Playing
    Started,
    /// The body jumped
    Jumped,
    /// Playing -> Over
    Collided { target: CollisionTarget },
    /// A pipe scrolled off-screen; carries the new score
    ObstaclePassed { score: u32 },
    /// Over -> Start, all run state rebuilt
    Reset,
}

/// Everything one session of the game mutates
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the random source was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub screen: Screen,
    pub sprites: SpriteSizes,
    pub phase: GamePhase,
    pub body: Body,
    pub obstacles: ObstacleRing,
    pub scroll: ScrollClock,
    /// Ground collision box
    pub ground: Rect,
    /// Frames simulated in the Playing phase this run
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
    /// Screen to apply at the next reset
    pending_screen: Option<Screen>,
}

impl GameState {
    /// Create a game in the Start phase
    ///
    /// Fails if the tuning and screen cannot produce a playable game.
    pub fn new(
        tuning: Tuning,
        screen: Screen,
        sprites: SpriteSizes,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        tuning.validate(&screen, &sprites)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let (body, obstacles, scroll, ground) = build_world(&tuning, &screen, &sprites, &mut rng);

        info!(
            "New game: screen {}x{}, seed {}",
            screen.width, screen.height, seed
        );

        Ok(Self {
            seed,
            tuning,
            screen,
            sprites,
            phase: GamePhase::Start,
            body,
            obstacles,
            scroll,
            ground,
            time_ticks: 0,
            rng,
            events: Vec::new(),
            pending_screen: None,
        })
    }

    /// Default tuning and sprites on a portrait phone screen
    pub fn with_defaults(seed: u64) -> Result<Self, ConfigError> {
        Self::new(Tuning::default(), Screen::default(), SpriteSizes::default(), seed)
    }

    /// Rebuild the body, pipes and scroll clock as for a fresh game and return
    /// to Start. The random source carries on from where it was.
    pub fn reset(&mut self) {
        if let Some(screen) = self.pending_screen.take() {
            self.screen = screen;
        }

        let (body, obstacles, scroll, ground) =
            build_world(&self.tuning, &self.screen, &self.sprites, &mut self.rng);
        self.body = body;
        self.obstacles = obstacles;
        self.scroll = scroll;
        self.ground = ground;
        self.time_ticks = 0;
        self.phase = GamePhase::Start;
        self.emit(GameEvent::Reset);

        info!("Game reset");
    }

    /// Record a new screen size. It takes effect at the next reset; a run in
    /// progress keeps the size it started with.
    pub fn resize(&mut self, screen: Screen) -> Result<(), ConfigError> {
        self.tuning.validate(&screen, &self.sprites)?;
        if screen != self.screen {
            self.pending_screen = Some(screen);
        }
        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.body.score
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

fn build_world(
    tuning: &Tuning,
    screen: &Screen,
    sprites: &SpriteSizes,
    rng: &mut Pcg32,
) -> (Body, ObstacleRing, ScrollClock, Rect) {
    let layout = PipeLayout::new(tuning, screen, sprites);
    let ground = Rect::new(
        0.0,
        layout.ground_y,
        screen.width,
        sprites.ground.y * tuning.world_scale,
    );
    let obstacles = ObstacleRing::new(layout, tuning.first_pipe_anchor, rng);
    let body = Body::new(tuning, screen, sprites);
    let scroll = ScrollClock::new(screen.width, tuning.game_speed);
    (body, obstacles, scroll, ground)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_in_start() {
        let state = GameState::with_defaults(1).unwrap();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score(), 0);
        assert_eq!(state.ground, Rect::new(0.0, 1896.0, 1080.0, 504.0));
        assert_eq!(state.scroll.offsets, [0.0, 1080.0]);
    }

    #[test]
    fn test_degenerate_screen_fails_fast() {
        let result = GameState::new(
            Tuning::default(),
            Screen::new(1280.0, 720.0),
            SpriteSizes::default(),
            1,
        );
        assert!(matches!(result, Err(ConfigError::GapRange { .. })));
    }

    #[test]
    fn test_bad_tuning_file_fails_before_play() {
        for json in [r#"{ "min_rotation": 50.0 }"#, r#"{ "pipe_gap": -100 }"#] {
            let tuning = Tuning::from_json(json).unwrap();
            let result = GameState::new(tuning, Screen::default(), SpriteSizes::default(), 1);
            assert!(result.is_err(), "{} was accepted", json);
        }
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let a = GameState::with_defaults(42).unwrap();
        let b = GameState::with_defaults(42).unwrap();
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_reset_rebuilds_run_state() {
        let mut state = GameState::with_defaults(5).unwrap();
        state.phase = GamePhase::Over;
        state.body.score = 12;
        state.body.velocity = 640.0;
        state.body.rotation = 30.0;
        state.body.y = 1700.0;
        state.time_ticks = 900;

        state.reset();

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score(), 0);
        assert_eq!(state.body.velocity, 0.0);
        assert_eq!(state.body.rotation, 0.0);
        assert_eq!(state.body.y, 1146.0);
        assert_eq!(state.time_ticks, 0);
        assert!((750.0..=940.0).contains(&state.obstacles.get(0).unwrap().x));
        assert_eq!(state.drain_events().collect::<Vec<_>>(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_resize_applies_on_reset_only() {
        let mut state = GameState::with_defaults(5).unwrap();
        state.resize(Screen::new(1440.0, 3200.0)).unwrap();
        assert_eq!(state.screen, Screen::default());

        state.reset();
        assert_eq!(state.screen, Screen::new(1440.0, 3200.0));
        assert_eq!(state.scroll.width, 1440.0);
        assert_eq!(state.ground.y, 3200.0 - 504.0);
    }

    #[test]
    fn test_resize_rejects_short_screen() {
        let mut state = GameState::with_defaults(5).unwrap();
        assert!(state.resize(Screen::new(1080.0, 1000.0)).is_err());
        state.reset();
        assert_eq!(state.screen, Screen::default());
    }
}
