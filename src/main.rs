//! Flapper headless runner
//!
//! Drives the simulation at 60 Hz with the autopilot at the controls, logs the
//! game events and prints a JSON summary of the session.
//!
//! Usage: `flapper [--seed N] [--frames N] [--tuning PATH]`

mod runner {
    use anyhow::{Context, Result, bail};
    use log::{debug, info};
    use serde::Serialize;

    use flapper::consts::TARGET_FPS;
    use flapper::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use flapper::{Platform, ScriptedPlatform, Screen, SpriteSizes, Tuning};

    /// Longest frame the runner will feed the simulation
    const MAX_FRAME_DT: f32 = 0.1;
    /// Frames the game-over screen is held before the runner taps to restart
    const RESTART_DELAY_FRAMES: u32 = 30;

    struct Args {
        seed: Option<u64>,
        frames: u64,
        tuning: Option<String>,
    }

    fn parse_args() -> Result<Args> {
        let mut args = Args {
            seed: None,
            frames: 60 * u64::from(TARGET_FPS),
            tuning: None,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let mut value = || iter.next().with_context(|| format!("{} needs a value", flag));
            match flag.as_str() {
                "--seed" => args.seed = Some(value()?.parse().context("--seed expects an integer")?),
                "--frames" => args.frames = value()?.parse().context("--frames expects an integer")?,
                "--tuning" => args.tuning = Some(value()?),
                other => bail!("unknown argument `{}`", other),
            }
        }
        Ok(args)
    }

    fn load_tuning(path: Option<&str>) -> Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path))?;
        let tuning =
            Tuning::from_json(&json).with_context(|| format!("parsing tuning file {}", path))?;
        info!("Loaded tuning from {}", path);
        Ok(tuning)
    }

    #[derive(Debug, Default, Serialize)]
    struct Summary {
        seed: u64,
        frames: u64,
        runs: u32,
        best_score: u32,
        total_passed: u32,
        jumps: u32,
        last_score: u32,
    }

    pub fn run() -> Result<()> {
        let args = parse_args()?;
        let tuning = load_tuning(args.tuning.as_deref())?;
        let seed = args.seed.unwrap_or_else(rand::random);

        let mut platform = ScriptedPlatform::new(Screen::default());
        let mut state = GameState::new(tuning, platform.screen(), SpriteSizes::default(), seed)
            .context("building game")?;

        let mut summary = Summary {
            seed,
            ..Default::default()
        };
        let mut over_frames = 0;

        for _ in 0..args.frames {
            let dt = platform.frame_time().min(MAX_FRAME_DT);

            let mut tap = platform.tap();
            if state.phase == GamePhase::Over {
                over_frames += 1;
                if over_frames >= RESTART_DELAY_FRAMES {
                    state.resize(platform.screen())?;
                    tap = true;
                    over_frames = 0;
                }
            }

            let input = TickInput {
                tap,
                idle_mode: true,
            };
            tick(&mut state, &input, dt);

            for event in state.drain_events() {
                match event {
                    GameEvent::Started => summary.runs += 1,
                    GameEvent::Jumped => summary.jumps += 1,
                    GameEvent::ObstaclePassed { score } => {
                        summary.total_passed += 1;
                        summary.best_score = summary.best_score.max(score);
                        debug!("Passed pipe, score {}", score);
                    }
                    GameEvent::Collided { target } => {
                        debug!("Collided with {:?}", target);
                    }
                    GameEvent::Reset => {}
                }
            }
        }

        summary.frames = platform.frames();
        summary.last_score = state.score();
        info!(
            "Session done: {} runs, best score {}",
            summary.runs, summary.best_score
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Flapper (headless) starting...");
    runner::run()
}
