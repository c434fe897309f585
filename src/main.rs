//! Letter Drop headless demo
//!
//! Runs the simulation in a native loop standing in for the browser's
//! animation frames: jittered frame deltas, and a launcher driven either by
//! the autopilot or by a pointer sweeping across the viewport.
//!
//! Usage: `letter-drop [--sweep] [--seed N] [--config path.json]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::PathBuf;

    use clap::Parser;
    use letter_drop::consts::LAUNCHER_RANGE;
    use letter_drop::input::pointer_to_launcher_x;
    use letter_drop::sim::{GameEvent, SimState, aim_launcher, default_word, step};
    use letter_drop::{Result, SimConfig};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Nominal frame time (60 fps)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after this many frames (~5 minutes)
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    /// Frames to keep running after the game is lost
    const TAIL_FRAMES: u32 = 120;
    const VIEWPORT_WIDTH: f32 = 1280.0;
    /// Fixed advance standing in for real glyph measurement
    const GLYPH_WIDTH: f32 = 13.0;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Driver {
        Autopilot,
        Sweep,
    }

    #[derive(Parser, Debug)]
    #[command(name = "letter-drop")]
    #[command(about = "Headless letter drop run with a scripted launcher")]
    struct Args {
        /// Drive the launcher with a sweeping pointer instead of the autopilot
        #[arg(long)]
        sweep: bool,

        /// Seed for frame time jitter
        #[arg(long, default_value_t = 0x5eed)]
        seed: u64,

        /// JSON file overriding simulation constants
        #[arg(long)]
        config: Option<PathBuf>,
    }

    impl Args {
        fn driver(&self) -> Driver {
            if self.sweep {
                Driver::Sweep
            } else {
                Driver::Autopilot
            }
        }

        fn sim_config(&self) -> Result<SimConfig> {
            match &self.config {
                Some(path) => SimConfig::load(path),
                None => Ok(SimConfig::default()),
            }
        }
    }

    /// Pointer position for the sweep driver: a slow back-and-forth
    fn sweep_pointer(time: f32) -> f32 {
        let phase = (time * 0.35).sin();
        VIEWPORT_WIDTH / 2.0 * (1.0 + 0.6 * phase)
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        let driver = args.driver();
        let mut rng = Pcg32::seed_from_u64(args.seed);

        let specs = default_word(|_| GLYPH_WIDTH);
        let mut state = SimState::new(&specs, 0.0, args.sim_config()?)?;
        log::info!(
            "Letter Drop starting: {} letters, driver {:?}, seed {}",
            state.letters().len(),
            driver,
            args.seed
        );

        let mut time = 0.0f32;
        let mut launcher_x = 0.0f32;
        let mut hits = 0usize;
        let mut tail = 0u32;

        for frame in 0..MAX_FRAMES {
            // Browsers never deliver perfectly even frames
            let dt = FRAME_DT * rng.random_range(0.8f32..1.25);
            time += dt;

            launcher_x = match driver {
                Driver::Autopilot => aim_launcher(&state),
                Driver::Sweep => {
                    pointer_to_launcher_x(sweep_pointer(time), VIEWPORT_WIDTH, LAUNCHER_RANGE)
                        .unwrap_or(launcher_x)
                }
            };

            for event in step(&mut state, dt, launcher_x)? {
                match event {
                    GameEvent::LettersHit { ids } => {
                        hits += ids.len();
                        log::info!("Frame {}: hit {:?}", frame, ids);
                    }
                    GameEvent::Caught { slope } => {
                        log::debug!("Frame {}: caught, slope {:.3}", frame, slope);
                    }
                    GameEvent::Missed { leg } => {
                        log::info!("Frame {}: missed while {:?}", frame, leg);
                    }
                    GameEvent::Cleared => log::info!("Frame {}: all letters cleared", frame),
                }
            }

            if state.is_lost() {
                tail += 1;
                if tail >= TAIL_FRAMES {
                    break;
                }
            }
        }

        let ball = state.ball_pos();
        println!(
            "Run over after {} steps: {} letters hit, {} left, ball at ({:.1}, {:.1}), lost: {}",
            state.steps(),
            hits,
            state.letters().len(),
            ball.x,
            ball.y,
            state.is_lost()
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let args = Args::try_parse_from(["letter-drop"]).unwrap();
            assert_eq!(args.driver(), Driver::Autopilot);
            assert_eq!(args.seed, 0x5eed);
            assert!(args.config.is_none());
            assert_eq!(args.sim_config().unwrap(), SimConfig::default());
        }

        #[test]
        fn test_sweep_and_seed() {
            let args =
                Args::try_parse_from(["letter-drop", "--sweep", "--seed", "42"]).unwrap();
            assert_eq!(args.driver(), Driver::Sweep);
            assert_eq!(args.seed, 42);
        }

        #[test]
        fn test_missing_values_are_usage_errors() {
            assert!(Args::try_parse_from(["letter-drop", "--seed"]).is_err());
            assert!(Args::try_parse_from(["letter-drop", "--config"]).is_err());
            assert!(Args::try_parse_from(["letter-drop", "--seed", "abc"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = demo::run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly; there is no web entry point here
}
