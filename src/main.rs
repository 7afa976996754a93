//! Maze Chase entry point
//!
//! Runs a headless session: a demo pilot steers the player toward the
//! nearest item while simulated time advances in 60 Hz frames.
//!
//! Usage: `maze-chase [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use maze_chase::sim::{Direction, GameEvent, Snapshot};
    use maze_chase::{Command, Config, Session};

    /// Host frame length
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after two simulated minutes
    const TIME_LIMIT_MS: f64 = 120_000.0;
    /// Frames spent sidestepping after getting stuck
    const DETOUR_FRAMES: u32 = 20;
    const DEFAULT_SEED: u64 = 0x5eed;

    /// Steers toward the closest item, sidestepping when pinned to a wall
    #[derive(Debug, Default)]
    struct DemoPilot {
        last_pos: Option<Vec2>,
        detour: Option<(Direction, u32)>,
    }

    impl DemoPilot {
        fn steer(&mut self, snap: &Snapshot) -> Option<Direction> {
            let pos = snap.player.pos;
            let stuck = self.last_pos == Some(pos);
            self.last_pos = Some(pos);

            if let Some((dir, frames)) = self.detour.take() {
                if frames > 0 && !stuck {
                    self.detour = Some((dir, frames - 1));
                    return Some(dir);
                }
            }

            if stuck {
                let dir = sidestep(snap.player.direction?, snap.tick);
                self.detour = Some((dir, DETOUR_FRAMES));
                return Some(dir);
            }

            let target = snap
                .items
                .iter()
                .min_by(|a, b| pos.distance(a.pos).total_cmp(&pos.distance(b.pos)))?;
            let delta = target.pos - pos;
            let dir = if delta.x.abs() >= delta.y.abs() {
                if delta.x < 0.0 { Direction::Left } else { Direction::Right }
            } else if delta.y < 0.0 {
                Direction::Up
            } else {
                Direction::Down
            };
            Some(dir)
        }
    }

    /// A perpendicular heading, alternating sides
    fn sidestep(dir: Direction, tick: u64) -> Direction {
        let flip = tick % 2 == 0;
        match (dir, flip) {
            (Direction::Up | Direction::Down, true) => Direction::Left,
            (Direction::Up | Direction::Down, false) => Direction::Right,
            (Direction::Left | Direction::Right, true) => Direction::Up,
            (Direction::Left | Direction::Right, false) => Direction::Down,
        }
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => match Config::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            },
            None => Config::default(),
        };
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let mut session = match Session::new(config, seed) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Invalid config: {}", e);
                std::process::exit(1);
            }
        };

        session.handle(Command::Start);
        let mut pilot = DemoPilot::default();
        while !session.phase().is_terminal() && session.now_ms() < TIME_LIMIT_MS {
            if let Some(dir) = pilot.steer(&session.snapshot()) {
                session.handle(Command::Steer(dir));
            }
            session.advance(FRAME_MS);

            for event in session.drain_events() {
                if let GameEvent::ItemConsumed { score, .. } = event {
                    if score % 10 == 0 {
                        log::info!("Score {} at {:.1}s", score, session.now_ms() / 1000.0);
                    }
                }
            }
        }

        if !session.phase().is_terminal() {
            log::warn!("Time limit reached with score {}", session.score());
        }

        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Maze Chase (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Session` directly; nothing to run here
}
