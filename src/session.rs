//! Session context
//!
//! A [`Session`] owns one game: its configuration, state, scheduler, RNG and
//! the notifier told about the outcome. Hosts feed it commands and elapsed
//! time; renderers read [`Snapshot`]s from it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::input::Command;
use crate::sim::{
    Direction, GameEvent, GamePhase, GameState, Job, Scheduler, Snapshot, TickInput, TimerId,
    retarget, tick,
};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// User-facing sink for the end-of-session message
pub trait Notifier {
    fn notify(&mut self, outcome: Outcome, message: &str);
}

/// Default notifier: writes the message to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, outcome: Outcome, message: &str) {
        log::info!("{:?}: {}", outcome, message);
    }
}

/// One game from idle to won or lost
pub struct Session {
    config: Config,
    seed: u64,
    state: GameState,
    scheduler: Scheduler,
    /// Every timer armed by `start`, cancelled together on game end
    timers: Vec<TimerId>,
    rng: Pcg32,
    /// Latched until the next fast tick
    input: TickInput,
    notifier: Box<dyn Notifier>,
}

impl Session {
    /// Validate `config` and lay out an idle session
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(&config);
        log::info!(
            "Session created: seed {}, {}x{} world, {} walls, {} adversaries",
            seed,
            config.world_width,
            config.world_height,
            config.walls.len(),
            config.adversary_count()
        );

        Ok(Self {
            config,
            seed,
            state,
            scheduler: Scheduler::new(),
            timers: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            input: TickInput::default(),
            notifier: Box::new(LogNotifier),
        })
    }

    /// Replace the default log notifier
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Simulated milliseconds since creation
    pub fn now_ms(&self) -> f64 {
        self.scheduler.now_ms()
    }

    /// Timers still armed (zero once the session has ended)
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Apply a command from the input collaborator
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start => {
                self.start();
            }
            Command::Steer(direction) => {
                self.steer(direction);
            }
        }
    }

    /// Idle -> Running and arm the periodic drivers. No-op in any other phase.
    pub fn start(&mut self) -> bool {
        if !self.state.start() {
            return false;
        }

        let tick_timer = self.scheduler.every(self.config.tick_period_ms, Job::Tick);
        self.timers.push(tick_timer);
        for adversary in 0..self.state.adversaries.len() {
            let id = self
                .scheduler
                .every(self.config.retarget_period_ms, Job::Retarget { adversary });
            self.timers.push(id);
        }
        true
    }

    /// Request a player heading for the next tick. Ignored unless running.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.input.direction = Some(direction);
        true
    }

    /// Run every job that falls due in the next `elapsed_ms`
    pub fn advance(&mut self, elapsed_ms: f64) {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return;
        }

        let until = self.scheduler.now_ms() + elapsed_ms;
        while let Some(job) = self.scheduler.next_due(until) {
            self.run(job);
            if self.state.phase.is_terminal() {
                self.finish();
                break;
            }
        }
        self.scheduler.settle(until);
    }

    fn run(&mut self, job: Job) {
        match job {
            Job::Tick => {
                let input = std::mem::take(&mut self.input);
                tick(&mut self.state, &input);
            }
            Job::Retarget { adversary } => {
                retarget(&mut self.state, adversary, &mut self.rng);
            }
        }
    }

    /// Cancel all timers and tell the notifier how it went
    fn finish(&mut self) {
        let cancelled = self
            .timers
            .drain(..)
            .filter(|&id| self.scheduler.cancel(id))
            .count();

        let (outcome, message) = match self.state.phase {
            GamePhase::Won => (Outcome::Won, &self.config.victory_message),
            GamePhase::Lost => (Outcome::Lost, &self.config.defeat_message),
            _ => return,
        };
        log::info!(
            "Session over after {} ticks ({} timers cancelled)",
            self.state.time_ticks,
            cancelled
        );
        self.notifier.notify(outcome, message);
    }
}
