//! Cooperative timer queue
//!
//! Periodic jobs share one simulated clock. The caller pulls due jobs one at
//! a time and runs each to completion before asking for the next, so jobs
//! never overlap.

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u32);

/// Work a timer performs when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Fast simulation tick
    Tick,
    /// Pick a new heading for one adversary
    Retarget { adversary: usize },
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    job: Job,
    period_ms: f64,
    /// Clock value when the timer was armed
    anchor_ms: f64,
    fired: u64,
}

impl Timer {
    /// Computed from the anchor so long runs don't accumulate drift
    #[inline]
    fn due_ms(&self) -> f64 {
        self.anchor_ms + self.period_ms * (self.fired + 1) as f64
    }
}

/// Single-threaded run queue of periodic jobs
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: f64,
    /// Kept in creation order; ties fire in this order
    timers: Vec<Timer>,
    next_id: u32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run `job` every `period_ms`, first firing one period from now
    pub fn every(&mut self, period_ms: f64, job: Job) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            job,
            period_ms,
            anchor_ms: self.now_ms,
            fired: 0,
        });
        id
    }

    /// Stop a timer. Returns false if it was already gone.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Number of live timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Pop the earliest job due at or before `until_ms`, moving the clock to its due time
    pub fn next_due(&mut self, until_ms: f64) -> Option<Job> {
        let (index, due) = self
            .timers
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.due_ms()))
            .filter(|&(_, due)| due <= until_ms)
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let timer = &mut self.timers[index];
        timer.fired += 1;
        self.now_ms = self.now_ms.max(due);
        Some(timer.job)
    }

    /// Move the clock forward once every due job has run
    pub fn settle(&mut self, until_ms: f64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
