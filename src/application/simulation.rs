use crate::domain::{Board, engine};
use crate::error::IntervalError;
use tracing::debug;

/// Interval used until the user supplies one
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Boards at or above this cell count evolve with the rayon path
const PARALLEL_THRESHOLD: usize = 100 * 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug)]
struct PendingTick {
    epoch: u64,
    due_ms: u64,
}

/// SimulationLoop drives repeated generation transitions on a
/// cooperative clock: the caller (frame loop or test) supplies
/// monotonic milliseconds to `start` and `poll`.
///
/// Cancellation is race-free: every scheduled tick carries the epoch
/// it was scheduled under, and `stop` bumps the epoch, so a tick that
/// was already due when `stop` ran can never mutate the board.
/// At most one tick is pending at any instant.
pub struct SimulationLoop {
    state: SimState,
    interval_ms: u64,
    epoch: u64,
    pending: Option<PendingTick>,
    generation: u64,
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self {
            state: SimState::Idle,
            interval_ms: DEFAULT_INTERVAL_MS,
            epoch: 0,
            pending: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    /// Generations applied since the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Change the tick interval. Takes effect from the next scheduling,
    /// not retroactively: an already-pending tick keeps its deadline.
    pub fn set_interval(&mut self, ms: u64) -> Result<(), IntervalError> {
        if ms == 0 {
            return Err(IntervalError("0".to_string()));
        }
        self.interval_ms = ms;
        Ok(())
    }

    /// Transition Idle -> Running: apply one generation immediately,
    /// then schedule the next tick. No-op while already Running.
    pub fn start(&mut self, board: &mut Board, now_ms: u64) {
        if self.state == SimState::Running {
            return;
        }
        self.state = SimState::Running;
        debug!(interval_ms = self.interval_ms, "simulation started");
        self.apply_generation(board);
        self.schedule(now_ms);
    }

    /// Transition Running -> Idle (idempotent) and invalidate any
    /// pending tick. No tick's effects are applied after this returns.
    pub fn stop(&mut self) {
        self.epoch += 1;
        self.pending = None;
        if self.state == SimState::Running {
            self.state = SimState::Idle;
            debug!(generation = self.generation, "simulation stopped");
        }
    }

    /// Fire the pending tick if it is due. Returns whether a
    /// generation was applied this call.
    pub fn poll(&mut self, board: &mut Board, now_ms: u64) -> bool {
        let Some(tick) = self.pending else {
            return false;
        };
        // The epoch guard makes a tick scheduled before a stop() a no-op
        if self.state != SimState::Running || tick.epoch != self.epoch || now_ms < tick.due_ms {
            return false;
        }
        self.pending = None;
        self.apply_generation(board);
        self.schedule(now_ms);
        true
    }

    /// Stop and zero the generation counter
    pub fn reset(&mut self) {
        self.stop();
        self.generation = 0;
    }

    fn schedule(&mut self, now_ms: u64) {
        // Interval is read here, at schedule time
        self.pending = Some(PendingTick {
            epoch: self.epoch,
            due_ms: now_ms + self.interval_ms,
        });
    }

    fn apply_generation(&mut self, board: &mut Board) {
        let (cols, rows) = board.dimensions();
        *board = if cols * rows >= PARALLEL_THRESHOLD {
            engine::step_parallel(board)
        } else {
            engine::step(board)
        };
        self.generation += 1;
    }
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce free-text interval input into positive milliseconds.
/// Invalid text must not silently corrupt the interval; callers keep
/// the prior value on rejection.
pub fn parse_interval(text: &str) -> Result<u64, IntervalError> {
    match text.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(IntervalError(text.to_string())),
    }
}
