use super::{PatternImporter, SimulationLoop, parse_interval};
use crate::domain::{Board, PatternSource};
use crate::error::{CatalogError, ImportError, IntervalError};
use tracing::warn;

/// Session is the explicitly owned simulation state: board, loop and
/// pattern source live here with explicit `new`/`reset`, independent
/// of any UI lifecycle. The frontend drives it one command at a time,
/// so the board has exactly one mutator active at any instant.
pub struct Session {
    pub board: Board,
    sim: SimulationLoop,
    source: Box<dyn PatternSource>,
    import_pending: bool,
}

impl Session {
    /// Create a session with an empty cols x rows board
    pub fn new(cols: usize, rows: usize, source: Box<dyn PatternSource>) -> Self {
        Self {
            board: Board::new(cols, rows),
            sim: SimulationLoop::new(),
            source,
            import_pending: false,
        }
    }

    /// Stop the loop, clear the board, zero the generation counter
    pub fn reset(&mut self) {
        self.sim.reset();
        self.board.clear();
    }

    pub fn run(&mut self, now_ms: u64) {
        self.sim.start(&mut self.board, now_ms);
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    /// Fire the pending simulation tick if due
    pub fn advance(&mut self, now_ms: u64) -> bool {
        self.sim.poll(&mut self.board, now_ms)
    }

    pub fn clear(&mut self) {
        self.board.clear();
    }

    pub fn randomize(&mut self) {
        self.board.randomize();
    }

    /// Coerce free-text interval input; invalid text keeps the prior
    /// interval and reports the rejection
    pub fn set_interval_text(&mut self, text: &str) -> Result<u64, IntervalError> {
        let ms = parse_interval(text)?;
        self.sim.set_interval(ms)?;
        Ok(ms)
    }

    /// Import a named pattern from the catalog. Pointer edits are
    /// refused while the import is outstanding, so the clear+seed
    /// commit cannot interleave with a drag in progress.
    pub fn load_pattern(&mut self, name: &str) -> Result<usize, ImportError> {
        self.import_pending = true;
        let result = PatternImporter::new(self.source.as_ref()).load(&mut self.board, name);
        self.import_pending = false;
        if let Err(err) = &result {
            warn!(name, %err, "pattern import failed");
        }
        result
    }

    /// Whether pointer edits must currently be refused
    pub fn editing_blocked(&self) -> bool {
        self.import_pending
    }

    pub fn pattern_names(&self) -> Result<Vec<String>, CatalogError> {
        self.source.names()
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn interval_ms(&self) -> u64 {
        self.sim.interval_ms()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.board.live_cells()
    }
}
