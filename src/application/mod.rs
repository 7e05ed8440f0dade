mod simulation;
mod importer;
mod session;

pub use simulation::{DEFAULT_INTERVAL_MS, SimState, SimulationLoop, parse_interval};
pub use importer::PatternImporter;
pub use session::Session;
