// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Board, BuiltinCatalog, Cell, Coord, JsonCatalog, Pattern, PatternSource};
pub use application::{PatternImporter, Session, SimState, SimulationLoop, parse_interval};
pub use error::{CatalogError, ImportError, IntervalError};
pub use input::InputMapper;
