mod cell;
mod board;
mod pattern;
pub mod engine;

pub use cell::Cell;
pub use board::Board;
pub use pattern::{BuiltinCatalog, Coord, JsonCatalog, Pattern, PatternSource, presets};
