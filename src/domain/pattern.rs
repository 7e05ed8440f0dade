use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashMap;

/// One live-cell coordinate as the catalog delivers it: 0-based grid
/// coordinates, signed because the data is untrusted until the
/// importer validates it against the board extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

/// A named preset: the coordinates to seed as live cells.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Coord>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        let cells = cells.into_iter().map(|(x, y)| Coord { x, y }).collect();
        Self { name, description, cells }
    }
}

/// Provider side of the pattern-catalog contract: an index of names
/// plus a per-name coordinate list. Injected into the importer so the
/// engine is testable without network access.
pub trait PatternSource {
    /// The catalog index
    fn names(&self) -> Result<Vec<String>, CatalogError>;

    /// Coordinate list for one pattern; `None` when the name is not
    /// in the catalog
    fn coords(&self, name: &str) -> Result<Option<Vec<Coord>>, CatalogError>;
}

/// Catalog over raw JSON documents: an index document (array of
/// strings) and one document per pattern (array of `{"x": int,
/// "y": int}` objects, any order). Transport-agnostic - whatever
/// fetched the bytes hands them over here.
#[derive(Default)]
pub struct JsonCatalog {
    index: String,
    documents: HashMap<String, String>,
}

impl JsonCatalog {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            documents: HashMap::new(),
        }
    }

    /// Register the document backing one pattern name
    pub fn add_document(&mut self, name: impl Into<String>, json: impl Into<String>) {
        self.documents.insert(name.into(), json.into());
    }
}

impl PatternSource for JsonCatalog {
    fn names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(serde_json::from_str(&self.index)?)
    }

    fn coords(&self, name: &str) -> Result<Option<Vec<Coord>>, CatalogError> {
        match self.documents.get(name) {
            Some(doc) => Ok(Some(serde_json::from_str(doc)?)),
            None => Ok(None),
        }
    }
}

/// Offline catalog backed by the classic preset library below.
pub struct BuiltinCatalog {
    patterns: Vec<Pattern>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self { patterns: presets::all_patterns() }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSource for BuiltinCatalog {
    fn names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.patterns.iter().map(|p| p.name.to_string()).collect())
    }

    fn coords(&self, name: &str) -> Result<Option<Vec<Coord>>, CatalogError> {
        Ok(self
            .patterns
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.cells.clone()))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (2, 1),
                (3, 2),
                (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (1, 2), (2, 2), (3, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (2, 1), (3, 1), (4, 1),
                (1, 2), (2, 2), (3, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (1, 1), (2, 1),
                (1, 2),
                (4, 3),
                (3, 4), (4, 4),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (4, 2), (5, 2), (6, 2), (10, 2), (11, 2), (12, 2),
                // Upper middle
                (2, 4), (7, 4), (9, 4), (14, 4),
                (2, 5), (7, 5), (9, 5), (14, 5),
                (2, 6), (7, 6), (9, 6), (14, 6),
                // Center
                (4, 7), (5, 7), (6, 7), (10, 7), (11, 7), (12, 7),
                (4, 9), (5, 9), (6, 9), (10, 9), (11, 9), (12, 9),
                // Lower middle
                (2, 10), (7, 10), (9, 10), (14, 10),
                (2, 11), (7, 11), (9, 11), (14, 11),
                (2, 12), (7, 12), (9, 12), (14, 12),
                // Bottom
                (4, 14), (5, 14), (6, 14), (10, 14), (11, 14), (12, 14),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (2, 1), (5, 1),
                (1, 2),
                (1, 3), (5, 3),
                (1, 4), (2, 4), (3, 4), (4, 4),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (1, 5), (1, 6),
                (2, 5), (2, 6),
                // Left circle
                (11, 5), (11, 6), (11, 7),
                (12, 4), (12, 8),
                (13, 3), (13, 9),
                (14, 3), (14, 9),
                (15, 6),
                (16, 4), (16, 8),
                (17, 5), (17, 6), (17, 7),
                (18, 6),
                // Middle pieces
                (21, 3), (21, 4), (21, 5),
                (22, 3), (22, 4), (22, 5),
                (23, 2), (23, 6),
                (25, 1), (25, 2), (25, 6), (25, 7),
                // Right square
                (35, 3), (35, 4),
                (36, 3), (36, 4),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (2, 1), (3, 1),
                (1, 2), (2, 2),
                (2, 3),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (2, 1),
                (4, 2),
                (1, 3), (2, 3), (5, 3), (6, 3), (7, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (1, 1), (2, 1),
                (1, 2), (2, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}
