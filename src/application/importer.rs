use crate::domain::{Board, Cell, PatternSource};
use crate::error::ImportError;
use tracing::{debug, warn};

/// PatternImporter seeds the board from a named catalog pattern.
///
/// The board is cleared first, then every fetched coordinate is
/// validated against the extent before the first write: a single
/// out-of-range coordinate rejects the whole import, and any failure
/// (fetch, parse, unknown name) leaves the board in the cleared
/// pre-import state rather than half-applied.
pub struct PatternImporter<'a> {
    source: &'a dyn PatternSource,
}

impl<'a> PatternImporter<'a> {
    pub fn new(source: &'a dyn PatternSource) -> Self {
        Self { source }
    }

    /// Load `name` onto the board. Returns the number of cells seeded.
    pub fn load(&self, board: &mut Board, name: &str) -> Result<usize, ImportError> {
        board.clear();

        let coords = self
            .source
            .coords(name)?
            .ok_or_else(|| ImportError::UnknownPattern(name.to_string()))?;

        let (cols, rows) = board.dimensions();
        for coord in &coords {
            if !board.in_bounds(coord.x, coord.y) {
                warn!(name, x = coord.x, y = coord.y, "rejecting import with out-of-range coordinate");
                return Err(ImportError::OutOfBounds { x: coord.x, y: coord.y, cols, rows });
            }
        }

        // All coordinates validated; commit is all-or-nothing
        for coord in &coords {
            board.set(coord.x as usize, coord.y as usize, Cell::Alive);
        }
        debug!(name, cells = coords.len(), "pattern imported");
        Ok(coords.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coord, JsonCatalog};
    use crate::error::CatalogError;

    struct OfflineSource;

    impl PatternSource for OfflineSource {
        fn names(&self) -> Result<Vec<String>, CatalogError> {
            Err(CatalogError::Fetch("connection refused".to_string()))
        }

        fn coords(&self, _name: &str) -> Result<Option<Vec<Coord>>, CatalogError> {
            Err(CatalogError::Fetch("connection refused".to_string()))
        }
    }

    fn catalog() -> JsonCatalog {
        let mut catalog = JsonCatalog::new(r#"["Blinker", "Escapee", "Garbled"]"#);
        catalog.add_document("Blinker", r#"[{"x": 1, "y": 2}, {"x": 2, "y": 2}, {"x": 3, "y": 2}]"#);
        catalog.add_document("Escapee", r#"[{"x": 0, "y": 0}, {"x": 9, "y": 3}]"#);
        catalog.add_document("Garbled", r#"{"x": 1}"#);
        catalog
    }

    #[test]
    fn test_import_clears_then_seeds() {
        let catalog = catalog();
        let mut board = Board::new(8, 8);
        board.set(7, 7, Cell::Alive);

        let seeded = PatternImporter::new(&catalog).load(&mut board, "Blinker").unwrap();
        assert_eq!(seeded, 3);
        assert_eq!(board.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_out_of_range_coordinate_rejects_whole_import() {
        let catalog = catalog();
        // (9, 3) is outside a 5x5 board; (0, 0) is valid but must not land
        let mut board = Board::new(5, 5);
        board.set(4, 4, Cell::Alive);

        let err = PatternImporter::new(&catalog).load(&mut board, "Escapee").unwrap_err();
        assert!(matches!(err, ImportError::OutOfBounds { x: 9, y: 3, .. }));
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_fetch_failure_leaves_board_cleared() {
        let mut board = Board::new(5, 5);
        board.set(1, 1, Cell::Alive);

        let err = PatternImporter::new(&OfflineSource).load(&mut board, "Blinker").unwrap_err();
        assert!(matches!(err, ImportError::Catalog(CatalogError::Fetch(_))));
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_parse_failure_leaves_board_cleared() {
        let catalog = catalog();
        let mut board = Board::new(5, 5);

        let err = PatternImporter::new(&catalog).load(&mut board, "Garbled").unwrap_err();
        assert!(matches!(err, ImportError::Catalog(CatalogError::Parse(_))));
        assert!(board.live_cells().is_empty());
    }

    #[test]
    fn test_unknown_pattern_reported() {
        let catalog = catalog();
        let mut board = Board::new(5, 5);

        let err = PatternImporter::new(&catalog).load(&mut board, "Loafer").unwrap_err();
        assert!(matches!(err, ImportError::UnknownPattern(_)));
        assert!(board.live_cells().is_empty());
    }
}
