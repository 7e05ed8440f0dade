use thiserror::Error;

/// Errors surfaced by the pattern catalog collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The transport failed to produce a document (network, missing file, ...)
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    /// The document arrived but is not valid catalog JSON
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from importing a named pattern onto the board.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("pattern '{0}' not found in catalog")]
    UnknownPattern(String),

    /// The catalog is untrusted; a single bad coordinate rejects the
    /// whole import and the board stays cleared.
    #[error("coordinate ({x}, {y}) outside {cols}x{rows} board")]
    OutOfBounds { x: i64, y: i64, cols: usize, rows: usize },
}

/// Rejected tick-interval input; the prior valid interval is retained.
#[derive(Debug, Error)]
#[error("invalid interval '{0}': expected positive milliseconds")]
pub struct IntervalError(pub String);
