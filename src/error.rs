use color_engine::ParseColorError;
use thiserror::Error;

/// Errors raised while loading the color catalog.
///
/// Every variant that refers to file content carries a 1-based line
/// number so a broken catalog row can be found and fixed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is empty (no header row)")]
    Empty,

    #[error("catalog header is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unclosed quoted field")]
    UnclosedQuote { line: usize },

    #[error("line {line}: invalid color {value:?}: {source}")]
    BadColor {
        line: usize,
        value: String,
        #[source]
        source: ParseColorError,
    },
}
