use slate_types::CastError;
use thiserror::Error;

/// Errors that can occur while constructing or transforming tables.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("row {row} has {len} values, but table only has {columns} columns")]
    RowTooLong {
        row: usize,
        len: usize,
        columns: usize,
    },

    #[error("column_names and column_types must be the same length ({names} vs {types})")]
    TypeCountMismatch { names: usize, types: usize },

    #[error("row_names has {names} entries, but table has {rows} rows")]
    RowNameCountMismatch { names: usize, rows: usize },

    #[error("row names cannot be integers (row {row}); use floats or text for numbered rows")]
    IntegerRowName { row: usize },

    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("rename expects {expected} names, got {actual}")]
    RenameLengthMismatch { expected: usize, actual: usize },

    #[error("table has no row names to rename")]
    RowsNotNamed,

    #[error("slice step cannot be zero")]
    ZeroStep,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("cast error: {0}")]
    Cast(#[from] CastError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
