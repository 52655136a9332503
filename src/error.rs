use thiserror::Error;

/// Errors raised while reading a scenario
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input ended before a required value
    #[error("unexpected end of input, expected {0}")]
    MissingToken(&'static str),

    /// Token is not an integer of the right kind
    #[error("invalid {what}: {token:?}")]
    InvalidNumber { what: &'static str, token: String },

    /// A value that must not be negative was
    #[error("{what} must not be negative, got {value}")]
    NegativeValue { what: &'static str, value: i64 },

    /// Tower placed outside `[0, max_row] x [0, max_col]`
    #[error("tower at ({row}, {col}) is outside the {max_row}x{max_col} grid")]
    TowerOutOfBounds {
        row: i32,
        col: i32,
        max_row: i32,
        max_col: i32,
    },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
