//! Error types for draft construction, editing and weave derivation

use std::fmt;

/// Main error type for all draft operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A warp thread is drawn through a shaft the tie-up does not have
    ShaftOutOfRange {
        /// Warp thread position in the threading
        thread: usize,
        /// Shaft index assigned to that thread
        shaft: usize,
        /// Number of shafts available (exclusive bound)
        shafts: usize,
    },

    /// A weft pick engages a treadle the tie-up does not have
    TreadleOutOfRange {
        /// Pick position in the treadling
        pick: usize,
        /// Treadle index assigned to that pick
        treadle: usize,
        /// Number of treadles available (exclusive bound)
        treadles: usize,
    },

    /// A row of a nested-row grid has a different length from the first row
    DimensionMismatch {
        /// Name of the offending grid
        grid: &'static str,
        /// Index of the first row whose length differs
        row: usize,
        /// Length of row 0, which every row must share
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// An edit addressed a cell outside its grid
    CellOutOfBounds {
        /// Name of the edited grid
        grid: &'static str,
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// An edit addressed a position past the end of a threading or treadling
    PositionOutOfBounds {
        /// Name of the edited sequence
        grid: &'static str,
        /// Requested position
        position: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Draft parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShaftOutOfRange {
                thread,
                shaft,
                shafts,
            } => {
                write!(
                    f,
                    "Warp thread {thread} is threaded on shaft {shaft}, but only {shafts} shafts exist"
                )
            }
            Self::TreadleOutOfRange {
                pick,
                treadle,
                treadles,
            } => {
                write!(
                    f,
                    "Pick {pick} engages treadle {treadle}, but only {treadles} treadles exist"
                )
            }
            Self::DimensionMismatch {
                grid,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} of grid '{grid}' has {found} cells, expected {expected}"
                )
            }
            Self::CellOutOfBounds {
                grid,
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is outside grid '{grid}' (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::PositionOutOfBounds {
                grid,
                position,
                len,
            } => {
                write!(
                    f,
                    "Position {position} is outside '{grid}' (length {len})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Convenience type alias for draft results
pub type Result<T> = std::result::Result<T, DraftError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DraftError {
    DraftError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
