//! Tests for error message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use weavedraft::DraftError;

    // Verifies shaft errors name the thread, the shaft and the bound
    // Fails if any of the three values is missing from the message
    #[test]
    fn test_shaft_out_of_range_message() {
        let error = DraftError::ShaftOutOfRange {
            thread: 7,
            shaft: 5,
            shafts: 4,
        };

        let message = error.to_string();
        assert!(message.contains("thread 7"));
        assert!(message.contains("shaft 5"));
        assert!(message.contains("only 4 shafts"));
    }

    // Verifies treadle errors name the pick, the treadle and the bound
    // Fails if any of the three values is missing from the message
    #[test]
    fn test_treadle_out_of_range_message() {
        let error = DraftError::TreadleOutOfRange {
            pick: 3,
            treadle: 9,
            treadles: 6,
        };

        let message = error.to_string();
        assert!(message.contains("Pick 3"));
        assert!(message.contains("treadle 9"));
        assert!(message.contains("only 6 treadles"));
    }

    // Verifies ragged-row errors name the grid, the row and both row lengths
    // Fails if the expected and found lengths are printed the wrong way round
    #[test]
    fn test_dimension_mismatch_message() {
        let error = DraftError::DimensionMismatch {
            grid: "tie_up",
            row: 4,
            expected: 3,
            found: 1,
        };

        assert_eq!(
            error.to_string(),
            "Row 4 of grid 'tie_up' has 1 cells, expected 3"
        );
    }

    // Verifies cell errors name the grid, the cell and the grid size
    // Fails if the cell coordinates are dropped from the message
    #[test]
    fn test_cell_out_of_bounds_message() {
        let error = DraftError::CellOutOfBounds {
            grid: "threading",
            row: 20,
            col: 1,
            dimensions: (20, 4),
        };

        let message = error.to_string();
        assert!(message.contains("(20, 1)"));
        assert!(message.contains("threading"));
        assert!(message.contains("20x4"));
    }

    // Verifies position errors report a 1-D position and length
    // Fails if a fake column dimension appears in the message
    #[test]
    fn test_position_out_of_bounds_message() {
        let error = DraftError::PositionOutOfBounds {
            grid: "treadling",
            position: 12,
            len: 10,
        };

        let message = error.to_string();
        assert!(message.contains("Position 12"));
        assert!(message.contains("length 10"));
    }

    // Verifies contract violations are leaf errors with no underlying cause
    // Fails if an error wraps a source that callers would have to unwrap
    #[test]
    fn test_errors_have_no_source() {
        let error = DraftError::InvalidParameter {
            parameter: "picks",
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };

        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'picks' = '0': must be at least 1"
        );
    }
}
