//! Tests for the treadle-to-shaft tie-up matrix

#[cfg(test)]
mod tests {
    use ndarray::array;
    use weavedraft::{DraftError, TieUp};

    // Verifies a fresh tie-up has the requested shape with nothing tied
    // Fails if rows and columns are swapped or the fill value is wrong
    #[test]
    fn test_new_tie_up_is_untied() {
        let tie_up = TieUp::new(6, 4);
        assert_eq!(tie_up.treadles(), 6);
        assert_eq!(tie_up.shafts(), 4);
        assert_eq!(tie_up.dimensions(), (6, 4));
        assert!(tie_up.as_array().iter().all(|&tied| !tied));
    }

    // Verifies nested rows become treadles and their cells become shafts
    // Fails if the matrix is built transposed
    #[test]
    fn test_from_rows_orientation() -> weavedraft::Result<()> {
        let tie_up = TieUp::from_rows(&[vec![true, false, false], vec![false, true, true]])?;
        assert_eq!(tie_up.dimensions(), (2, 3));
        assert!(tie_up.is_tied(0, 0));
        assert!(!tie_up.is_tied(0, 1));
        assert!(tie_up.is_tied(1, 2));
        assert!(!tie_up.is_tied(5, 0));
        Ok(())
    }

    // Verifies a short row is reported by index with its length and row 0's length
    // Fails if the error reports whole-grid shapes instead of the offending row
    #[test]
    fn test_from_rows_names_short_row() {
        let result = TieUp::from_rows(&[vec![true, false], vec![true]]);
        assert_eq!(
            result,
            Err(DraftError::DimensionMismatch {
                grid: "tie_up",
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    // Verifies a row longer than row 0 is rejected the same way
    // Fails if only rows shorter than the first are detected
    #[test]
    fn test_from_rows_names_long_row() {
        let result = TieUp::from_rows(&[vec![true], vec![true, false], vec![false, true, true]]);
        let Err(error) = result else {
            unreachable!("ragged rows must be rejected");
        };
        assert_eq!(
            error,
            DraftError::DimensionMismatch {
                grid: "tie_up",
                row: 1,
                expected: 1,
                found: 2,
            }
        );
        assert_eq!(
            error.to_string(),
            "Row 1 of grid 'tie_up' has 2 cells, expected 1"
        );
    }

    // Verifies no rows at all gives an empty tie-up rather than an error
    // Fails if the first-row lookup treats an empty input as ragged
    #[test]
    fn test_from_rows_empty() -> weavedraft::Result<()> {
        let tie_up = TieUp::from_rows(&[])?;
        assert_eq!(tie_up.dimensions(), (0, 0));
        Ok(())
    }

    // Verifies toggle flips a cell, set writes it, and clear unties everything
    // Fails if toggle overwrites instead of flipping
    #[test]
    fn test_toggle_and_set() -> weavedraft::Result<()> {
        let mut tie_up = TieUp::new(2, 2);
        tie_up.toggle(1, 0)?;
        assert!(tie_up.is_tied(1, 0));
        tie_up.toggle(1, 0)?;
        assert!(!tie_up.is_tied(1, 0));

        tie_up.set(0, 1, true)?;
        assert!(tie_up.is_tied(0, 1));
        tie_up.clear();
        assert!(!tie_up.is_tied(0, 1));
        Ok(())
    }

    // Verifies edits outside the matrix fail with the cell and grid size
    // Fails if out-of-range edits are silently ignored
    #[test]
    fn test_toggle_outside_matrix_is_rejected() {
        let mut tie_up = TieUp::new(2, 3);
        assert_eq!(
            tie_up.toggle(0, 3),
            Err(DraftError::CellOutOfBounds {
                grid: "tie_up",
                row: 0,
                col: 3,
                dimensions: (2, 3),
            })
        );
    }

    // Verifies lifted shafts mirror the treadle's row; unknown treadles lift nothing
    // Fails if an unknown treadle yields a set with the wrong capacity
    #[test]
    fn test_lifted_shafts() {
        let tie_up = TieUp::from(array![[true, false, true, false], [false, false, false, false]]);

        let lifted = tie_up.lifted_shafts(0);
        assert_eq!(lifted.to_vec(), vec![0, 2]);
        assert_eq!(lifted.capacity(), 4);

        assert!(tie_up.lifted_shafts(1).is_empty());
        assert!(tie_up.lifted_shafts(7).is_empty());
        assert_eq!(tie_up.lifted_shafts(7).capacity(), 4);
    }

    // Verifies row views exist only for real treadles
    // Fails if a row past the end is returned instead of None
    #[test]
    fn test_row_access() {
        let tie_up = TieUp::from_array(array![[true, false], [false, true]]);
        assert_eq!(tie_up.row(1).map(|row| row.to_vec()), Some(vec![false, true]));
        assert!(tie_up.row(2).is_none());
    }
}
