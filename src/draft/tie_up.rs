//! Treadle-to-shaft wiring matrix

use ndarray::{Array2, ArrayView1};

use crate::io::error::{DraftError, Result};
use crate::weave::shafts::ShaftSet;

/// Boolean matrix with one row per treadle and one column per shaft
///
/// `is_tied(t, s)` means pressing treadle `t` lifts shaft `s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieUp {
    ties: Array2<bool>,
}

impl TieUp {
    /// Create a tie-up with no treadle tied to any shaft
    pub fn new(treadles: usize, shafts: usize) -> Self {
        Self {
            ties: Array2::from_elem((treadles, shafts), false),
        }
    }

    /// Wrap a `treadles x shafts` matrix
    pub const fn from_array(ties: Array2<bool>) -> Self {
        Self { ties }
    }

    /// Build from nested rows, one row per treadle
    ///
    /// An empty `rows` gives a 0x0 tie-up.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` naming the first row whose length differs
    /// from row 0
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let shafts = rows.first().map_or(0, Vec::len);

        if let Some((row, ragged)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != shafts)
        {
            return Err(DraftError::DimensionMismatch {
                grid: "tie_up",
                row,
                expected: shafts,
                found: ragged.len(),
            });
        }

        let ties = Array2::from_shape_fn((rows.len(), shafts), |(treadle, shaft)| {
            rows.get(treadle)
                .and_then(|cells| cells.get(shaft))
                .copied()
                .unwrap_or(false)
        });

        Ok(Self { ties })
    }

    /// Number of treadles (T, row count)
    pub fn treadles(&self) -> usize {
        self.ties.nrows()
    }

    /// Number of shafts (S, column count)
    pub fn shafts(&self) -> usize {
        self.ties.ncols()
    }

    /// Shape as (treadles, shafts)
    pub fn dimensions(&self) -> (usize, usize) {
        self.ties.dim()
    }

    /// Whether `treadle` lifts `shaft`; false for cells outside the matrix
    pub fn is_tied(&self, treadle: usize, shaft: usize) -> bool {
        self.ties.get([treadle, shaft]).copied().unwrap_or(false)
    }

    /// Tie or untie one cell
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell is outside the matrix
    pub fn set(&mut self, treadle: usize, shaft: usize, tied: bool) -> Result<()> {
        let cell = self.cell_mut(treadle, shaft)?;
        *cell = tied;
        Ok(())
    }

    /// Flip one cell
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell is outside the matrix
    pub fn toggle(&mut self, treadle: usize, shaft: usize) -> Result<()> {
        let cell = self.cell_mut(treadle, shaft)?;
        *cell ^= true;
        Ok(())
    }

    /// Shafts lifted by `treadle`, empty if the treadle does not exist
    pub fn lifted_shafts(&self, treadle: usize) -> ShaftSet {
        if treadle < self.treadles() {
            ShaftSet::from_row(self.ties.row(treadle))
        } else {
            ShaftSet::new(self.shafts())
        }
    }

    /// One treadle's row
    pub fn row(&self, treadle: usize) -> Option<ArrayView1<'_, bool>> {
        (treadle < self.treadles()).then(|| self.ties.row(treadle))
    }

    /// Underlying matrix
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.ties
    }

    /// Untie every cell
    pub fn clear(&mut self) {
        self.ties.fill(false);
    }

    fn cell_mut(&mut self, treadle: usize, shaft: usize) -> Result<&mut bool> {
        let dimensions = self.ties.dim();
        self.ties
            .get_mut([treadle, shaft])
            .ok_or(DraftError::CellOutOfBounds {
                grid: "tie_up",
                row: treadle,
                col: shaft,
                dimensions,
            })
    }
}

impl From<Array2<bool>> for TieUp {
    fn from(ties: Array2<bool>) -> Self {
        Self::from_array(ties)
    }
}
