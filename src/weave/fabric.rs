//! Derived interlacement matrix (the drawdown)

use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Warp-by-pick boolean matrix; `true` where the warp thread lies over the weft
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fabric {
    cells: Array2<bool>,
}

impl Fabric {
    pub(crate) const fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Number of warp threads (W)
    pub fn warp_ends(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of weft picks (P)
    pub fn picks(&self) -> usize {
        self.cells.ncols()
    }

    /// Shape as (warp ends, picks)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Whether warp `warp` is over pick `pick`, `None` outside the fabric
    pub fn is_warp_up(&self, warp: usize, pick: usize) -> Option<bool> {
        self.cells.get([warp, pick]).copied()
    }

    /// Every pick for one warp thread
    pub fn warp(&self, warp: usize) -> Option<ArrayView1<'_, bool>> {
        (warp < self.warp_ends()).then(|| self.cells.row(warp))
    }

    /// Every warp thread for one pick
    pub fn pick(&self, pick: usize) -> Option<Vec<bool>> {
        (pick < self.picks()).then(|| self.cells.column(pick).to_vec())
    }

    /// Number of cells where the warp shows
    pub fn warp_up_count(&self) -> usize {
        self.cells.iter().filter(|&&up| up).count()
    }

    /// Underlying matrix
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Consume into the underlying matrix
    pub fn into_array(self) -> Array2<bool> {
        self.cells
    }

    /// Copy into nested rows, one per warp thread
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

// One line per warp thread: '#' warp up, '.' weft up
impl fmt::Display for Fabric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for &up in row {
                f.write_str(if up { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
