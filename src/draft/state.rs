//! Editable draft owned by the caller
//!
//! Holds the three input grids at fixed session dimensions and applies the
//! single-cell toggles an editor issues on click. Every edit is checked
//! against the dimensions first, so a rejected edit leaves the draft as it was
//! and the draft always satisfies the index bounds `derive` requires.

use crate::draft::{Threading, TieUp, Treadling};
use crate::io::configuration::DraftDimensions;
use crate::io::error::{DraftError, Result};
use crate::weave::engine::derive;
use crate::weave::fabric::Fabric;

/// Threading, tie-up and treadling for one editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    dimensions: DraftDimensions,
    threading: Threading,
    tie_up: TieUp,
    treadling: Treadling,
}

impl Draft {
    /// Create an empty draft: nothing threaded, tied or treadled
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any dimension is zero or too large
    pub fn new(dimensions: DraftDimensions) -> Result<Self> {
        dimensions.validate()?;
        Ok(Self::empty(dimensions))
    }

    fn empty(dimensions: DraftDimensions) -> Self {
        Self {
            dimensions,
            threading: Threading::new(dimensions.warp_ends),
            tie_up: TieUp::new(dimensions.treadles, dimensions.shafts),
            treadling: Treadling::new(dimensions.picks),
        }
    }

    /// Assemble a draft from existing grids, taking dimensions from their shapes
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the inferred dimensions are invalid
    /// - `ShaftOutOfRange` / `TreadleOutOfRange` if an index exceeds the tie-up
    pub fn from_parts(threading: Threading, tie_up: TieUp, treadling: Treadling) -> Result<Self> {
        let dimensions = DraftDimensions::new(
            threading.len(),
            tie_up.shafts(),
            tie_up.treadles(),
            treadling.len(),
        );
        dimensions.validate()?;
        threading.validate(dimensions.shafts)?;
        treadling.validate(dimensions.treadles)?;

        Ok(Self {
            dimensions,
            threading,
            tie_up,
            treadling,
        })
    }

    /// Session dimensions
    pub const fn dimensions(&self) -> DraftDimensions {
        self.dimensions
    }

    /// Current threading
    pub const fn threading(&self) -> &Threading {
        &self.threading
    }

    /// Current tie-up
    pub const fn tie_up(&self) -> &TieUp {
        &self.tie_up
    }

    /// Current treadling
    pub const fn treadling(&self) -> &Treadling {
        &self.treadling
    }

    /// Flip the threading cell (thread, shaft)
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell is outside `warp_ends x shafts`
    pub fn toggle_threading(&mut self, thread: usize, shaft: usize) -> Result<()> {
        Self::check_cell(
            "threading",
            thread,
            shaft,
            (self.dimensions.warp_ends, self.dimensions.shafts),
        )?;
        self.threading.toggle(thread, shaft)?;
        tracing::trace!(thread, shaft = ?self.threading.shaft(thread), "threading toggled");
        Ok(())
    }

    /// Flip the tie-up cell (treadle, shaft)
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell is outside `treadles x shafts`
    pub fn toggle_tie_up(&mut self, treadle: usize, shaft: usize) -> Result<()> {
        self.tie_up.toggle(treadle, shaft)?;
        tracing::trace!(
            treadle,
            shaft,
            tied = self.tie_up.is_tied(treadle, shaft),
            "tie-up toggled"
        );
        Ok(())
    }

    /// Flip the treadling cell (pick, treadle)
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell is outside `picks x treadles`
    pub fn toggle_treadling(&mut self, pick: usize, treadle: usize) -> Result<()> {
        Self::check_cell(
            "treadling",
            pick,
            treadle,
            (self.dimensions.picks, self.dimensions.treadles),
        )?;
        self.treadling.toggle(pick, treadle)?;
        tracing::trace!(pick, treadle = ?self.treadling.treadle(pick), "treadling toggled");
        Ok(())
    }

    /// Put a warp thread on a shaft, or take it off all shafts with `None`
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the thread or shaft is outside the draft
    pub fn set_threading(&mut self, thread: usize, shaft: Option<usize>) -> Result<()> {
        Self::check_cell(
            "threading",
            thread,
            shaft.unwrap_or(0),
            (self.dimensions.warp_ends, self.dimensions.shafts),
        )?;
        self.threading.assign(thread, shaft)
    }

    /// Press a treadle on a pick, or release it with `None`
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the pick or treadle is outside the draft
    pub fn set_treadling(&mut self, pick: usize, treadle: Option<usize>) -> Result<()> {
        Self::check_cell(
            "treadling",
            pick,
            treadle.unwrap_or(0),
            (self.dimensions.picks, self.dimensions.treadles),
        )?;
        self.treadling.assign(pick, treadle)
    }

    /// Reset every grid to its empty state, keeping dimensions
    pub fn clear(&mut self) {
        self.threading = Threading::new(self.dimensions.warp_ends);
        self.tie_up.clear();
        self.treadling = Treadling::new(self.dimensions.picks);
    }

    /// Derive the fabric for the current grids
    ///
    /// # Errors
    ///
    /// Propagates `derive` errors; a draft built through this type's
    /// constructors and edits always passes validation
    pub fn weave(&self) -> Result<Fabric> {
        derive(&self.threading, &self.treadling, &self.tie_up)
    }

    fn check_cell(
        grid: &'static str,
        row: usize,
        col: usize,
        dimensions: (usize, usize),
    ) -> Result<()> {
        if row < dimensions.0 && col < dimensions.1 {
            Ok(())
        } else {
            tracing::debug!(grid, row, col, "edit outside draft rejected");
            Err(DraftError::CellOutOfBounds {
                grid,
                row,
                col,
                dimensions,
            })
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::empty(DraftDimensions::default())
    }
}
