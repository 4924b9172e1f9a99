//! Per-pick treadle sequence

use crate::io::error::{DraftError, Result};

/// Treadle engaged on each weft pick, `None` when no treadle is pressed
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Treadling {
    treadles: Vec<Option<usize>>,
}

impl Treadling {
    /// Create a treadling of `picks` picks with no treadle pressed
    pub fn new(picks: usize) -> Self {
        Self {
            treadles: vec![None; picks],
        }
    }

    /// Wrap an existing sequence without checking it against any treadle count
    pub const fn from_indices(treadles: Vec<Option<usize>>) -> Self {
        Self { treadles }
    }

    /// Number of picks (P)
    pub const fn len(&self) -> usize {
        self.treadles.len()
    }

    /// Whether the pattern has no picks
    pub const fn is_empty(&self) -> bool {
        self.treadles.is_empty()
    }

    /// Treadle pressed on pick `pick`, `None` if unassigned or past the end
    pub fn treadle(&self, pick: usize) -> Option<usize> {
        self.treadles.get(pick).copied().flatten()
    }

    /// Read-only view of the sequence
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.treadles
    }

    /// Iterate treadles in pick order
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.treadles.iter().copied()
    }

    /// Replace the treadle of one pick
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` if `pick` is past the end
    pub fn assign(&mut self, pick: usize, treadle: Option<usize>) -> Result<()> {
        let len = self.treadles.len();
        let slot = self
            .treadles
            .get_mut(pick)
            .ok_or(DraftError::PositionOutOfBounds {
                grid: "treadling",
                position: pick,
                len,
            })?;
        *slot = treadle;
        Ok(())
    }

    /// Flip the (pick, treadle) cell
    ///
    /// Releases the pick if `treadle` is already pressed on it, otherwise
    /// presses `treadle` instead of whatever was pressed before.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` if `pick` is past the end
    pub fn toggle(&mut self, pick: usize, treadle: usize) -> Result<()> {
        let next = if self.treadle(pick) == Some(treadle) {
            None
        } else {
            Some(treadle)
        };
        self.assign(pick, next)
    }

    /// Check every pressed treadle is below `treadles`
    ///
    /// # Errors
    ///
    /// Returns `TreadleOutOfRange` for the first pick whose treadle is too large
    pub fn validate(&self, treadles: usize) -> Result<()> {
        for (pick, treadle) in self.iter().enumerate() {
            if let Some(treadle) = treadle
                && treadle >= treadles
            {
                return Err(DraftError::TreadleOutOfRange {
                    pick,
                    treadle,
                    treadles,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Option<usize>>> for Treadling {
    fn from(treadles: Vec<Option<usize>>) -> Self {
        Self::from_indices(treadles)
    }
}
