//! Per-warp-thread shaft assignment

use crate::io::error::{DraftError, Result};

/// Shaft assignment for each warp thread, `None` when the thread is on no shaft
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Threading {
    shafts: Vec<Option<usize>>,
}

impl Threading {
    /// Create a threading of `warp_ends` unassigned threads
    pub fn new(warp_ends: usize) -> Self {
        Self {
            shafts: vec![None; warp_ends],
        }
    }

    /// Wrap an existing assignment without checking it against any shaft count
    pub const fn from_indices(shafts: Vec<Option<usize>>) -> Self {
        Self { shafts }
    }

    /// Number of warp threads (W)
    pub const fn len(&self) -> usize {
        self.shafts.len()
    }

    /// Whether there are no warp threads
    pub const fn is_empty(&self) -> bool {
        self.shafts.is_empty()
    }

    /// Shaft carrying warp thread `thread`
    ///
    /// Returns `None` both for unassigned threads and for positions past the end.
    pub fn shaft(&self, thread: usize) -> Option<usize> {
        self.shafts.get(thread).copied().flatten()
    }

    /// Read-only view of every assignment
    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.shafts
    }

    /// Iterate assignments in warp order
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.shafts.iter().copied()
    }

    /// Replace the assignment of one warp thread
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` if `thread` is past the end
    pub fn assign(&mut self, thread: usize, shaft: Option<usize>) -> Result<()> {
        let len = self.shafts.len();
        let slot = self
            .shafts
            .get_mut(thread)
            .ok_or(DraftError::PositionOutOfBounds {
                grid: "threading",
                position: thread,
                len,
            })?;
        *slot = shaft;
        Ok(())
    }

    /// Flip the (thread, shaft) cell
    ///
    /// Clears the thread if it is already on `shaft`, otherwise moves it there,
    /// so a thread never sits on more than one shaft.
    ///
    /// # Errors
    ///
    /// Returns `PositionOutOfBounds` if `thread` is past the end
    pub fn toggle(&mut self, thread: usize, shaft: usize) -> Result<()> {
        let next = if self.shaft(thread) == Some(shaft) {
            None
        } else {
            Some(shaft)
        };
        self.assign(thread, next)
    }

    /// Check every assigned shaft is below `shafts`
    ///
    /// # Errors
    ///
    /// Returns `ShaftOutOfRange` for the first thread whose shaft is too large
    pub fn validate(&self, shafts: usize) -> Result<()> {
        for (thread, shaft) in self.iter().enumerate() {
            if let Some(shaft) = shaft
                && shaft >= shafts
            {
                return Err(DraftError::ShaftOutOfRange {
                    thread,
                    shaft,
                    shafts,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Option<usize>>> for Threading {
    fn from(shafts: Vec<Option<usize>>) -> Self {
        Self::from_indices(shafts)
    }
}
