use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of shaft indices
///
/// Uses 0-based indexing matching threading and tie-up columns.
/// Indices at or beyond the capacity are never members.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShaftSet {
    bits: BitVec,
}

impl ShaftSet {
    /// Create a set with no shafts raised
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set with every shaft raised
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Build a set from one tie-up row, where `row[s]` marks shaft `s`
    pub fn from_row<'a>(row: impl IntoIterator<Item = &'a bool>) -> Self {
        Self {
            bits: row.into_iter().copied().collect(),
        }
    }

    /// Number of shafts this set can describe
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a shaft index, ignoring indices beyond capacity
    pub fn insert(&mut self, shaft: usize) {
        if shaft < self.bits.len() {
            self.bits.set(shaft, true);
        }
    }

    /// Remove a shaft index
    pub fn remove(&mut self, shaft: usize) {
        if shaft < self.bits.len() {
            self.bits.set(shaft, false);
        }
    }

    /// Test shaft membership
    pub fn contains(&self, shaft: usize) -> bool {
        self.bits.get(shaft).as_deref() == Some(&true)
    }

    /// Test if no shafts are raised
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count raised shafts
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate raised shaft indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all raised shaft indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for ShaftSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaftSet({} shafts: {:?})", self.count(), self.to_vec())
    }
}
