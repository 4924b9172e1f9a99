//! Draft dimension constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Defaults match the editor's initial session layout
/// Default number of warp ends
pub const DEFAULT_WARP_ENDS: usize = 20;
/// Default number of shafts
pub const DEFAULT_SHAFTS: usize = 4;
/// Default number of treadles
pub const DEFAULT_TREADLES: usize = 6;
/// Default pattern length in weft picks
pub const DEFAULT_PICKS: usize = 20;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed grid sizes for one editing session
///
/// Changing any of these requires building a fresh draft, since all three
/// input grids must be re-initialized with matching shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftDimensions {
    /// Number of warp threads (W)
    pub warp_ends: usize,
    /// Number of shafts (S)
    pub shafts: usize,
    /// Number of treadles (T)
    pub treadles: usize,
    /// Number of weft picks in the pattern (P)
    pub picks: usize,
}

impl DraftDimensions {
    /// Create dimensions without validation
    pub const fn new(warp_ends: usize, shafts: usize, treadles: usize, picks: usize) -> Self {
        Self {
            warp_ends,
            shafts,
            treadles,
            picks,
        }
    }

    /// Check every dimension lies in `1..=MAX_GRID_DIMENSION`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first dimension that is zero or
    /// exceeds `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("warp_ends", self.warp_ends),
            ("shafts", self.shafts),
            ("treadles", self.treadles),
            ("picks", self.picks),
        ];

        for (parameter, value) in fields {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        Ok(())
    }

    /// Shape of the derived fabric (warp ends, picks)
    pub const fn fabric_shape(&self) -> (usize, usize) {
        (self.warp_ends, self.picks)
    }

    /// Shape of the tie-up (treadles, shafts)
    pub const fn tie_up_shape(&self) -> (usize, usize) {
        (self.treadles, self.shafts)
    }
}

impl Default for DraftDimensions {
    fn default() -> Self {
        Self::new(
            DEFAULT_WARP_ENDS,
            DEFAULT_SHAFTS,
            DEFAULT_TREADLES,
            DEFAULT_PICKS,
        )
    }
}
