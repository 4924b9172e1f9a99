//! Weave structure derivation for hand-weaving drafts
//!
//! A draft describes a treadle loom setup with three grids: the threading
//! (which shaft each warp thread passes through), the tie-up (which shafts each
//! treadle lifts) and the treadling (which treadle is pressed on each pick).
//! The crate derives the resulting fabric, the drawdown, as a boolean matrix
//! recording where the warp lies over the weft.

#![forbid(unsafe_code)]

/// Draft input grids and the editable draft state
pub mod draft;
/// Configuration constants and error handling
pub mod io;
/// Fabric derivation from the draft grids
pub mod weave;

pub use draft::{Draft, Threading, TieUp, Treadling};
pub use io::configuration::DraftDimensions;
pub use io::error::{DraftError, Result};
pub use weave::{Fabric, ShaftSet, derive, liftplan};
