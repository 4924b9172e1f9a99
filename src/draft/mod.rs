//! Draft input grids and the editable draft state
//!
//! This module contains:
//! - Threading (warp thread to shaft)
//! - Treadling (pick to treadle)
//! - Tie-up (treadle to shafts)
//! - The caller-owned draft that bundles them for editing

/// Caller-owned editable draft
pub mod state;
/// Warp thread shaft assignment
pub mod threading;
/// Treadle-to-shaft wiring
pub mod tie_up;
/// Pick treadle sequence
pub mod treadling;

pub use state::Draft;
pub use threading::Threading;
pub use tie_up::TieUp;
pub use treadling::Treadling;
