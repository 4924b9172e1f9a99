//! Weave structure derivation and its result types

/// Fabric derivation from threading, treadling and tie-up
pub mod engine;
/// Derived warp-over-weft matrix
pub mod fabric;
/// Bitset of raised shafts
pub mod shafts;

pub use engine::{derive, liftplan};
pub use fabric::Fabric;
pub use shafts::ShaftSet;
