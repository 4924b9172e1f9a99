//! Weave structure derivation
//!
//! Maps threading, treadling and tie-up to the fabric interlacement. A warp
//! thread is raised over a pick exactly when it is drawn through a shaft, a
//! treadle is pressed on that pick, and that treadle is tied to the shaft.
//! Every cell depends only on `threading[warp]` and `treadling[pick]`, so the
//! derivation is a pair of 1-D lookups feeding a 2-D lookup.

use ndarray::Array2;

use crate::draft::{Threading, TieUp, Treadling};
use crate::io::error::Result;
use crate::weave::fabric::Fabric;
use crate::weave::shafts::ShaftSet;

/// Derive the fabric from the three draft grids
///
/// The result has shape `(threading.len(), treadling.len())` whatever the
/// tie-up's shape. Unthreaded warp ends and picks with no treadle pressed are
/// all weft (`false`). Inputs are only borrowed and the same inputs always
/// produce the same fabric.
///
/// # Errors
///
/// Validation runs before any cell is computed and reports the first problem:
/// - `ShaftOutOfRange` if a warp thread's shaft is not below `tie_up.shafts()`
/// - `TreadleOutOfRange` if a pick's treadle is not below `tie_up.treadles()`
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(
        warp_ends = threading.len(),
        picks = treadling.len(),
        treadles = tie_up.treadles(),
        shafts = tie_up.shafts()
    )
)]
pub fn derive(threading: &Threading, treadling: &Treadling, tie_up: &TieUp) -> Result<Fabric> {
    threading.validate(tie_up.shafts()).inspect_err(|error| {
        tracing::debug!(%error, "rejected threading");
    })?;

    let lifts = liftplan(treadling, tie_up)?;
    let shape = (threading.len(), lifts.len());

    let cells = Array2::from_shape_fn(shape, |(warp, pick)| {
        threading.shaft(warp).is_some_and(|shaft| {
            lifts
                .get(pick)
                .is_some_and(|lifted| lifted.contains(shaft))
        })
    });

    tracing::trace!(warp_up = cells.iter().filter(|&&up| up).count(), "derived fabric");
    Ok(Fabric::from_array(cells))
}

/// Shafts raised on each pick
///
/// Entry `j` is the tie-up row of the treadle pressed on pick `j`, or the
/// empty set when no treadle is pressed. Every set has capacity
/// `tie_up.shafts()`.
///
/// # Errors
///
/// Returns `TreadleOutOfRange` for the first pick whose treadle is not below
/// `tie_up.treadles()`
pub fn liftplan(treadling: &Treadling, tie_up: &TieUp) -> Result<Vec<ShaftSet>> {
    treadling.validate(tie_up.treadles()).inspect_err(|error| {
        tracing::debug!(%error, "rejected treadling");
    })?;

    Ok(treadling
        .iter()
        .map(|treadle| {
            treadle.map_or_else(
                || ShaftSet::new(tie_up.shafts()),
                |treadle| tie_up.lifted_shafts(treadle),
            )
        })
        .collect())
}
