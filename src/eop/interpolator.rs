//! Epoch-to-pole-coordinate resolution with quality tracking.
//!
//! [`PoleInterpolator`] turns one or many query epochs into xp/yp arcsecond
//! values, preserving the query's shape, and aggregates quality concerns
//! into a single non-fatal [`QualityAdvisory`] per call instead of a warning
//! per point. Callers decide whether to log, ignore, or escalate it.

use super::record::Finality;
use super::table::EarthOrientationTable;
use crate::errors::GravityResult;
use crate::samples::Samples;

/// Non-fatal notice that some resolved pole coordinates are not final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityAdvisory {
    /// Resolved points whose finality was not `Final`.
    pub non_final: usize,

    /// Total resolved points in the call.
    pub total: usize,
}

impl std::fmt::Display for QualityAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} resolved pole coordinates are not final",
            self.non_final, self.total
        )
    }
}

/// Shape-preserving resolution of pole coordinates at the queried epochs.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// x pole coordinates, in arcseconds, same shape as the query.
    pub x_p: Samples,

    /// y pole coordinates, in arcseconds, same shape as the query.
    pub y_p: Samples,

    /// Present when any resolved point is not final. The numeric results are
    /// still valid; this is advisory only.
    pub advisory: Option<QualityAdvisory>,
}

pub struct PoleInterpolator<'a> {
    table: &'a EarthOrientationTable,
}

impl<'a> PoleInterpolator<'a> {
    pub fn new(table: &'a EarthOrientationTable) -> Self {
        Self { table }
    }

    /// Resolves every query epoch to pole coordinates.
    ///
    /// Both xp and yp are returned in arcseconds, matching the table's unit
    /// contract. A scalar query yields scalar results; a sequence of N epochs
    /// yields length-N sequences, element-wise in the same order.
    ///
    /// # Errors
    ///
    /// `DataUnavailable` if the underlying table holds zero records. Epochs
    /// outside the covered range do not error; they resolve via boundary
    /// extrapolation and contribute to the advisory.
    pub fn resolve(&self, epochs: &Samples) -> GravityResult<Resolution> {
        let mut non_final = 0usize;
        let mut total = 0usize;

        let mut resolve_one = |mjd: f64| -> GravityResult<(f64, f64)> {
            let pole = self.table.lookup(mjd)?;
            total += 1;
            if pole.finality != Finality::Final {
                non_final += 1;
            }
            Ok((pole.x_p, pole.y_p))
        };

        let (x_p, y_p) = match epochs {
            Samples::Scalar(mjd) => {
                let (x, y) = resolve_one(*mjd)?;
                (Samples::Scalar(x), Samples::Scalar(y))
            }
            Samples::Sequence(mjds) => {
                let mut xs = Vec::with_capacity(mjds.len());
                let mut ys = Vec::with_capacity(mjds.len());
                for &mjd in mjds {
                    let (x, y) = resolve_one(mjd)?;
                    xs.push(x);
                    ys.push(y);
                }
                (Samples::Sequence(xs), Samples::Sequence(ys))
            }
        };

        let advisory = if non_final > 0 {
            Some(QualityAdvisory { non_final, total })
        } else {
            None
        };

        Ok(Resolution { x_p, y_p, advisory })
    }
}

/// Resolves pole coordinates for the given epochs, in arcseconds.
///
/// Convenience wrapper over [`PoleInterpolator::resolve`]; the advisory rides
/// along in the returned [`Resolution`] rather than being raised as an error.
pub fn get_pole_coordinates(
    table: &EarthOrientationTable,
    epochs: &Samples,
) -> GravityResult<Resolution> {
    PoleInterpolator::new(table).resolve(epochs)
}
