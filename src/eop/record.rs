use crate::errors::{GravityError, GravityResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a pole-coordinate value is a confirmed final reference value or a
/// preliminary estimate.
///
/// Ordered by confidence: `Unknown < Predicted < Final`. Combining values
/// (e.g. the two endpoints of an interpolation interval) takes the minimum,
/// so a predicted endpoint taints the interpolated point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Finality {
    Unknown,

    Predicted,

    Final,
}

impl Finality {
    /// Minimum-confidence combination of two finality values.
    pub fn min_confidence(self, other: Finality) -> Finality {
        self.min(other)
    }

    pub fn is_final(self) -> bool {
        self == Finality::Final
    }
}

/// One Earth-orientation record: pole coordinates at a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EopRecord {
    /// Epoch as Modified Julian Date (UTC).
    pub mjd: f64,

    /// x coordinate of the terrestrial pole, in arcseconds.
    pub x_p: f64,

    /// y coordinate of the terrestrial pole, in arcseconds.
    pub y_p: f64,

    pub finality: Finality,
}

impl EopRecord {
    /// Creates a record, validating the pole coordinates.
    ///
    /// Observed polar motion stays within a fraction of an arcsecond; values
    /// beyond 6 arcsec indicate corrupt input rather than physics.
    pub fn new(mjd: f64, x_p: f64, y_p: f64, finality: Finality) -> GravityResult<Self> {
        if !mjd.is_finite() {
            return Err(GravityError::invalid_argument(format!(
                "Record epoch must be finite, got {}",
                mjd
            )));
        }

        if !x_p.is_finite() || x_p.abs() > 6.0 {
            return Err(GravityError::invalid_argument(format!(
                "X polar motion out of range: {} arcsec",
                x_p
            )));
        }

        if !y_p.is_finite() || y_p.abs() > 6.0 {
            return Err(GravityError::invalid_argument(format!(
                "Y polar motion out of range: {} arcsec",
                y_p
            )));
        }

        Ok(Self {
            mjd,
            x_p,
            y_p,
            finality,
        })
    }
}

/// Pole coordinates resolved at a query epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleCoordinates {
    /// x coordinate of the terrestrial pole, in arcseconds.
    pub x_p: f64,

    /// y coordinate of the terrestrial pole, in arcseconds.
    pub y_p: f64,

    pub finality: Finality,
}

impl std::fmt::Display for PoleCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pole(xp={:.6}\", yp={:.6}\", {:?})",
            self.x_p, self.y_p, self.finality
        )
    }
}
