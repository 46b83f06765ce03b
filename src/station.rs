//! Observation station position in geocentric coordinates.
//!
//! The pole tide formula takes the station's **geocentric** latitude and
//! longitude referred to the IERS reference pole, in degrees. Geocentric
//! latitude is the angle measured at the Earth's center of mass; it differs
//! from geodetic (ellipsoidal) latitude by up to ~11 arcminutes at
//! mid-latitudes, so the two must not be mixed.

use crate::errors::{GravityError, GravityResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A gravity station position in geocentric coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationLocation {
    /// Geocentric latitude in degrees. North is positive.
    pub latitude: f64,
    /// Geocentric longitude in degrees. East is positive.
    pub longitude: f64,
}

impl StationLocation {
    /// Creates a station location from coordinates in degrees.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either coordinate is non-finite or the
    /// latitude lies outside [-90, 90]. Longitude is not range-restricted:
    /// the correction formula is periodic in longitude, so any finite value
    /// has a well-defined meaning.
    pub fn from_degrees(latitude: f64, longitude: f64) -> GravityResult<Self> {
        if !latitude.is_finite() {
            return Err(GravityError::invalid_argument("Latitude must be finite"));
        }
        if !longitude.is_finite() {
            return Err(GravityError::invalid_argument("Longitude must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GravityError::invalid_argument(format!(
                "Latitude {} outside valid range [-90, 90] degrees",
                latitude
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for StationLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Station(lat={:.6}°, lon={:.6}°)",
            self.latitude, self.longitude
        )
    }
}
