//! Polar motion (pole tide) gravity correction.
//!
//! Variations in the geocentric position of the Earth's rotation axis cause
//! deformation within the Earth due to centrifugal forces. With the rotation
//! axis position expressed as pole coordinates (xp, yp) relative to the IERS
//! reference pole, the gravity correction is, after Wahr (1985):
//!
//! ```text
//! δg = −δ · ω² · a · 2·sinφ·cosφ·(xp·cosλ − yp·sinλ)   [m/s²]
//! ```
//!
//! where φ, λ are the geocentric latitude and longitude of the station,
//! ω the mean angular velocity of the Earth, a its equatorial radius, and
//! δ = 1.164 the amplitude factor for the Earth's elastic response.
//!
//! Reference: Wahr, J. M. (1985), Deformation induced by polar motion,
//! J. Geophys. Res., 90(B11), 9363-9368.

use crate::constants::{
    ARCSEC_PER_DEGREE, EARTH_ANGULAR_VELOCITY, EARTH_EQUATORIAL_RADIUS_M,
    ELASTIC_AMPLITUDE_FACTOR,
};
use crate::errors::{GravityError, GravityResult};
use crate::samples::Samples;
use crate::station::StationLocation;

/// Pole tide correction for scalar inputs, in m/s².
///
/// `x_p`/`y_p` are pole coordinates in arcseconds; `lat`/`lon` are the
/// station's geocentric coordinates in degrees. Pure and deterministic: no
/// I/O, and every finite valid input yields a finite result. At lat = ±90°
/// the factor sin(lat)·cos(lat) vanishes, so the correction is exactly zero
/// without special-casing; longitude wraps implicitly through the periodic
/// trig functions.
///
/// # Errors
///
/// `InvalidArgument` if `lat` is outside [-90, 90] degrees. Such values have
/// no geodetic meaning, so they are rejected rather than silently clamped,
/// even though the formula would compute a number for them.
pub fn polar_motion_correction_scalar(
    x_p: f64,
    y_p: f64,
    lat: f64,
    lon: f64,
) -> GravityResult<f64> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GravityError::invalid_argument(format!(
            "Latitude {} outside valid range [-90, 90] degrees",
            lat
        )));
    }

    Ok(correction_unchecked(x_p, y_p, lat, lon))
}

fn correction_unchecked(x_p: f64, y_p: f64, lat: f64, lon: f64) -> f64 {
    let x_p = (x_p / ARCSEC_PER_DEGREE).to_radians();
    let y_p = (y_p / ARCSEC_PER_DEGREE).to_radians();
    let lat = lat.to_radians();
    let lon = lon.to_radians();

    let coords = 2.0 * lat.sin() * lat.cos() * (x_p * lon.cos() - y_p * lon.sin());

    -ELASTIC_AMPLITUDE_FACTOR
        * EARTH_ANGULAR_VELOCITY
        * EARTH_ANGULAR_VELOCITY
        * EARTH_EQUATORIAL_RADIUS_M
        * coords
}

/// Pole tide correction under broadcast rules, in m/s².
///
/// Element-wise over equal-length sequences; a scalar operand combines with
/// any shape. The result is scalar only when every operand is scalar.
///
/// # Errors
///
/// `InvalidArgument` for mismatched non-scalar shapes or any latitude
/// element outside [-90, 90] degrees.
pub fn polar_motion_correction(
    x_p: &Samples,
    y_p: &Samples,
    lat: &Samples,
    lon: &Samples,
) -> GravityResult<Samples> {
    for lat_value in lat.iter() {
        if !(-90.0..=90.0).contains(&lat_value) {
            return Err(GravityError::invalid_argument(format!(
                "Latitude {} outside valid range [-90, 90] degrees",
                lat_value
            )));
        }
    }

    Samples::broadcast4(x_p, y_p, lat, lon, correction_unchecked)
}

/// Pole tide correction at a validated station, in m/s².
pub fn polar_motion_correction_at(
    x_p: &Samples,
    y_p: &Samples,
    station: &StationLocation,
) -> GravityResult<Samples> {
    polar_motion_correction(
        x_p,
        y_p,
        &Samples::Scalar(station.latitude),
        &Samples::Scalar(station.longitude),
    )
}
