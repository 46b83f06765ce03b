//! Physical constants for the pole tide correction.
//!
//! Values follow the IERS Conventions and Wahr (1985); they are fixed by the
//! correction formula, not tunable parameters.

/// Amplitude factor for the elastic response of the Earth (dimensionless)
///
/// Wahr (1985): accounts for the solid Earth's elastic deformation under the
/// varying centrifugal potential. Value 1.164 exactly, as adopted for
/// gravimetric pole tide reductions.
pub const ELASTIC_AMPLITUDE_FACTOR: f64 = 1.164;

/// Mean angular velocity of the Earth, in rad/s
///
/// IERS Conventions nominal value: 7.292115×10⁻⁵ rad/s.
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292115e-5;

/// Equatorial radius of the Earth, in meters
///
/// Value 6 378 136 m as used in the Wahr (1985) pole tide expression.
/// Note this is the geophysical value, not the WGS84 semi-major axis.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6378136.0;

/// Arcseconds in one degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;
