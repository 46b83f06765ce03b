//! Polar motion (pole tide) gravity correction for gravity-survey pipelines.
//!
//! The wandering of the Earth's rotation axis relative to the IERS reference
//! pole deforms the solid Earth and perturbs measured surface gravity. This
//! crate resolves pole coordinates (xp, yp) from an Earth-orientation table
//! at arbitrary observation epochs, tracks whether the resolved values are
//! final reference values, and applies the closed-form Wahr (1985) pole tide
//! correction.
//!
//! # Example
//!
//! ```
//! use pole_tide::{
//!     get_pole_coordinates, polar_motion_correction, EarthOrientationTable, EopRecord,
//!     Finality, Samples,
//! };
//!
//! let table = EarthOrientationTable::new(vec![
//!     EopRecord::new(60000.0, 0.05, 0.35, Finality::Final)?,
//!     EopRecord::new(60001.0, 0.06, 0.34, Finality::Final)?,
//! ]);
//!
//! let resolution = get_pole_coordinates(&table, &Samples::from(60000.5))?;
//! assert!(resolution.advisory.is_none());
//!
//! let g = polar_motion_correction(
//!     &resolution.x_p,
//!     &resolution.y_p,
//!     &Samples::from(48.8),
//!     &Samples::from(2.3),
//! )?;
//! assert!(g.as_scalar()?.abs() < 1e-6);
//! # Ok::<(), pole_tide::GravityError>(())
//! ```
//!
//! Table acquisition (download, parse, staleness-driven refresh) is kept out
//! of the query path: see [`eop::manager`] for the snapshot-replacement
//! policy and, behind the `eop-download` feature, [`eop::download`] for an
//! IERS finals2000A fetcher.

pub mod constants;
pub mod correction;
pub mod eop;
pub mod errors;
pub mod samples;
pub mod station;

pub use correction::{
    polar_motion_correction, polar_motion_correction_at, polar_motion_correction_scalar,
};
pub use eop::{
    get_pole_coordinates, EarthOrientationTable, EopConfig, EopRecord, EopSnapshots, Finality,
    PoleCoordinates, PoleInterpolator, QualityAdvisory, Resolution, TableProvider,
};
pub use errors::{GravityError, GravityResult};
pub use samples::Samples;
pub use station::StationLocation;

#[cfg(feature = "eop-download")]
pub use eop::download::EopDownloader;
