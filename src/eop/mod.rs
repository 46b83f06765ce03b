pub mod interpolator;
pub mod manager;
pub mod parse;
pub mod record;
pub mod table;

#[cfg(feature = "eop-download")]
pub mod download;

pub use interpolator::{get_pole_coordinates, PoleInterpolator, QualityAdvisory, Resolution};
pub use manager::{EopConfig, EopSnapshots, TableProvider, IERS_FINALS_URL};
pub use record::{EopRecord, Finality, PoleCoordinates};
pub use table::EarthOrientationTable;
