//! Immutable snapshot of pole-coordinate history.
//!
//! [`EarthOrientationTable`] holds an ordered, deduplicated time series of
//! [`EopRecord`]s and answers point queries by linear interpolation. The
//! table never mutates after construction; a refreshed data set becomes a
//! new table that replaces the old one (see [`super::manager`]).

use super::record::{EopRecord, Finality, PoleCoordinates};
use crate::errors::{GravityError, GravityResult};

/// Epochs closer than this (in days, ~10 µs) count as an exact record hit.
const EXACT_MATCH_TOLERANCE_DAYS: f64 = 1e-10;

pub struct EarthOrientationTable {
    records: Vec<EopRecord>,
}

impl EarthOrientationTable {
    /// Builds a table from records in any order.
    ///
    /// Records are stable-sorted by epoch and duplicate epochs collapse to
    /// the first occurrence, so the stored sequence is strictly increasing.
    pub fn new(mut records: Vec<EopRecord>) -> Self {
        records.sort_by(|a, b| {
            a.mjd
                .partial_cmp(&b.mjd)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records.dedup_by(|a, b| (a.mjd - b.mjd).abs() < EXACT_MATCH_TOLERANCE_DAYS);

        Self { records }
    }

    /// Resolves pole coordinates at `mjd`.
    ///
    /// - Exactly on a stored record: that record's values and finality, with
    ///   zero interpolation error.
    /// - Strictly between two consecutive records: xp and yp are linearly
    ///   interpolated independently; finality is the minimum-confidence
    ///   finality of the bracketing pair.
    /// - Outside the covered range: the nearest boundary record's values with
    ///   finality forced to `Predicted`. Extrapolation never fails.
    ///
    /// # Errors
    ///
    /// `DataUnavailable` if the table holds zero records.
    pub fn lookup(&self, mjd: f64) -> GravityResult<PoleCoordinates> {
        if self.records.is_empty() {
            return Err(GravityError::data_unavailable(
                "No Earth orientation records available for interpolation",
            ));
        }

        let first = &self.records[0];
        let last = self.records.last().unwrap();

        if mjd < first.mjd - EXACT_MATCH_TOLERANCE_DAYS {
            return Ok(Self::extrapolated(first));
        }
        if mjd > last.mjd + EXACT_MATCH_TOLERANCE_DAYS {
            return Ok(Self::extrapolated(last));
        }

        if let Some(record) = self
            .records
            .iter()
            .find(|r| (r.mjd - mjd).abs() < EXACT_MATCH_TOLERANCE_DAYS)
        {
            return Ok(PoleCoordinates {
                x_p: record.x_p,
                y_p: record.y_p,
                finality: record.finality,
            });
        }

        let (before_idx, after_idx) = self.bracketing_interval(mjd);
        Ok(self.linear_interpolate(mjd, before_idx, after_idx))
    }

    fn extrapolated(boundary: &EopRecord) -> PoleCoordinates {
        PoleCoordinates {
            x_p: boundary.x_p,
            y_p: boundary.y_p,
            // Out-of-range epochs are never confirmed reference values,
            // regardless of the boundary record's own finality.
            finality: boundary.finality.min_confidence(Finality::Predicted),
        }
    }

    /// Binary search for the consecutive pair bracketing `mjd`.
    ///
    /// Caller guarantees `mjd` lies within the covered range and the table
    /// holds at least one record; a single-record table never reaches here
    /// because such an epoch is either an exact hit or out of range.
    fn bracketing_interval(&self, mjd: f64) -> (usize, usize) {
        let mut left = 0;
        let mut right = self.records.len() - 1;

        while right - left > 1 {
            let mid = (left + right) / 2;
            if self.records[mid].mjd <= mjd {
                left = mid;
            } else {
                right = mid;
            }
        }

        (left, right)
    }

    fn linear_interpolate(&self, mjd: f64, before_idx: usize, after_idx: usize) -> PoleCoordinates {
        let r1 = &self.records[before_idx];
        let r2 = &self.records[after_idx];

        let t = (mjd - r1.mjd) / (r2.mjd - r1.mjd);

        PoleCoordinates {
            x_p: r1.x_p + t * (r2.x_p - r1.x_p),
            y_p: r1.y_p + t * (r2.y_p - r1.y_p),
            finality: r1.finality.min_confidence(r2.finality),
        }
    }

    /// First and last covered epoch, or `None` for an empty table.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.records[0].mjd, self.records.last().unwrap().mjd))
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[EopRecord] {
        &self.records
    }
}
